// crates/guide-core/src/map/mod.rs

//! # Map layer
//!
//! Feature data as a map widget delivers it, and the lookups a pointer
//! hover performs against it. Drawing and hit-testing belong to the map
//! library; this module starts from the feature under the pointer.

pub mod fetch;
pub mod geojson;
pub mod hover;

pub use fetch::{district_map_file, region_map_file, FileFetcher, MapCache, MapFetcher};
#[cfg(feature = "fetch")]
pub use fetch::HttpFetcher;
pub use geojson::{island_boxes, Feature, FeatureCollection, FeatureProperties};
pub use hover::{hover_district, hover_region, match_features, DistrictPanel, FeatureMatch};
