// crates/guide-core/src/lookup/mod.rs

//! # Lookups
//!
//! Tie free-text names coming from map data to structured records.
//! Both lookups are soft: "not found" is `None`, never an error.

pub mod region;
pub mod resolve;

pub use region::{find_region, RegionCard, UNAVAILABLE};
pub use resolve::{resolve, resolve_district, resolve_in_region, DistrictMatch, MatchTier};
