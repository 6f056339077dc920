// crates/guide-core/src/lib.rs

pub mod climate; // Best-time lines, bands, season profiles
pub mod clock; // GMT label parsing and local clocks
pub mod error;
pub mod guide;
pub mod loader;
pub mod lookup; // District resolver and region accessor
pub mod map; // GeoJSON features and hover lookups
pub mod model;
pub mod sections; // Page groupings (safety, languages, visas, entry points)
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{GuideError, Result};
pub use crate::guide::{Guide, GuideStats};
pub use crate::lookup::{
    find_region, resolve, resolve_district, resolve_in_region, DistrictMatch, MatchTier,
    RegionCard,
};
pub use crate::model::{Country, District, Region};
pub use crate::text::normalize_name;
pub use crate::traits::NameMatch;

/// Everything a typical caller needs in one import.
pub mod prelude {
    pub use crate::clock::{parse_gmt_offset, ClockBoard};
    pub use crate::error::{GuideError, Result};
    pub use crate::guide::{Guide, GuideStats};
    pub use crate::lookup::{find_region, resolve_district, resolve_in_region, RegionCard};
    pub use crate::map::{hover_district, hover_region, DistrictPanel, FileFetcher, MapCache};
    pub use crate::model::{Country, District, Region};
    pub use crate::traits::NameMatch;
}
