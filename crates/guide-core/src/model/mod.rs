// crates/guide-core/src/model/mod.rs
pub mod climate;
pub mod country;
pub mod region;

pub use climate::{CrowdLevel, MonthlyClimate, RegionHints, RegionSeasons};
pub use country::{
    Country, Cultural, Currency, Embassies, Emergency, EntryKind, EntryPoint, EntryRoute,
    Holiday, Language, RouteKind, RouteOption, SafetyTip, TimeZone, VisaKind, VisaRequirement,
};
pub use region::{District, Region};
