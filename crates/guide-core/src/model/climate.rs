// crates/guide-core/src/model/climate.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Medium => "Medium",
            CrowdLevel::High => "High",
        }
    }
}

/// Averages for one month, nationwide or for a single region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyClimate {
    /// English month name, e.g. `"April"`.
    pub month: String,
    /// °C
    pub average_high: f64,
    /// °C
    pub average_low: f64,
    /// mm
    pub rainfall: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub crowd_level: Option<CrowdLevel>,
    #[serde(default)]
    pub events: Vec<String>,
}

/// Seasonal profile for a region, keyed by the region's display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSeasons {
    pub region_name: String,
    pub best_months: Vec<String>,
    pub peak_months: Vec<String>,
    pub off_season_months: Vec<String>,
    pub description: String,
}

/// Hand-written travel hints per region slug.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionHints {
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub months_to_avoid: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}
