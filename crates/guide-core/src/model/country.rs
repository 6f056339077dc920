// crates/guide-core/src/model/country.rs
use super::climate::MonthlyClimate;
use super::region::Region;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A country entry with everything the guide pages show about it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub slug: String,
    pub capital: String,
    pub languages: Vec<Language>,
    pub currency: Currency,
    pub time_zones: Vec<TimeZone>,
    pub visa_requirements: Vec<VisaRequirement>,
    pub safety_tips: Vec<SafetyTip>,
    pub cultural: Cultural,
    pub holidays: Vec<Holiday>,
    pub regions: Vec<Region>,
    pub emergency: Emergency,
    pub connectivity: String,
    pub transportation: String,
    pub electricity: String,
    pub cuisine: String,
    /// Keyed by region slug, plus the special `"nationwide"` key.
    #[serde(default)]
    pub climate: BTreeMap<String, Vec<MonthlyClimate>>,
    pub entry_points: Vec<EntryPoint>,
    #[serde(default)]
    pub common_routes: Vec<EntryRoute>,
    pub fun_fact: String,
    pub population: String,
    /// In km², as display text.
    pub area: String,
    #[serde(default)]
    pub safety_level: Option<String>,
    #[serde(default)]
    pub top_reasons: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub official: bool,
    /// Share of the population that speaks it.
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub name: String,
    pub code: String,
    pub symbol: String,
    #[serde(default)]
    pub exchange_tips: Option<String>,
}

/// A named zone with its offset label, e.g. `"GMT+0"` or `"GMT-1"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZone {
    pub name: String,
    pub gmt_offset: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Entry policy kind. Unknown labels survive a load/save cycle as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisaKind {
    VisaFree,
    VisaOnArrival,
    EVisa,
    VisaRequired,
    Other(String),
}

impl VisaKind {
    pub fn as_str(&self) -> &str {
        match self {
            VisaKind::VisaFree => "visa-free",
            VisaKind::VisaOnArrival => "visa-on-arrival",
            VisaKind::EVisa => "e-visa",
            VisaKind::VisaRequired => "visa-required",
            VisaKind::Other(s) => s,
        }
    }

    /// Heading shown for the requirement.
    pub fn label(&self) -> &str {
        match self {
            VisaKind::VisaFree => "Visa-Free",
            VisaKind::VisaOnArrival => "Visa on Arrival",
            VisaKind::EVisa => "e-Visa Required",
            VisaKind::VisaRequired => "Visa Required",
            VisaKind::Other(s) => s,
        }
    }
}

impl From<String> for VisaKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "visa-free" => VisaKind::VisaFree,
            "visa-on-arrival" => VisaKind::VisaOnArrival,
            "e-visa" => VisaKind::EVisa,
            "visa-required" => VisaKind::VisaRequired,
            _ => VisaKind::Other(value),
        }
    }
}

impl From<VisaKind> for String {
    fn from(value: VisaKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for VisaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaRequirement {
    /// Nationalities or blocs the rule applies to.
    pub for_citizens: Vec<String>,
    pub requirement: VisaKind,
    /// e.g. `"90 days"`
    pub duration: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafetyTip {
    /// `"general"`, `"health"`, `"transportation"`, `"scams"`, ...
    pub category: String,
    pub tip: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cultural {
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub dress_code: String,
    pub tipping: String,
    pub values: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub name: String,
    /// `"MM-DD"`, or `"varies"` for movable holidays.
    pub date: String,
    pub description: String,
    pub is_public: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Embassies {
    #[serde(default)]
    pub us: Option<String>,
    #[serde(default)]
    pub uk: Option<String>,
    #[serde(default)]
    pub eu: Option<String>,
    #[serde(default)]
    pub au: Option<String>,
    #[serde(default)]
    pub ca: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emergency {
    pub police: String,
    pub ambulance: String,
    pub fire: String,
    #[serde(default)]
    pub general_emergency: Option<String>,
    #[serde(default)]
    pub embassy: Option<Embassies>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Airport,
    Border,
    Port,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub nearest_city: String,
    /// IATA code for airports.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Flight,
    Land,
    Sea,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteOption {
    #[serde(rename = "type")]
    pub kind: RouteKind,
    pub description: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRoute {
    pub from_country: String,
    pub options: Vec<RouteOption>,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Read-only slice of regions belonging to this country.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn time_zones(&self) -> &[TimeZone] {
        &self.time_zones
    }

    /// Monthly climate rows for a region slug or `"nationwide"`.
    pub fn climate_for(&self, key: &str) -> &[MonthlyClimate] {
        self.climate.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Region by its slug (exact).
    pub fn region_by_slug(&self, slug: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.slug == slug)
    }
}

impl NameMatch for Country {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
