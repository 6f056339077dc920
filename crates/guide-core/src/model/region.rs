// crates/guide-core/src/model/region.rs
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// One of the country's top-level tourism regions.
///
/// `slug` is the stable key, `name` is the display and matching key.
/// Static for the lifetime of a loaded [`crate::Guide`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub slug: String,
    pub capital: String,
    pub area: String,
    pub population: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub climate_image: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
}

/// A sub-area of a region used for map drill-down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub main_city: Option<String>,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Region {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl District {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

impl NameMatch for Region {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl NameMatch for District {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
