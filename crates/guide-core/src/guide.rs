// crates/guide-core/src/guide.rs
use crate::model::{Country, District, Region, RegionHints, RegionSeasons};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Simple aggregate statistics for a loaded guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideStats {
    pub countries: usize,
    pub regions: usize,
    pub districts: usize,
}

/// The whole dataset.
///
/// Built once by the loader and then only borrowed: callers that need it
/// (CLI commands, the WASM handle, map hover lookups) receive a `&Guide`
/// instead of reaching for a process-wide singleton.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Guide {
    pub countries: Vec<Country>,
    /// District lists keyed by region slug.
    #[serde(default)]
    pub districts: BTreeMap<String, Vec<District>>,
    #[serde(default)]
    pub seasons: Vec<RegionSeasons>,
    /// Travel hints keyed by region slug.
    #[serde(default)]
    pub hints: BTreeMap<String, RegionHints>,
}

impl Guide {
    pub fn stats(&self) -> GuideStats {
        GuideStats {
            countries: self.countries.len(),
            regions: self.countries.iter().map(|c| c.regions.len()).sum(),
            districts: self.districts.values().map(Vec::len).sum(),
        }
    }

    /// All countries in the guide.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Find a country by slug, case-insensitive (e.g. `"portugal"`).
    pub fn country(&self, slug: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.slug.eq_ignore_ascii_case(slug.trim()))
    }

    /// Districts of a region, or an empty slice when the region has none.
    pub fn districts_for(&self, region_slug: &str) -> &[District] {
        self.districts
            .get(region_slug)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Region by slug across all countries, with its owning country.
    pub fn region_by_slug(&self, slug: &str) -> Option<(&Region, &Country)> {
        self.countries
            .iter()
            .find_map(|c| c.region_by_slug(slug).map(|r| (r, c)))
    }

    pub fn hints_for(&self, region_slug: &str) -> Option<&RegionHints> {
        self.hints.get(region_slug)
    }

    /// Every `(district, region slug)` pair, in region-slug order.
    pub fn iter_districts(&self) -> impl Iterator<Item = (&District, &str)> {
        self.districts
            .iter()
            .flat_map(|(slug, list)| list.iter().map(move |d| (d, slug.as_str())))
    }
}
