// crates/guide-core/src/map/hover.rs
use super::geojson::{Feature, FeatureCollection};
use crate::lookup::{resolve_district, DistrictMatch, MatchTier, RegionCard};
use crate::model::{District, Region};
use serde::Serialize;

/// Side panel content for a hovered district feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DistrictPanel<'a> {
    Found {
        hovered: String,
        district: &'a District,
        tier: MatchTier,
    },
    /// The map knows the place but the guide has no write-up yet.
    ComingSoon { hovered: String },
}

impl<'a> DistrictPanel<'a> {
    pub fn hovered(&self) -> &str {
        match self {
            DistrictPanel::Found { hovered, .. } | DistrictPanel::ComingSoon { hovered } => hovered,
        }
    }

    pub fn district(&self) -> Option<&'a District> {
        match self {
            DistrictPanel::Found { district, .. } => Some(district),
            DistrictPanel::ComingSoon { .. } => None,
        }
    }
}

/// Pointer moved onto a district feature.
///
/// `None` means the feature carries no name and the panel should clear.
pub fn hover_district<'a>(feature: &Feature, districts: &'a [District]) -> Option<DistrictPanel<'a>> {
    let hovered = feature.place_name()?;
    let panel = match resolve_district(hovered, districts) {
        Some(DistrictMatch { district, tier }) => DistrictPanel::Found {
            hovered: hovered.to_string(),
            district,
            tier,
        },
        None => DistrictPanel::ComingSoon {
            hovered: hovered.to_string(),
        },
    };
    Some(panel)
}

/// Pointer moved onto a region feature, island boxes included.
pub fn hover_region(feature: &Feature, regions: &[Region]) -> Option<RegionCard> {
    feature
        .place_name()
        .map(|name| RegionCard::lookup(name, regions))
}

/// How one named feature of a map file resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureMatch<'a> {
    pub feature_name: String,
    pub matched: Option<DistrictMatch<'a>>,
}

/// Resolve every named feature of a district map, in file order.
pub fn match_features<'a>(map: &FeatureCollection, districts: &'a [District]) -> Vec<FeatureMatch<'a>> {
    map.named_features()
        .map(|(_, name)| FeatureMatch {
            feature_name: name.to_string(),
            matched: resolve_district(name, districts),
        })
        .collect()
}
