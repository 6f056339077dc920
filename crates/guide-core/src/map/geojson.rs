// crates/guide-core/src/map/geojson.rs
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A GeoJSON `FeatureCollection`. Geometry stays opaque.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub geometry: Value,
}

/// The feature properties the guide reads. Everything else is kept in
/// `extra` so a collection survives a round trip untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Region-level maps name features here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// District boundary files use the GADM column name.
    #[serde(rename = "NAME_1", default, skip_serializing_if = "Option::is_none")]
    pub name_1: Option<String>,
    /// Synthetic hover target around an island group.
    #[serde(rename = "isBox", default, skip_serializing_if = "Option::is_none")]
    pub is_box: Option<bool>,
    #[serde(rename = "isLabel", default, skip_serializing_if = "Option::is_none")]
    pub is_label: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl Feature {
    /// The place name a hover should look up: `region`, else `NAME_1`.
    /// Blank values count as missing.
    pub fn place_name(&self) -> Option<&str> {
        [&self.properties.region, &self.properties.name_1]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    pub fn is_box(&self) -> bool {
        self.properties.is_box.unwrap_or(false)
    }

    pub fn is_label(&self) -> bool {
        self.properties.is_label.unwrap_or(false)
    }

    /// Axis-aligned box polygon tagged as an island hover target.
    pub fn bounding_box(region: &str, west: f64, south: f64, east: f64, north: f64) -> Self {
        let mut extra = Map::new();
        extra.insert("for".to_string(), Value::String(region.to_string()));
        Feature {
            kind: feature_type(),
            properties: FeatureProperties {
                region: Some(region.to_string()),
                name_1: None,
                is_box: Some(true),
                is_label: None,
                extra,
            },
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[
                    [west, north],
                    [east, north],
                    [east, south],
                    [west, south],
                    [west, north]
                ]]
            }),
        }
    }
}

/// Hover targets for the two archipelagos, which are too small and too far
/// out to hit on a country-scale map.
pub fn island_boxes() -> Vec<Feature> {
    vec![
        Feature::bounding_box("Azores Autonomous Region", -19.25, 39.6, -12.5, 43.0),
        Feature::bounding_box("Madeira Autonomous Region", -12.0, 37.25, -10.5, 38.5),
    ]
}

impl Default for FeatureCollection {
    fn default() -> Self {
        FeatureCollection {
            kind: collection_type(),
            features: Vec::new(),
        }
    }
}

impl FeatureCollection {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Appends [`island_boxes`] unless the collection already has box features.
    pub fn with_island_boxes(mut self) -> Self {
        if !self.features.iter().any(Feature::is_box) {
            self.features.extend(island_boxes());
        }
        self
    }

    /// Features that carry a usable place name, skipping labels.
    pub fn named_features(&self) -> impl Iterator<Item = (&Feature, &str)> {
        self.features
            .iter()
            .filter(|f| !f.is_label())
            .filter_map(|f| f.place_name().map(|n| (f, n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_name_prefers_region_then_name_1() {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"region":"North Region","NAME_1":"Porto"},"geometry":null},
            {"type":"Feature","properties":{"NAME_1":"Braga"},"geometry":null},
            {"type":"Feature","properties":{"region":"  ","NAME_1":"Vila Real"},"geometry":null},
            {"type":"Feature","properties":{"id":7},"geometry":null}
        ]}"#;
        let fc = FeatureCollection::from_json_str(json).unwrap();
        let names: Vec<_> = fc.features.iter().map(Feature::place_name).collect();
        assert_eq!(
            names,
            vec![Some("North Region"), Some("Braga"), Some("Vila Real"), None]
        );
    }

    #[test]
    fn unknown_properties_survive_round_trip() {
        let json = r#"{"type":"Feature","properties":{"NAME_1":"Faro","HASC_1":"PT.FA"},"geometry":null}"#;
        let f: Feature = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&f).unwrap();
        assert_eq!(back["properties"]["HASC_1"], "PT.FA");
        assert_eq!(back["properties"]["NAME_1"], "Faro");
    }

    #[test]
    fn island_boxes_added_once() {
        let fc = FeatureCollection::default().with_island_boxes().with_island_boxes();
        assert_eq!(fc.len(), 2);
        assert!(fc.features.iter().all(Feature::is_box));
        assert_eq!(fc.features[0].place_name(), Some("Azores Autonomous Region"));
        assert_eq!(fc.features[1].properties.extra["for"], "Madeira Autonomous Region");
    }

    #[test]
    fn box_polygon_is_closed() {
        let f = Feature::bounding_box("X", -2.0, 1.0, -1.0, 2.0);
        let ring = f.geometry["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn named_features_skip_labels() {
        let json = r#"{"features":[
            {"properties":{"region":"Algarve Region","isLabel":true}},
            {"properties":{"region":"Algarve Region"}}
        ]}"#;
        let fc = FeatureCollection::from_json_str(json).unwrap();
        assert_eq!(fc.kind, "FeatureCollection");
        assert_eq!(fc.named_features().count(), 1);
    }
}
