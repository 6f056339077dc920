//! guide-wasm — WebAssembly bindings for guide-core
//!
//! The browser side of the guide: a map widget reports the feature under
//! the pointer and these bindings answer with the district panel or region
//! card to show. The dataset is compiled in, so no fetch is needed before
//! the first lookup.
//!
//! What it provides
//! ----------------
//! - `GuideHandle`: owns one parsed guide; every lookup is a method on it
//!   - `hoverDistrict(regionSlug, feature)` / `hoverRegion(countrySlug, feature)`
//!   - `resolveDistrict(regionSlug, name)`, `regionCard(countrySlug, name)`
//!   - `clock(countrySlug, nowMs)` for the live time-zone display
//! - Free helpers: `normalize_name`, `parse_gmt_offset`, `local_time`,
//!   `with_island_boxes`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { GuideHandle } from 'guide-wasm';
//!
//! await init();
//! const guide = new GuideHandle();
//!
//! map.on('mousemove', 'districts-fill', (e) => {
//!   const panel = guide.hoverDistrict('north-region', e.features[0]);
//!   // panel is null, { status: 'found', district, ... } or { status: 'comingSoon', hovered }
//! });
//!
//! setInterval(() => render(guide.clock('portugal', Date.now())), 60_000);
//! ```
//!
//! Notes
//! -----
//! - Each `GuideHandle` is independent; drop it (`guide.free()`) to release it.
//! - Results are plain JSON-compatible objects.
use guide_core::clock::{local_time_at, ClockBoard};
use guide_core::map::{hover_district, hover_region, Feature, FeatureCollection};
use guide_core::{climate, text, Country, Guide};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing guide WASM module...".into());
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

fn utc_from_millis(now_ms: f64) -> Result<chrono::DateTime<chrono::Utc>, JsError> {
    chrono::DateTime::from_timestamp_millis(now_ms as i64)
        .ok_or_else(|| JsError::new("timestamp out of range"))
}

/* --------------------------------------------------------------------------
   Guide handle
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct GuideHandle {
    guide: Guide,
}

#[wasm_bindgen]
impl GuideHandle {
    /// Parse the embedded dataset.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GuideHandle, JsError> {
        Ok(GuideHandle {
            guide: Guide::embedded()?,
        })
    }

    /// Use a dataset supplied as JSON text instead of the embedded one.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<GuideHandle, JsError> {
        Ok(GuideHandle {
            guide: Guide::from_json_str(json)?,
        })
    }

    #[wasm_bindgen(js_name = regionCount)]
    pub fn region_count(&self) -> usize {
        self.guide.stats().regions
    }

    #[wasm_bindgen(js_name = districtCount)]
    pub fn district_count(&self) -> usize {
        self.guide.stats().districts
    }

    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js(&self.guide.stats())
    }

    /// Region display names for a country, in dataset order.
    #[wasm_bindgen(js_name = regionNames)]
    pub fn region_names(&self, country_slug: &str) -> Result<Vec<String>, JsError> {
        let country = self.country(country_slug)?;
        Ok(country.regions().iter().map(|r| r.name.clone()).collect())
    }

    #[wasm_bindgen(js_name = regionCard)]
    pub fn region_card(&self, country_slug: &str, display_name: &str) -> Result<JsValue, JsError> {
        let country = self.country(country_slug)?;
        to_js(&guide_core::RegionCard::lookup(display_name, country.regions()))
    }

    /// `null` when nothing matches.
    #[wasm_bindgen(js_name = resolveDistrict)]
    pub fn resolve_district(&self, region_slug: &str, raw_name: &str) -> Result<JsValue, JsError> {
        to_js(&guide_core::resolve_in_region(&self.guide, region_slug, raw_name))
    }

    /// Panel for the district feature under the pointer, `null` to clear.
    #[wasm_bindgen(js_name = hoverDistrict)]
    pub fn hover_district(&self, region_slug: &str, feature: JsValue) -> Result<JsValue, JsError> {
        let feature: Feature = from_value(feature)?;
        to_js(&hover_district(&feature, self.guide.districts_for(region_slug)))
    }

    /// Card for the region feature (or island box) under the pointer.
    #[wasm_bindgen(js_name = hoverRegion)]
    pub fn hover_region(&self, country_slug: &str, feature: JsValue) -> Result<JsValue, JsError> {
        let country = self.country(country_slug)?;
        let feature: Feature = from_value(feature)?;
        to_js(&hover_region(&feature, country.regions()))
    }

    /// One line per time zone, rendered at `now_ms` (milliseconds since the epoch).
    pub fn clock(&self, country_slug: &str, now_ms: f64) -> Result<JsValue, JsError> {
        let country = self.country(country_slug)?;
        let board = ClockBoard::from_time_zones(country.time_zones());
        to_js(&board.render(utc_from_millis(now_ms)?))
    }

    #[wasm_bindgen(js_name = clockNow)]
    pub fn clock_now(&self, country_slug: &str) -> Result<JsValue, JsError> {
        self.clock(country_slug, js_sys::Date::now())
    }

    #[wasm_bindgen(js_name = bestTimeToVisit)]
    pub fn best_time_to_visit(&self, country_slug: &str, region_slug: &str) -> Result<String, JsError> {
        let country = self.country(country_slug)?;
        Ok(climate::best_time_to_visit(&self.guide, country, region_slug))
    }
}

impl GuideHandle {
    fn country(&self, slug: &str) -> Result<&Country, JsError> {
        self.guide
            .country(slug)
            .ok_or_else(|| JsError::new(&format!("unknown country: {slug}")))
    }

    pub fn guide(&self) -> &Guide {
        &self.guide
    }
}

/* --------------------------------------------------------------------------
   Free helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn normalize_name(raw: &str) -> String {
    text::normalize_name(raw)
}

#[wasm_bindgen]
pub fn parse_gmt_offset(label: &str) -> i32 {
    guide_core::clock::parse_gmt_offset(label)
}

/// `HH:MM` at `offset_hours` from UTC, for an instant in epoch milliseconds.
#[wasm_bindgen]
pub fn local_time(offset_hours: i32, now_ms: f64) -> Result<String, JsError> {
    Ok(local_time_at(offset_hours, utc_from_millis(now_ms)?))
}

/// Append the island hover boxes to a region-level feature collection.
#[wasm_bindgen]
pub fn with_island_boxes(collection: JsValue) -> Result<JsValue, JsError> {
    let collection: FeatureCollection = from_value(collection)?;
    to_js(&collection.with_island_boxes())
}
