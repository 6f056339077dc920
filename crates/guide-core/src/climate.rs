// crates/guide-core/src/climate.rs

//! # Climate summaries
//!
//! Bands, crowd estimates and the "best time to visit" line shown on
//! region pages. Inputs come from `Country::climate`, the guide's season
//! profiles and its per-region hints; every function has a fallback so a
//! page never shows an empty field.

use crate::guide::Guide;
use crate::model::{Country, CrowdLevel, MonthlyClimate, RegionSeasons};
use once_cell::sync::Lazy;
use serde::Serialize;

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Shown when neither climate data nor a hint says anything.
pub const DEFAULT_BEST_TIME: &str = "May to October";
pub const DEFAULT_TAGS: &str = "Culture, Nature, Food";
pub const DEFAULT_DIRECTION: &str = "various parts";

static DEFAULT_SEASONS: Lazy<RegionSeasons> = Lazy::new(|| RegionSeasons {
    region_name: "Default".to_string(),
    best_months: months(&["April", "May", "June", "September", "October"]),
    peak_months: months(&["July", "August"]),
    off_season_months: months(&["November", "December", "January", "February", "March"]),
    description: "Mediterranean climate with mild winters and warm summers. Seasons vary by \
                  region, with northern areas generally wetter and cooler than the south."
        .to_string(),
});

fn months(names: &[&str]) -> Vec<String> {
    names.iter().map(|m| m.to_string()).collect()
}

/// Zero-based position of an English month name.
pub fn month_index(month: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == month)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemperatureBand {
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub fn label(self) -> &'static str {
        match self {
            TemperatureBand::Cold => "Cold",
            TemperatureBand::Cool => "Cool",
            TemperatureBand::Mild => "Mild",
            TemperatureBand::Warm => "Warm",
            TemperatureBand::Hot => "Hot",
        }
    }
}

/// Band for a temperature in °C. Bounds are inclusive.
pub fn temperature_band(celsius: f64) -> TemperatureBand {
    if celsius <= 5.0 {
        TemperatureBand::Cold
    } else if celsius <= 15.0 {
        TemperatureBand::Cool
    } else if celsius <= 22.0 {
        TemperatureBand::Mild
    } else if celsius <= 28.0 {
        TemperatureBand::Warm
    } else {
        TemperatureBand::Hot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RainfallBand {
    VeryDry,
    Dry,
    Moderate,
    Rainy,
    VeryRainy,
}

impl RainfallBand {
    pub fn label(self) -> &'static str {
        match self {
            RainfallBand::VeryDry => "Very dry",
            RainfallBand::Dry => "Dry",
            RainfallBand::Moderate => "Moderate",
            RainfallBand::Rainy => "Rainy",
            RainfallBand::VeryRainy => "Very rainy",
        }
    }
}

/// Band for monthly rainfall in mm. Bounds are inclusive.
pub fn rainfall_band(mm: f64) -> RainfallBand {
    if mm <= 10.0 {
        RainfallBand::VeryDry
    } else if mm <= 40.0 {
        RainfallBand::Dry
    } else if mm <= 65.0 {
        RainfallBand::Moderate
    } else if mm <= 100.0 {
        RainfallBand::Rainy
    } else {
        RainfallBand::VeryRainy
    }
}

/// The recorded crowd level, or an estimate from the calendar:
/// June to August high, April, May, September and October medium.
pub fn crowd_level(month: &str, provided: Option<CrowdLevel>) -> CrowdLevel {
    if let Some(level) = provided {
        return level;
    }
    match month {
        "June" | "July" | "August" => CrowdLevel::High,
        "April" | "May" | "September" | "October" => CrowdLevel::Medium,
        _ => CrowdLevel::Low,
    }
}

fn is_good_month(m: &MonthlyClimate) -> bool {
    let notes_say_so = m.notes.as_deref().is_some_and(|n| {
        let n = n.to_lowercase();
        n.contains("ideal") || n.contains("best")
    });
    notes_say_so || m.crowd_level == Some(CrowdLevel::Medium)
}

/// Months whose notes call them ideal or best, or that have medium crowds.
pub fn good_months(climate: &[MonthlyClimate]) -> Vec<&str> {
    climate
        .iter()
        .filter(|m| is_good_month(m))
        .map(|m| m.month.as_str())
        .collect()
}

/// `"X to Y"` when the months form one calendar run, else a comma list in
/// calendar order. Unknown month names sort last and break the run.
///
/// ```rust
/// use guide_core::climate::format_month_range;
///
/// assert_eq!(format_month_range(&["June", "April", "May"]), "April to June");
/// assert_eq!(format_month_range(&["October", "April", "May"]), "April, May, October");
/// ```
pub fn format_month_range(months: &[&str]) -> String {
    let mut sorted: Vec<&str> = months.to_vec();
    sorted.sort_by_key(|m| month_index(m).unwrap_or(MONTHS.len()));

    let consecutive = sorted.windows(2).all(|pair| {
        match (month_index(pair[0]), month_index(pair[1])) {
            (Some(a), Some(b)) => b == (a + 1) % MONTHS.len(),
            _ => false,
        }
    });

    match sorted.as_slice() {
        [first, .., last] if consecutive => format!("{first} to {last}"),
        _ => sorted.join(", "),
    }
}

fn summarize(good: &[&str]) -> Option<String> {
    match good.len() {
        0 => None,
        1 | 2 => Some(good.join(", ")),
        _ => Some(format_month_range(good)),
    }
}

/// One-line best-time summary for a region.
///
/// Tries the region's own climate rows, then the nationwide rows, then the
/// hand-written hint, then [`DEFAULT_BEST_TIME`].
pub fn best_time_to_visit(guide: &Guide, country: &Country, region_slug: &str) -> String {
    let from_climate = [region_slug, "nationwide"]
        .into_iter()
        .find_map(|key| summarize(&good_months(country.climate_for(key))));

    from_climate
        .or_else(|| {
            guide
                .hints_for(region_slug)
                .and_then(|h| h.best_time.clone())
        })
        .unwrap_or_else(|| DEFAULT_BEST_TIME.to_string())
}

/// Months a visitor might skip and why. Empty when unknown.
pub fn months_to_avoid<'a>(guide: &'a Guide, region_slug: &str) -> &'a str {
    guide
        .hints_for(region_slug)
        .and_then(|h| h.months_to_avoid.as_deref())
        .unwrap_or("")
}

pub fn region_tags<'a>(guide: &'a Guide, region_slug: &str) -> &'a str {
    guide
        .hints_for(region_slug)
        .and_then(|h| h.tags.as_deref())
        .unwrap_or(DEFAULT_TAGS)
}

/// Where in the country the region lies, phrased to follow "in the".
pub fn region_direction<'a>(guide: &'a Guide, region_slug: &str) -> &'a str {
    guide
        .hints_for(region_slug)
        .and_then(|h| h.direction.as_deref())
        .unwrap_or(DEFAULT_DIRECTION)
}

/// Season profile for a region display name (exact match), or a generic
/// profile when the guide has none.
pub fn seasons_for_region<'a>(guide: &'a Guide, region_name: &str) -> &'a RegionSeasons {
    guide
        .seasons
        .iter()
        .find(|s| s.region_name == region_name)
        .unwrap_or(&*DEFAULT_SEASONS)
}

pub fn default_seasons() -> &'static RegionSeasons {
    &*DEFAULT_SEASONS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide() -> Guide {
        Guide::embedded().unwrap()
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(temperature_band(5.0), TemperatureBand::Cold);
        assert_eq!(temperature_band(5.1), TemperatureBand::Cool);
        assert_eq!(temperature_band(22.0), TemperatureBand::Mild);
        assert_eq!(temperature_band(28.0), TemperatureBand::Warm);
        assert_eq!(temperature_band(35.0), TemperatureBand::Hot);

        assert_eq!(rainfall_band(10.0).label(), "Very dry");
        assert_eq!(rainfall_band(40.0).label(), "Dry");
        assert_eq!(rainfall_band(65.0).label(), "Moderate");
        assert_eq!(rainfall_band(100.0).label(), "Rainy");
        assert_eq!(rainfall_band(100.5).label(), "Very rainy");
    }

    #[test]
    fn crowd_level_prefers_recorded_value() {
        assert_eq!(crowd_level("July", Some(CrowdLevel::Low)), CrowdLevel::Low);
        assert_eq!(crowd_level("July", None), CrowdLevel::High);
        assert_eq!(crowd_level("October", None), CrowdLevel::Medium);
        assert_eq!(crowd_level("February", None), CrowdLevel::Low);
    }

    #[test]
    fn month_runs() {
        assert_eq!(format_month_range(&["May", "June", "July"]), "May to July");
        assert_eq!(format_month_range(&["January", "April", "October"]), "January, April, October");
        assert_eq!(format_month_range(&["Smarch", "May", "June"]), "May, June, Smarch");
        assert_eq!(format_month_range(&["May"]), "May");
    }

    #[test]
    fn best_time_from_regional_rows() {
        let g = guide();
        let pt = g.country("portugal").unwrap();
        assert_eq!(best_time_to_visit(&g, pt, "north-region"), "April, October");
        assert_eq!(
            best_time_to_visit(&g, pt, "madeira-region"),
            "January, April, October"
        );
    }

    #[test]
    fn best_time_falls_back_to_nationwide() {
        let g = guide();
        let pt = g.country("portugal").unwrap();
        assert_eq!(
            best_time_to_visit(&g, pt, "greater-lisbon"),
            "April, May, June, September, October"
        );
    }

    #[test]
    fn best_time_uses_hint_then_default_without_climate() {
        let mut g = guide();
        let mut pt = g.country("portugal").unwrap().clone();
        pt.climate.clear();
        assert_eq!(best_time_to_visit(&g, &pt, "azores-region"), "June to September");
        g.hints.clear();
        assert_eq!(best_time_to_visit(&g, &pt, "azores-region"), DEFAULT_BEST_TIME);
    }

    #[test]
    fn hint_lookups_have_defaults() {
        let g = guide();
        assert_eq!(region_tags(&g, "algarve-region"), "Beaches, Golf, Seafood");
        assert_eq!(region_tags(&g, "atlantis"), DEFAULT_TAGS);
        assert_eq!(region_direction(&g, "atlantis"), DEFAULT_DIRECTION);
        assert_eq!(months_to_avoid(&g, "greater-lisbon"), "August (heat and crowds)");
        assert_eq!(months_to_avoid(&g, "atlantis"), "");
    }

    #[test]
    fn seasons_match_display_name_exactly() {
        let g = guide();
        assert_eq!(seasons_for_region(&g, "North Region").peak_months, ["July", "August"]);
        assert_eq!(seasons_for_region(&g, "north region").region_name, "Default");
        assert_eq!(seasons_for_region(&g, "Madeira Autonomous Region"), default_seasons());
    }
}
