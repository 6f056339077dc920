// crates/guide-core/src/clock.rs

//! # Clock
//!
//! Local times for the time zones a country lists. Offsets come as display
//! labels (`"GMT+0"`, `"GMT-1"`), so everything here is cosmetic: a label
//! that cannot be read counts as GMT+0.

use crate::model::TimeZone;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::time::Duration;

/// How often a live clock display is re-rendered.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

static GMT_OFFSET: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"GMT([+-])(\d+)").ok());

/// Whole-hour offset from a `GMT+N` / `GMT-N` label.
///
/// The pattern may appear anywhere in the label; minutes after the hour
/// (`GMT+5:30`) are ignored. Anything else yields `0`.
///
/// ```rust
/// use guide_core::clock::parse_gmt_offset;
///
/// assert_eq!(parse_gmt_offset("GMT+1"), 1);
/// assert_eq!(parse_gmt_offset("GMT-1"), -1);
/// assert_eq!(parse_gmt_offset("garbage"), 0);
/// ```
pub fn parse_gmt_offset(label: &str) -> i32 {
    let Some(re) = GMT_OFFSET.as_ref() else {
        return 0;
    };
    let Some(caps) = re.captures(label) else {
        return 0;
    };
    let hours = match caps[2].parse::<i32>() {
        Ok(h) => h,
        Err(_) => {
            tracing::debug!(label, "offset out of range, using GMT+0");
            return 0;
        }
    };
    if &caps[1] == "-" {
        -hours
    } else {
        hours
    }
}

/// `HH:MM` wall-clock time at `offset_hours` from the given UTC instant.
///
/// Instants at the edge of the representable range, where the shift would
/// overflow, are shown unshifted.
pub fn local_time_at(offset_hours: i32, utc: DateTime<Utc>) -> String {
    let local = utc
        .checked_add_signed(ChronoDuration::hours(i64::from(offset_hours)))
        .unwrap_or_else(|| {
            tracing::debug!(offset_hours, "local time out of range, showing UTC");
            utc
        });
    local.format("%H:%M").to_string()
}

/// One rendered row of a [`ClockBoard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockLine {
    pub name: String,
    pub offset_label: String,
    pub offset_hours: i32,
    pub local_time: String,
    pub notes: Option<String>,
}

/// The set of zones a page shows, parsed once and rendered on every tick.
///
/// Each board is independent; owners call [`ClockBoard::render`] every
/// [`REFRESH_INTERVAL`] and simply drop the board to stop.
#[derive(Debug, Clone)]
pub struct ClockBoard {
    zones: Vec<(TimeZone, i32)>,
}

impl ClockBoard {
    pub fn from_time_zones(zones: &[TimeZone]) -> Self {
        ClockBoard {
            zones: zones
                .iter()
                .map(|tz| (tz.clone(), parse_gmt_offset(&tz.gmt_offset)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn render(&self, now: DateTime<Utc>) -> Vec<ClockLine> {
        self.zones
            .iter()
            .map(|(tz, offset)| ClockLine {
                name: tz.name.clone(),
                offset_label: tz.gmt_offset.clone(),
                offset_hours: *offset,
                local_time: local_time_at(*offset, now),
                notes: tz.notes.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 5, 0).unwrap()
    }

    #[test]
    fn parses_signed_offsets() {
        assert_eq!(parse_gmt_offset("GMT+0"), 0);
        assert_eq!(parse_gmt_offset("GMT+10"), 10);
        assert_eq!(parse_gmt_offset("GMT-3"), -3);
        assert_eq!(parse_gmt_offset("UTC/GMT+2 (summer)"), 2);
        assert_eq!(parse_gmt_offset("GMT+5:30"), 5);
    }

    #[test]
    fn unreadable_labels_fall_back_to_zero() {
        assert_eq!(parse_gmt_offset(""), 0);
        assert_eq!(parse_gmt_offset("GMT"), 0);
        assert_eq!(parse_gmt_offset("UTC+1"), 0);
        assert_eq!(parse_gmt_offset("gmt+1"), 0);
        assert_eq!(parse_gmt_offset("GMT+99999999999"), 0);
    }

    #[test]
    fn local_time_wraps_around_midnight() {
        let late = Utc.with_ymd_and_hms(2024, 3, 10, 23, 30, 0).unwrap();
        assert_eq!(local_time_at(1, late), "00:30");
        assert_eq!(local_time_at(-1, noon()), "11:05");
        assert_eq!(local_time_at(0, noon()), "12:05");
    }

    #[test]
    fn range_edges_show_utc_instead_of_panicking() {
        assert_eq!(local_time_at(1, DateTime::<Utc>::MAX_UTC), "23:59");
        assert_eq!(local_time_at(-1, DateTime::<Utc>::MIN_UTC), "00:00");
        assert_eq!(local_time_at(-1, DateTime::<Utc>::MAX_UTC), "22:59");
    }

    #[test]
    fn board_renders_one_line_per_zone() {
        let zones = vec![
            TimeZone {
                name: "Western European Time".into(),
                gmt_offset: "GMT+0".into(),
                notes: None,
            },
            TimeZone {
                name: "Azores Time".into(),
                gmt_offset: "GMT-1".into(),
                notes: Some("One hour behind".into()),
            },
        ];
        let board = ClockBoard::from_time_zones(&zones);
        let lines = board.render(noon());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].local_time, "12:05");
        assert_eq!(lines[1].local_time, "11:05");
        assert_eq!(lines[1].offset_hours, -1);
    }

    #[test]
    fn refresh_is_one_minute() {
        assert_eq!(REFRESH_INTERVAL.as_secs(), 60);
    }
}
