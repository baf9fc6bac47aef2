// ABOUTME: Time-zone aware "today" resolution for the engine
// ABOUTME: Unknown zone names degrade to UTC with a warning instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Zone handling.
//!
//! Every dated computation anchors on "today" in the tracker owner's home
//! zone, not the server's. Callers pass the zone by IANA name so it can come
//! straight from configuration.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Resolve an IANA zone name, degrading to UTC when unknown.
#[must_use]
pub fn parse_zone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        warn!(zone = %name, "unknown time zone, falling back to UTC");
        Tz::UTC
    })
}

/// Whether `name` resolves to a real IANA zone (configuration validation
/// wants a hard answer where [`parse_zone`] degrades).
#[must_use]
pub fn zone_is_known(name: &str) -> bool {
    name.parse::<Tz>().is_ok()
}

/// Current calendar date in the named zone.
#[must_use]
pub fn today_in_zone(name: &str) -> NaiveDate {
    Utc::now().with_timezone(&parse_zone(name)).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_zone_parses() {
        assert_eq!(parse_zone("Europe/Moscow"), Tz::Europe__Moscow);
        assert_eq!(parse_zone("UTC"), Tz::UTC);
    }

    #[test]
    fn unknown_zone_degrades_to_utc() {
        assert_eq!(parse_zone("Mars/Olympus_Mons"), Tz::UTC);
        assert_eq!(parse_zone(""), Tz::UTC);
    }

    #[test]
    fn zone_validity_check() {
        assert!(zone_is_known("Europe/Moscow"));
        assert!(!zone_is_known("Mars/Olympus_Mons"));
    }

    #[test]
    fn today_stays_within_a_day_of_utc() {
        let here = today_in_zone("Pacific/Kiritimati");
        let utc = Utc::now().date_naive();
        assert!((here - utc).num_days().abs() <= 1);
    }
}
