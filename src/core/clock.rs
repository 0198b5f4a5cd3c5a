//! Virtual clock and activity classification.
//!
//! Virtual time is epoch milliseconds on a UTC calendar. Each tick advances it
//! by one virtual minute per unit of game speed; the hour of day then decides
//! what the character is doing.

use super::constants::{MS_PER_HOUR, VIRTUAL_MS_PER_TICK};
use super::log::LogKind;
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// 2075-04-12 06:00 UTC
pub const START_TIME_MS: i64 = 3_322_274_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Hacking,
    Job,
    Sleeping,
    Lockout,
}

impl Activity {
    pub fn name(&self) -> &'static str {
        match self {
            Activity::Hacking => "HACKING",
            Activity::Job => "JOB",
            Activity::Sleeping => "SLEEPING",
            Activity::Lockout => "LOCKOUT",
        }
    }
}

/// Calendar fields derived from a virtual timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub year: i32,
    pub day_of_year: u32,
    pub hour: u32,
    pub minute: u32,
}

fn to_datetime(virtual_ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(virtual_ms).unwrap_or_default()
}

pub fn calendar(virtual_ms: i64) -> Calendar {
    let dt = to_datetime(virtual_ms);
    Calendar {
        year: dt.year(),
        day_of_year: dt.ordinal(),
        hour: dt.hour(),
        minute: dt.minute(),
    }
}

/// Next virtual time after one tick at `speed`. Speed 0 leaves time frozen.
pub fn advance(virtual_ms: i64, speed: u32) -> i64 {
    virtual_ms.saturating_add(VIRTUAL_MS_PER_TICK.saturating_mul(speed as i64))
}

/// Whole virtual hours since the epoch.
pub fn hour_index(virtual_ms: i64) -> i64 {
    virtual_ms.div_euclid(MS_PER_HOUR)
}

/// True when `prev → now` crosses at least one virtual hour boundary.
pub fn crossed_hour(prev_ms: i64, now_ms: i64) -> bool {
    hour_index(now_ms) > hour_index(prev_ms)
}

/// Activity for an hour of the day. An active lockout overrides the schedule.
pub fn classify(hour: u32, locked_out: bool) -> Activity {
    if locked_out {
        Activity::Lockout
    } else if (8..17).contains(&hour) {
        Activity::Job
    } else if hour >= 23 || hour < 7 {
        Activity::Sleeping
    } else {
        Activity::Hacking
    }
}

/// Log line for an activity change. Unlisted transitions are silent.
pub fn transition_message(from: Activity, to: Activity) -> Option<(&'static str, LogKind)> {
    match (from, to) {
        (_, Activity::Job) => Some(("MANDATORY PRODUCTIVITY PERIOD START.", LogKind::Warning)),
        (_, Activity::Sleeping) => Some(("BIOLOGICAL MAINTENANCE CYCLE START.", LogKind::Info)),
        (Activity::Job, Activity::Hacking) => {
            Some(("SHIFT END. PERSONAL TERMINAL UNLOCKED.", LogKind::Success))
        }
        (Activity::Sleeping, Activity::Hacking) => {
            Some(("WAKE CYCLE COMPLETE. TERMINAL ONLINE.", LogKind::Info))
        }
        _ => None,
    }
}

/// `HH:MM` wall clock for display.
pub fn format_clock(virtual_ms: i64) -> String {
    to_datetime(virtual_ms).format("%H:%M").to_string()
}

/// `YYYY-MM-DD HH:MM` for display.
pub fn format_datetime(virtual_ms: i64) -> String {
    to_datetime(virtual_ms).format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_start_time_matches_calendar() {
        let expected = Utc
            .with_ymd_and_hms(2075, 4, 12, 6, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis();
        assert_eq!(START_TIME_MS, expected);

        let cal = calendar(START_TIME_MS);
        assert_eq!(cal.year, 2075);
        assert_eq!(cal.day_of_year, 102);
        assert_eq!(cal.hour, 6);
        assert_eq!(cal.minute, 0);
    }

    #[test]
    fn test_advance_scales_with_speed() {
        assert_eq!(advance(0, 1), 60_000);
        assert_eq!(advance(0, 50), 3_000_000);
        assert_eq!(advance(1000, 0), 1000);
    }

    #[test]
    fn test_classify_schedule() {
        assert_eq!(classify(7, false), Activity::Hacking);
        assert_eq!(classify(8, false), Activity::Job);
        assert_eq!(classify(16, false), Activity::Job);
        assert_eq!(classify(17, false), Activity::Hacking);
        assert_eq!(classify(22, false), Activity::Hacking);
        assert_eq!(classify(23, false), Activity::Sleeping);
        assert_eq!(classify(0, false), Activity::Sleeping);
        assert_eq!(classify(6, false), Activity::Sleeping);
    }

    #[test]
    fn test_lockout_overrides_schedule() {
        for hour in 0..24 {
            assert_eq!(classify(hour, true), Activity::Lockout);
        }
    }

    #[test]
    fn test_transition_table() {
        assert!(transition_message(Activity::Hacking, Activity::Job).is_some());
        assert!(transition_message(Activity::Hacking, Activity::Sleeping).is_some());
        assert_eq!(
            transition_message(Activity::Job, Activity::Hacking).map(|m| m.0),
            Some("SHIFT END. PERSONAL TERMINAL UNLOCKED.")
        );
        assert!(transition_message(Activity::Lockout, Activity::Hacking).is_none());
        assert!(transition_message(Activity::Hacking, Activity::Lockout).is_none());
    }

    #[test]
    fn test_crossed_hour() {
        let base = START_TIME_MS;
        assert!(!crossed_hour(base, base + 59 * 60_000));
        assert!(crossed_hour(base + 59 * 60_000, base + 60 * 60_000));
        assert!(crossed_hour(base, base + 5 * MS_PER_HOUR));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(START_TIME_MS + 90 * 60_000), "07:30");
        assert_eq!(format_datetime(START_TIME_MS), "2075-04-12 06:00");
    }
}
