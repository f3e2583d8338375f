use chrono::{DateTime, Local, TimeZone, Utc};
use std::time::Duration;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_S * 60 * 15;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const CHART_TIME_FORMAT: &str = "%H:%M";

    /// Convert interval in milliseconds to the provider's shorthand (e.g. `1m`, `1h`).
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_5_MIN => "5m",
            Self::MS_IN_15_MIN => "15m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_D => "1d",
            _ => "unknown",
        }
    }
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> Option<DateTime<Utc>> {
    match Utc.timestamp_opt(epoch_sec, 0) {
        chrono::LocalResult::Single(datetime) => Some(datetime),
        _ => None,
    }
}

/// Local wall-clock "HH:MM" for chart axes. Empty string for out-of-range values.
pub fn epoch_sec_to_local_hm(epoch_sec: i64) -> String {
    epoch_sec_to_utc(epoch_sec)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format(TimeUtils::CHART_TIME_FORMAT)
                .to_string()
        })
        .unwrap_or_default()
}

/// Short human duration: "42s", "1m 05s".
pub fn format_countdown(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_names_match_provider_shorthand() {
        assert_eq!(TimeUtils::interval_to_string(TimeUtils::MS_IN_MIN), "1m");
        assert_eq!(TimeUtils::interval_to_string(TimeUtils::MS_IN_D), "1d");
        assert_eq!(TimeUtils::interval_to_string(7), "unknown");
    }

    #[test]
    fn countdown_switches_to_minutes_after_sixty_seconds() {
        assert_eq!(format_countdown(Duration::from_secs(42)), "42s");
        assert_eq!(format_countdown(Duration::from_secs(65)), "1m 05s");
    }

    #[test]
    fn epoch_conversion_rejects_out_of_range() {
        assert!(epoch_sec_to_utc(1_700_000_000).is_some());
        assert!(epoch_sec_to_utc(i64::MAX).is_none());
    }
}
