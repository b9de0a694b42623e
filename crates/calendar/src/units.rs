//! Plain conversions between fixed time units.

pub const SECONDS_IN_MINUTE: f64 = 60.0;
pub const SECONDS_IN_HOUR: f64 = SECONDS_IN_MINUTE * 60.0;
pub const SECONDS_IN_DAY: f64 = SECONDS_IN_HOUR * 24.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;
pub const MINUTES_IN_DAY: f64 = MINUTES_IN_HOUR * 24.0;
pub const HOURS_IN_DAY: f64 = 24.0;

pub fn seconds_to_minutes(seconds: f64) -> f64 {
    seconds / SECONDS_IN_MINUTE
}

pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / SECONDS_IN_HOUR
}

pub fn seconds_to_days(seconds: f64) -> f64 {
    seconds / SECONDS_IN_DAY
}

pub fn minutes_to_seconds(minutes: f64) -> f64 {
    minutes * SECONDS_IN_MINUTE
}

pub fn minutes_to_hours(minutes: f64) -> f64 {
    minutes / MINUTES_IN_HOUR
}

pub fn minutes_to_days(minutes: f64) -> f64 {
    minutes / MINUTES_IN_DAY
}

pub fn hours_to_seconds(hours: f64) -> f64 {
    hours * SECONDS_IN_HOUR
}

pub fn hours_to_minutes(hours: f64) -> f64 {
    hours * MINUTES_IN_HOUR
}

pub fn hours_to_days(hours: f64) -> f64 {
    hours / HOURS_IN_DAY
}

pub fn days_to_seconds(days: f64) -> f64 {
    days * SECONDS_IN_DAY
}

pub fn days_to_minutes(days: f64) -> f64 {
    days * MINUTES_IN_DAY
}

pub fn days_to_hours(days: f64) -> f64 {
    days * HOURS_IN_DAY
}
