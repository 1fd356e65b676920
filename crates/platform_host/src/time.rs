//! Wall-clock helpers shared by the lock screen, taskbar clock, and host adapters.

use std::fmt::Display;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

fn datetime_in<Tz: TimeZone>(unix_ms: u64, tz: &Tz) -> Option<DateTime<Tz>> {
    let millis = i64::try_from(unix_ms).ok()?;
    tz.timestamp_millis_opt(millis).single()
}

/// Formats `unix_ms` as a 24-hour `HH:MM` clock label in `tz`.
///
/// Out-of-range timestamps render as `--:--`.
pub fn format_clock_time<Tz>(unix_ms: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime_in(unix_ms, tz)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Formats `unix_ms` as a long display date (`Thursday, January 1`) in `tz`.
pub fn format_long_date<Tz>(unix_ms: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime_in(unix_ms, tz)
        .map(|dt| dt.format("%A, %B %-d").to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pre-rendered local time labels for one clock reading.
pub struct ClockSnapshot {
    /// Source reading in unix milliseconds.
    pub unix_ms: u64,
    /// `HH:MM` label.
    pub time_label: String,
    /// Long date label.
    pub date_label: String,
}

impl ClockSnapshot {
    /// Renders labels for `unix_ms` in the host's local time zone.
    pub fn local(unix_ms: u64) -> Self {
        Self::in_zone(unix_ms, &Local)
    }

    /// Renders labels for `unix_ms` in `tz`.
    pub fn in_zone<Tz>(unix_ms: u64, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            unix_ms,
            time_label: format_clock_time(unix_ms, tz),
            date_label: format_long_date(unix_ms, tz),
        }
    }

    /// Reads the clock now and renders local labels.
    pub fn now() -> Self {
        Self::local(unix_time_ms_now())
    }
}
