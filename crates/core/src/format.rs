//! Locale-invariant display helpers for orbital quantities.
//!
//! Numbers are printed with at most a fixed number of decimals and trailing zeros
//! trimmed, so `12.500` renders as `12.5` and `3.000` as `3`.

use crate::time;
use crate::units;

/// Render `value` with at most `places` decimals, trimming trailing zeros.
pub fn trimmed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let mut text = format!("{value:.places$}");
    if text.contains('.') {
        let keep = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(keep);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Unitless value, three decimals.
pub fn plain(value: f64) -> String {
    trimmed(value, 3)
}

/// Distance given in metres, rendered in kilometres with three decimals.
pub fn distance(metres: f64) -> String {
    format!("{} km", trimmed(units::m_to_km(metres), 3))
}

/// Speed in metres per second with one decimal.
pub fn speed(metres_per_second: f64) -> String {
    format!("{} m/s", trimmed(metres_per_second, 1))
}

/// Specific energy in joules per kilogram with three decimals.
pub fn specific_energy(joules_per_kg: f64) -> String {
    format!("{} J/kg", trimmed(joules_per_kg, 3))
}

/// Angle already expressed in degrees.
pub fn degrees(degrees: f64) -> String {
    format!("{}°", trimmed(degrees, 3))
}

/// Angle given in radians, rendered in degrees.
pub fn radians_as_degrees(radians: f64) -> String {
    degrees(units::rad_to_deg(radians))
}

/// Duration as `Xd Yh Zm Ws`, omitting zero components.
pub fn duration(seconds: f64) -> String {
    let b = time::breakdown(seconds);
    let parts: Vec<String> = [(b.days, 'd'), (b.hours, 'h'), (b.minutes, 'm'), (b.seconds, 's')]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| format!("{count}{unit}"))
        .collect();
    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}
