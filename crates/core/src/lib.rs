//! Core units, constants, and shared primitives for the Simple Orbit Calculator workspace.

pub mod format;

pub use body::ParentBody;

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Metres per kilometre.
    pub const METRES_PER_KM: f64 = 1_000.0;
    /// Seconds per day (24 hours).
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Seconds per minute.
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::METRES_PER_KM;

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / METRES_PER_KM
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

    /// Whole-second breakdown of a duration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Breakdown {
        pub days: u64,
        pub hours: u64,
        pub minutes: u64,
        pub seconds: u64,
    }

    /// Split a duration into days, hours, minutes and seconds after rounding to the
    /// nearest whole second. Negative and non-finite inputs collapse to zero.
    pub fn breakdown(seconds: f64) -> Breakdown {
        let total = if seconds.is_finite() {
            seconds.max(0.0).round()
        } else {
            0.0
        };
        let days = (total / SECONDS_PER_DAY).floor();
        let remaining = total - days * SECONDS_PER_DAY;
        let hours = (remaining / SECONDS_PER_HOUR).floor();
        let remaining = remaining - hours * SECONDS_PER_HOUR;
        let minutes = (remaining / SECONDS_PER_MINUTE).floor();
        let secs = remaining - minutes * SECONDS_PER_MINUTE;
        Breakdown {
            days: days as u64,
            hours: hours as u64,
            minutes: minutes as u64,
            seconds: secs as u64,
        }
    }
}

mod body {
    /// Gravitational and physical parameters of the body an orbit is built around.
    ///
    /// Supplied by a host catalog and never mutated by the calculator. Orbits hold it
    /// behind an `Arc` so that two orbits can be checked for a shared parent by identity.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ParentBody {
        pub name: String,
        /// Standard gravitational parameter μ (m³/s²).
        pub gravitational_parameter: f64,
        /// Mean equatorial radius (m).
        pub radius: f64,
        /// Sphere of influence radius (m). May be infinite for a root star.
        pub sphere_of_influence_radius: f64,
        /// Sidereal rotation period (s), when known.
        pub rotation_period: Option<f64>,
    }

    impl ParentBody {
        pub fn new(
            name: impl Into<String>,
            gravitational_parameter: f64,
            radius: f64,
            sphere_of_influence_radius: f64,
        ) -> Self {
            Self {
                name: name.into(),
                gravitational_parameter,
                radius,
                sphere_of_influence_radius,
                rotation_period: None,
            }
        }

        /// Attach a sidereal rotation period (s).
        pub fn with_rotation_period(mut self, rotation_period: f64) -> Self {
            self.rotation_period = Some(rotation_period);
            self
        }
    }
}
