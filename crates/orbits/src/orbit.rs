//! Immutable, fully derived description of one closed orbit.

use std::fmt;
use std::sync::Arc;

use soc_core::{ParentBody, format};

use crate::math;

/// Complete set of scalar orbital quantities around one parent body.
///
/// Every field is a function of `(semi_major_axis, eccentricity, parent)` and is
/// computed once in [`Orbit::new`]. Orbits are only produced by
/// [`OrbitBuilder::build`](crate::OrbitBuilder::build), which establishes that the
/// pair describes a closed ellipse.
#[derive(Debug, Clone)]
pub struct Orbit {
    parent: Arc<ParentBody>,
    semi_major_axis: f64,
    eccentricity: f64,
    semi_minor_axis: f64,
    semi_latus_rectum: f64,
    focal_parameter: f64,
    linear_eccentricity: f64,
    apoapsis: f64,
    periapsis: f64,
    apoapsis_altitude: f64,
    periapsis_altitude: f64,
    orbital_period: f64,
    apoapsis_speed: f64,
    periapsis_speed: f64,
    mean_orbital_speed: f64,
    specific_orbital_energy: f64,
    specific_angular_momentum: f64,
    mean_darkness_time: f64,
    max_darkness_time: f64,
}

impl Orbit {
    pub(crate) fn new(parent: Arc<ParentBody>, semi_major_axis: f64, eccentricity: f64) -> Self {
        let mu = parent.gravitational_parameter;
        let radius = parent.radius;
        let a = semi_major_axis;
        let e = eccentricity;

        let semi_minor_axis = math::semi_minor_axis(a, e);
        let semi_latus_rectum = math::semi_latus_rectum(a, e);
        let focal_parameter = math::focal_parameter(a, e);
        let linear_eccentricity = math::linear_eccentricity(a, e);

        let apoapsis = a * (1.0 + e);
        let periapsis = a * (1.0 - e);
        let apoapsis_altitude = apoapsis - radius;
        let periapsis_altitude = periapsis - radius;

        let orbital_period = math::orbital_period(a, mu);

        let apoapsis_speed = math::apsis_speed(mu, apoapsis, a);
        let periapsis_speed = math::apsis_speed(mu, periapsis, a);
        let mean_orbital_speed = math::mean_orbital_speed(a, e, mu);

        let specific_orbital_energy = math::specific_orbital_energy(mu, a);
        let specific_angular_momentum = math::specific_angular_momentum(mu, semi_latus_rectum);

        let mean_darkness_time = math::mean_darkness_time(orbital_period, radius, a);
        let max_darkness_time =
            math::max_darkness_time(a, semi_minor_axis, radius, specific_angular_momentum, e);

        Self {
            parent,
            semi_major_axis: a,
            eccentricity: e,
            semi_minor_axis,
            semi_latus_rectum,
            focal_parameter,
            linear_eccentricity,
            apoapsis,
            periapsis,
            apoapsis_altitude,
            periapsis_altitude,
            orbital_period,
            apoapsis_speed,
            periapsis_speed,
            mean_orbital_speed,
            specific_orbital_energy,
            specific_angular_momentum,
            mean_darkness_time,
            max_darkness_time,
        }
    }

    /// Name of the first derived field that is NaN or infinite, if any.
    ///
    /// The focal parameter is skipped: it is infinite for every circular orbit.
    pub(crate) fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("semi-minor axis", self.semi_minor_axis),
            ("semi-latus rectum", self.semi_latus_rectum),
            ("linear eccentricity", self.linear_eccentricity),
            ("apoapsis", self.apoapsis),
            ("periapsis", self.periapsis),
            ("orbital period", self.orbital_period),
            ("apoapsis speed", self.apoapsis_speed),
            ("periapsis speed", self.periapsis_speed),
            ("mean orbital speed", self.mean_orbital_speed),
            ("specific orbital energy", self.specific_orbital_energy),
            ("specific angular momentum", self.specific_angular_momentum),
            ("mean darkness time", self.mean_darkness_time),
            ("max darkness time", self.max_darkness_time),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }

    pub fn parent(&self) -> &Arc<ParentBody> {
        &self.parent
    }

    /// True when both orbits were built against the same parent instance.
    pub fn shares_parent_with(&self, other: &Orbit) -> bool {
        Arc::ptr_eq(&self.parent, &other.parent)
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_latus_rectum
    }

    /// Infinite for circular orbits.
    pub fn focal_parameter(&self) -> f64 {
        self.focal_parameter
    }

    pub fn linear_eccentricity(&self) -> f64 {
        self.linear_eccentricity
    }

    pub fn apoapsis(&self) -> f64 {
        self.apoapsis
    }

    pub fn periapsis(&self) -> f64 {
        self.periapsis
    }

    pub fn apoapsis_altitude(&self) -> f64 {
        self.apoapsis_altitude
    }

    pub fn periapsis_altitude(&self) -> f64 {
        self.periapsis_altitude
    }

    pub fn orbital_period(&self) -> f64 {
        self.orbital_period
    }

    pub fn apoapsis_speed(&self) -> f64 {
        self.apoapsis_speed
    }

    pub fn periapsis_speed(&self) -> f64 {
        self.periapsis_speed
    }

    pub fn mean_orbital_speed(&self) -> f64 {
        self.mean_orbital_speed
    }

    pub fn specific_orbital_energy(&self) -> f64 {
        self.specific_orbital_energy
    }

    pub fn specific_angular_momentum(&self) -> f64 {
        self.specific_angular_momentum
    }

    pub fn mean_darkness_time(&self) -> f64 {
        self.mean_darkness_time
    }

    pub fn max_darkness_time(&self) -> f64 {
        self.max_darkness_time
    }

    /// Periapsis dips below the parent's surface.
    pub fn is_inside_parent(&self) -> bool {
        self.periapsis < self.parent.radius
    }

    /// `"<body>: <periapsis> x <apoapsis>"`, in km, using altitudes or radii.
    pub fn summary(&self, use_altitude_for_apsides: bool) -> String {
        let (low, high) = if use_altitude_for_apsides {
            (self.periapsis_altitude, self.apoapsis_altitude)
        } else {
            (self.periapsis, self.apoapsis)
        };
        format!(
            "{}: {} x {}",
            self.parent.name,
            format::distance(low),
            format::distance(high)
        )
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(true))
    }
}
