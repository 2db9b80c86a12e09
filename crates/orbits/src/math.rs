//! Closed-form scalar relations for a Keplerian ellipse.
//!
//! All inputs and outputs are SI: metres, seconds, m³/s² for the gravitational
//! parameter. None of these functions validate their inputs; the builder is
//! responsible for only feeding them closed, non-degenerate ellipses.

use std::f64::consts::PI;

/// Semi-minor axis `b = a·√(1 − e²)`.
#[inline]
pub fn semi_minor_axis(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity).sqrt()
}

/// Semi-latus rectum `p = b² / a`.
#[inline]
pub fn semi_latus_rectum(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_minor_axis(semi_major_axis, eccentricity).powi(2) / semi_major_axis
}

/// Focal parameter `p / e`. Infinite for a circular orbit.
#[inline]
pub fn focal_parameter(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_latus_rectum(semi_major_axis, eccentricity) / eccentricity
}

/// Distance from the centre of the ellipse to either focus, `a·e`.
#[inline]
pub fn linear_eccentricity(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * eccentricity
}

/// Mean orbital speed from the eighth-order series in `e`.
///
/// Truncated after the `e⁸` term. Callers compare against this series, not the
/// exact elliptic-integral form.
pub fn mean_orbital_speed(semi_major_axis: f64, eccentricity: f64, mu: f64) -> f64 {
    let e2 = eccentricity * eccentricity;
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    let e8 = e4 * e4;
    (mu / semi_major_axis).sqrt()
        * (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0 - 175.0 * e8 / 16_384.0)
}

/// Vis-viva speed at radius `r` on an ellipse of semi-major axis `a`.
#[inline]
pub fn apsis_speed(mu: f64, radius: f64, semi_major_axis: f64) -> f64 {
    (mu * (2.0 / radius - 1.0 / semi_major_axis)).sqrt()
}

/// Specific orbital energy `−μ / 2a` (J/kg), negative for closed orbits.
#[inline]
pub fn specific_orbital_energy(mu: f64, semi_major_axis: f64) -> f64 {
    -mu / (2.0 * semi_major_axis)
}

/// Specific angular momentum `√(μ·p)`.
#[inline]
pub fn specific_angular_momentum(mu: f64, semi_latus_rectum: f64) -> f64 {
    (mu * semi_latus_rectum).sqrt()
}

/// Kepler's third law: `T = 2π·√(a³/μ)`.
#[inline]
pub fn orbital_period(semi_major_axis: f64, mu: f64) -> f64 {
    2.0 * PI * (semi_major_axis.powi(3) / mu).sqrt()
}

/// Inverse of [`orbital_period`]: `a = ∛(μ·(T/2π)²)`.
#[inline]
pub fn semi_major_axis_from_period(period: f64, mu: f64) -> f64 {
    (mu * (period / (2.0 * PI)).powi(2)).cbrt()
}

/// Mean time spent in the parent's shadow per orbit, assuming a cylindrical
/// shadow of the parent's radius and a uniform angular rate.
///
/// NaN when `radius > a`.
#[inline]
pub fn mean_darkness_time(period: f64, radius: f64, semi_major_axis: f64) -> f64 {
    period * (radius / semi_major_axis).asin() / PI
}

/// Worst-case darkness duration, with the shadow centred on periapsis.
///
/// Evaluates `2ab·(asin(R/b) + e·R/b)/h` with `R/b` capped at 1. When the minor
/// axis fits inside the parent's disc (`b < R`) this departs from the literal
/// formula, which is NaN there: both the `asin` term and the `e·R/b` term use the
/// capped ratio, so the result is `2ab·(π/2 + e)/h`.
pub fn max_darkness_time(
    semi_major_axis: f64,
    semi_minor_axis: f64,
    radius: f64,
    angular_momentum: f64,
    eccentricity: f64,
) -> f64 {
    let ratio = (radius / semi_minor_axis).min(1.0);
    2.0 * semi_major_axis * semi_minor_axis * (ratio.asin() + eccentricity * ratio)
        / angular_momentum
}
