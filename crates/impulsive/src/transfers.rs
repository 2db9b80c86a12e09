//! Analytic estimators for two-burn impulsive transfers around a single parent body.
//!
//! [`hohmann_transfer`] works on built [`Orbit`]s and meets the higher orbit at its
//! periapsis. [`circular_hohmann`] is the textbook coplanar circular case and is
//! what the orbit-based variant reduces to when both orbits are circular.

use std::f64::consts::PI;
use std::sync::Arc;

use soc_orbits::{ElementKind, Orbit, OrbitBuilder, OrbitError};
use thiserror::Error;

/// Burns and time of flight for a two-impulse transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannResult {
    pub dv1_m_s: f64,      // signed: negative for inward (retro) burn
    pub dv2_m_s: f64,      // signed: negative for retro capture when arriving inward
    pub dv_total_m_s: f64, // |dv1| + |dv2|
    pub tof_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("parent bodies of the orbits do not match ({first} vs {second})")]
    MismatchedParentBody { first: String, second: String },
    #[error("transfer ellipse: {0}")]
    Orbit(#[from] OrbitError),
}

/// Transfer from the lower-energy orbit's periapsis to the higher-energy orbit's
/// periapsis.
///
/// The transfer ellipse has its periapsis at the lower orbit's periapsis and its
/// apoapsis at the higher orbit's periapsis. Both orbits must have been built
/// against the same parent instance. The result does not depend on argument order.
pub fn hohmann_transfer(first: &Orbit, second: &Orbit) -> Result<HohmannResult, TransferError> {
    if !first.shares_parent_with(second) {
        return Err(TransferError::MismatchedParentBody {
            first: first.parent().name.clone(),
            second: second.parent().name.clone(),
        });
    }

    let (lower, higher) = order_by_energy(first, second);

    let transfer = OrbitBuilder::new(Arc::clone(lower.parent()))
        .set(ElementKind::Periapsis, lower.periapsis())
        .set(ElementKind::Apoapsis, higher.periapsis())
        .build()?;

    let dv1 = transfer.periapsis_speed() - lower.periapsis_speed();
    let dv2 = higher.periapsis_speed() - transfer.apoapsis_speed();

    Ok(HohmannResult {
        dv1_m_s: dv1,
        dv2_m_s: dv2,
        dv_total_m_s: dv1.abs() + dv2.abs(),
        tof_seconds: transfer.orbital_period() / 2.0,
    })
}

/// Total delta-v (m/s) of [`hohmann_transfer`].
pub fn hohmann_transfer_delta_v(first: &Orbit, second: &Orbit) -> Result<f64, TransferError> {
    hohmann_transfer(first, second).map(|result| result.dv_total_m_s)
}

/// Lower (more negative) specific energy first. Ties fall back to the smaller
/// periapsis so the ordering never depends on argument position.
fn order_by_energy<'a>(a: &'a Orbit, b: &'a Orbit) -> (&'a Orbit, &'a Orbit) {
    let key = |o: &Orbit| (o.specific_orbital_energy(), o.periapsis());
    if key(b) < key(a) { (b, a) } else { (a, b) }
}

/// Compute the classical Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1_m`: initial circular orbit radius (m)
/// - `r2_m`: target circular orbit radius (m)
/// - `mu_m3_s2`: gravitational parameter of central body (m^3/s^2)
///
/// Returns `None` unless all three inputs are finite and positive.
pub fn circular_hohmann(r1_m: f64, r2_m: f64, mu_m3_s2: f64) -> Option<HohmannResult> {
    if ![r1_m, r2_m, mu_m3_s2]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    {
        return None;
    }

    let v1 = (mu_m3_s2 / r1_m).sqrt();
    let v2 = (mu_m3_s2 / r2_m).sqrt();
    let a_t = 0.5 * (r1_m + r2_m);
    let tof = PI * (a_t.powi(3) / mu_m3_s2).sqrt();

    // Transfer speed at r1 and at r2
    let v_t1 = (mu_m3_s2 * (2.0 / r1_m - 1.0 / a_t)).sqrt();
    let v_t2 = (mu_m3_s2 * (2.0 / r2_m - 1.0 / a_t)).sqrt();

    let dv1 = v_t1 - v1;
    let dv2 = v2 - v_t2;

    Some(HohmannResult {
        dv1_m_s: dv1,
        dv2_m_s: dv2,
        dv_total_m_s: dv1.abs() + dv2.abs(),
        tof_seconds: tof,
    })
}
