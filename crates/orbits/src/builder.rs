//! One-shot builder deriving a complete orbit from two known elements.

use std::sync::Arc;

use soc_core::ParentBody;

use crate::element::{ElementKind, ElementSet};
use crate::error::OrbitError;
use crate::math;
use crate::orbit::Orbit;

/// Eccentricities at or below this magnitude are treated as exactly circular.
pub const ECCENTRICITY_EPSILON: f64 = 1e-5;

/// Optional checks applied after the elements have been derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject orbits whose apoapsis lies beyond the parent's sphere of influence.
    pub enforce_sphere_of_influence: bool,
}

/// Collects exactly two orbital elements and turns them into an [`Orbit`].
///
/// The builder is consumed by [`OrbitBuilder::build`]; start a fresh one to retry
/// with corrected inputs.
///
/// ```
/// use std::sync::Arc;
/// use soc_orbits::{ElementKind, OrbitBuilder, ParentBody};
///
/// let kerbin = Arc::new(ParentBody::new("Kerbin", 3.5316e12, 600_000.0, 84_159_286.0));
/// let orbit = OrbitBuilder::new(kerbin)
///     .set(ElementKind::ApoapsisAltitude, 100_000.0)
///     .set(ElementKind::Periapsis, 600_000.0)
///     .build()
///     .unwrap();
/// assert_eq!(orbit.semi_major_axis(), 650_000.0);
/// ```
#[derive(Debug, Clone)]
pub struct OrbitBuilder {
    parent: Arc<ParentBody>,
    policy: ValidationPolicy,
    known: ElementSet,
    supplied: usize,
    duplicate: Option<ElementKind>,
}

impl OrbitBuilder {
    pub fn new(parent: Arc<ParentBody>) -> Self {
        Self {
            parent,
            policy: ValidationPolicy::default(),
            known: ElementSet::default(),
            supplied: 0,
            duplicate: None,
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record a known element. Altitudes are converted to radii immediately.
    pub fn set(mut self, kind: ElementKind, value: f64) -> Self {
        let value = if kind.is_altitude() {
            value + self.parent.radius
        } else {
            value
        };
        self.supplied += 1;
        if !self.known.insert(kind, value) && self.duplicate.is_none() {
            self.duplicate = Some(kind.base());
        }
        self
    }

    /// Record a known element from user text (decimal or scientific notation,
    /// `.` as the decimal separator).
    pub fn set_text(self, kind: ElementKind, text: &str) -> Result<Self, OrbitError> {
        let value = parse_number(text).ok_or_else(|| OrbitError::InvalidNumberFormat {
            kind,
            input: text.to_string(),
        })?;
        Ok(self.set(kind, value))
    }

    /// Use the parent's sidereal rotation period as the orbital period, giving a
    /// synchronous orbit once combined with a second element.
    pub fn set_synchronous_period(self) -> Result<Self, OrbitError> {
        let period = self
            .parent
            .rotation_period
            .ok_or_else(|| OrbitError::NoRotationPeriod(self.parent.name.clone()))?;
        Ok(self.set(ElementKind::OrbitalPeriod, period))
    }

    /// Validate the inputs, derive the missing elements and freeze the result.
    pub fn build(self) -> Result<Orbit, OrbitError> {
        self.validate_inputs()?;

        let mu = self.parent.gravitational_parameter;
        let mut known = self.known;
        if let Some(period) = known.get(ElementKind::OrbitalPeriod) {
            if !(period.is_finite() && period > 0.0) {
                return Err(OrbitError::InvalidOrbitalPeriod(period));
            }
            known.insert(
                ElementKind::SemiMajorAxis,
                math::semi_major_axis_from_period(period, mu),
            );
        }

        let (semi_major_axis, eccentricity) = derive(&known)?;
        let eccentricity = if eccentricity.abs() <= ECCENTRICITY_EPSILON {
            0.0
        } else {
            eccentricity
        };

        self.validate_output(semi_major_axis, eccentricity)?;

        let orbit = Orbit::new(self.parent, semi_major_axis, eccentricity);
        if let Some(field) = orbit.non_finite_field() {
            return Err(OrbitError::UnexpectedFailure(format!(
                "{field} is not finite (a = {semi_major_axis}, e = {eccentricity})"
            )));
        }
        Ok(orbit)
    }

    fn validate_inputs(&self) -> Result<(), OrbitError> {
        if self.supplied != 2 {
            return Err(OrbitError::TwoElementsRequired {
                found: self.supplied,
            });
        }
        if let Some(kind) = self.duplicate {
            return Err(OrbitError::DuplicateElementKind(kind));
        }
        if self.known.contains(ElementKind::SemiMajorAxis)
            && self.known.contains(ElementKind::OrbitalPeriod)
        {
            return Err(OrbitError::AmbiguousElementPair);
        }
        Ok(())
    }

    fn validate_output(&self, semi_major_axis: f64, eccentricity: f64) -> Result<(), OrbitError> {
        if !eccentricity.is_finite() {
            return Err(OrbitError::UnexpectedFailure(format!(
                "derived eccentricity is {eccentricity}"
            )));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::InvalidEccentricity(eccentricity));
        }
        if !semi_major_axis.is_finite() {
            return Err(OrbitError::UnexpectedFailure(format!(
                "derived semi-major axis is {semi_major_axis}"
            )));
        }
        if semi_major_axis <= 0.0 {
            return Err(OrbitError::InvalidSemiMajorAxis(semi_major_axis));
        }
        if semi_major_axis < self.parent.radius {
            return Err(OrbitError::InsideParentBody {
                semi_major_axis,
                radius: self.parent.radius,
            });
        }
        if self.policy.enforce_sphere_of_influence {
            let apoapsis = semi_major_axis * (1.0 + eccentricity);
            let soi = self.parent.sphere_of_influence_radius;
            if apoapsis > soi {
                return Err(OrbitError::OutsideSphereOfInfluence { apoapsis, soi });
            }
        }
        Ok(())
    }
}

/// Solve for `(a, e)` from whichever two of a, e, apoapsis and periapsis are known.
fn derive(known: &ElementSet) -> Result<(f64, f64), OrbitError> {
    let pair = (
        known.get(ElementKind::SemiMajorAxis),
        known.get(ElementKind::Eccentricity),
        known.get(ElementKind::Apoapsis),
        known.get(ElementKind::Periapsis),
    );
    match pair {
        (None, None, Some(apo), Some(peri)) => {
            Ok(((apo + peri) / 2.0, (apo - peri) / (apo + peri)))
        }
        (Some(a), None, Some(apo), None) => Ok((a, apo / a - 1.0)),
        (Some(a), None, None, Some(peri)) => Ok((a, 1.0 - peri / a)),
        (None, Some(e), Some(apo), None) => Ok((apo / (1.0 + e), e)),
        (None, Some(e), None, Some(peri)) => Ok((peri / (1.0 - e), e)),
        (Some(a), Some(e), None, None) => Ok((a, e)),
        other => Err(OrbitError::UnexpectedFailure(format!(
            "no derivation for known elements {other:?}"
        ))),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MU_KERBIN: f64 = 3.5316e12;
    const R_KERBIN: f64 = 600_000.0;
    const SOI_KERBIN: f64 = 84_159_286.0;

    fn kerbin() -> Arc<ParentBody> {
        Arc::new(
            ParentBody::new("Kerbin", MU_KERBIN, R_KERBIN, SOI_KERBIN)
                .with_rotation_period(21_549.425),
        )
    }

    fn rel(a: f64, b: f64) -> f64 {
        (a - b).abs() / b.abs().max(1e-300)
    }

    #[test]
    fn apoapsis_and_periapsis() {
        let orbit = OrbitBuilder::new(kerbin())
            .set(ElementKind::Apoapsis, 700_000.0)
            .set(ElementKind::Periapsis, 600_000.0)
            .build()
            .expect("orbit");
        assert_eq!(orbit.semi_major_axis(), 650_000.0);
        assert!(rel(orbit.eccentricity(), 1.0 / 13.0) < 1e-12);
        let kepler = 2.0 * std::f64::consts::PI * (650_000.0_f64.powi(3) / MU_KERBIN).sqrt();
        assert!(rel(orbit.orbital_period(), kepler) < 1e-12);
        assert!((orbit.orbital_period() - 1_752.12).abs() < 0.01);
    }

    #[test]
    fn every_pair_reaches_the_same_orbit() {
        let (a, e) = (900_000.0, 0.2);
        let apo = a * (1.0 + e);
        let peri = a * (1.0 - e);
        let period = math::orbital_period(a, MU_KERBIN);
        let pairs = [
            (ElementKind::Apoapsis, apo, ElementKind::Periapsis, peri),
            (ElementKind::SemiMajorAxis, a, ElementKind::Apoapsis, apo),
            (ElementKind::Periapsis, peri, ElementKind::SemiMajorAxis, a),
            (ElementKind::Eccentricity, e, ElementKind::Apoapsis, apo),
            (ElementKind::Periapsis, peri, ElementKind::Eccentricity, e),
            (ElementKind::SemiMajorAxis, a, ElementKind::Eccentricity, e),
            (ElementKind::OrbitalPeriod, period, ElementKind::Eccentricity, e),
            (ElementKind::OrbitalPeriod, period, ElementKind::Apoapsis, apo),
            (ElementKind::Periapsis, peri, ElementKind::OrbitalPeriod, period),
            (
                ElementKind::ApoapsisAltitude,
                apo - R_KERBIN,
                ElementKind::PeriapsisAltitude,
                peri - R_KERBIN,
            ),
        ];
        for (k1, v1, k2, v2) in pairs {
            let orbit = OrbitBuilder::new(kerbin())
                .set(k1, v1)
                .set(k2, v2)
                .build()
                .unwrap_or_else(|err| panic!("{k1} + {k2}: {err}"));
            assert!(rel(orbit.semi_major_axis(), a) < 1e-9, "{k1} + {k2}");
            assert!(rel(orbit.eccentricity(), e) < 1e-9, "{k1} + {k2}");
        }
    }

    #[test]
    fn circular_from_equal_apsides() {
        let orbit = OrbitBuilder::new(kerbin())
            .set(ElementKind::Apoapsis, 750_000.0)
            .set(ElementKind::Periapsis, 750_000.0)
            .build()
            .expect("orbit");
        assert_eq!(orbit.eccentricity(), 0.0);
        assert_eq!(orbit.semi_major_axis(), 750_000.0);
    }

    #[test]
    fn circular_from_axis_and_zero_eccentricity() {
        let orbit = OrbitBuilder::new(kerbin())
            .set(ElementKind::SemiMajorAxis, 700_000.0)
            .set(ElementKind::Eccentricity, 0.0)
            .build()
            .expect("orbit");
        assert_eq!(orbit.apoapsis(), 700_000.0);
        assert_eq!(orbit.periapsis(), 700_000.0);
        assert_eq!(orbit.eccentricity(), 0.0);
        assert!(rel(orbit.apoapsis_speed(), orbit.periapsis_speed()) < 1e-12);
        assert!(rel(orbit.mean_orbital_speed(), orbit.periapsis_speed()) < 1e-12);
    }

    #[test]
    fn near_circular_noise_snaps_to_zero() {
        let snapped = OrbitBuilder::new(kerbin())
            .set(ElementKind::SemiMajorAxis, 1_000_000.0)
            .set(ElementKind::Eccentricity, 1e-6)
            .build()
            .expect("orbit");
        assert_eq!(snapped.eccentricity(), 0.0);

        let kept = OrbitBuilder::new(kerbin())
            .set(ElementKind::SemiMajorAxis, 1_000_000.0)
            .set(ElementKind::Eccentricity, 2e-5)
            .build()
            .expect("orbit");
        assert_eq!(kept.eccentricity(), 2e-5);
    }

    #[test]
    fn element_count_is_checked_first() {
        let one = OrbitBuilder::new(kerbin())
            .set(ElementKind::Apoapsis, 700_000.0)
            .build();
        assert_eq!(one.unwrap_err(), OrbitError::TwoElementsRequired { found: 1 });

        let three = OrbitBuilder::new(kerbin())
            .set(ElementKind::Apoapsis, 700_000.0)
            .set(ElementKind::Periapsis, 650_000.0)
            .set(ElementKind::Eccentricity, 0.01)
            .build();
        assert_eq!(three.unwrap_err(), OrbitError::TwoElementsRequired { found: 3 });

        let none = OrbitBuilder::new(kerbin()).build();
        assert_eq!(none.unwrap_err(), OrbitError::TwoElementsRequired { found: 0 });
    }

    #[test]
    fn semi_major_axis_with_period_is_ambiguous() {
        let err = OrbitBuilder::new(kerbin())
            .set(ElementKind::SemiMajorAxis, 700_000.0)
            .set(ElementKind::OrbitalPeriod, 2_000.0)
            .build()
            .unwrap_err();
        assert_eq!(err, OrbitError::AmbiguousElementPair);
    }

    #[test]
    fn non_positive_period_is_rejected_before_folding() {
        for period in [-3_000.0, 0.0, f64::NAN] {
            let err = OrbitBuilder::new(kerbin())
                .set(ElementKind::OrbitalPeriod, period)
                .set(ElementKind::Eccentricity, 0.0)
                .build()
                .unwrap_err();
            assert!(
                matches!(err, OrbitError::InvalidOrbitalPeriod(p) if p.is_nan() || p == period),
                "period {period} gave {err:?}"
            );
            assert!(err.is_element_error());
        }
    }

    #[test]
    fn apsis_and_its_altitude_conflict() {
        let err = OrbitBuilder::new(kerbin())
            .set(ElementKind::Apoapsis, 700_000.0)
            .set(ElementKind::ApoapsisAltitude, 100_000.0)
            .build()
            .unwrap_err();
        assert_eq!(err, OrbitError::DuplicateElementKind(ElementKind::Apoapsis));
        assert!(err.is_element_error());
    }

    #[test]
    fn apoapsis_below_periapsis_is_rejected() {
        let err = OrbitBuilder::new(kerbin())
            .set(ElementKind::Apoapsis, 600_000.0)
            .set(ElementKind::Periapsis, 700_000.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, OrbitError::InvalidEccentricity(e) if e < 0.0));
    }

    #[test]
    fn open_orbits_are_rejected() {
        let err = OrbitBuilder::new(kerbin())
            .set(ElementKind::Apoapsis, 2_000_000.0)
            .set(ElementKind::Eccentricity, 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, OrbitError::InvalidEccentricity(1.0));
    }

    #[test]
    fn orbit_smaller_than_parent_is_rejected() {
        let err = OrbitBuilder::new(kerbin())
            .set(ElementKind::SemiMajorAxis, 500_000.0)
            .set(ElementKind::Eccentricity, 0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, OrbitError::InsideParentBody { .. }));
    }

    #[test]
    fn sphere_of_influence_check_is_opt_in() {
        let make = || {
            OrbitBuilder::new(kerbin())
                .set(ElementKind::Periapsis, 700_000.0)
                .set(ElementKind::Apoapsis, 100_000_000.0)
        };
        assert!(make().build().is_ok());
        let err = make()
            .with_policy(ValidationPolicy {
                enforce_sphere_of_influence: true,
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, OrbitError::OutsideSphereOfInfluence { .. }));
    }

    #[test]
    fn text_inputs_parse_invariantly() {
        let orbit = OrbitBuilder::new(kerbin())
            .set_text(ElementKind::PeriapsisAltitude, " 7E4 ")
            .and_then(|b| b.set_text(ElementKind::ApoapsisAltitude, "100000.5"))
            .and_then(OrbitBuilder::build)
            .expect("orbit");
        assert_eq!(orbit.periapsis(), 670_000.0);
        assert_eq!(orbit.apoapsis(), 700_000.5);

        for bad in ["", "12,5", "abc", "NaN", "inf"] {
            let err = OrbitBuilder::new(kerbin())
                .set_text(ElementKind::Eccentricity, bad)
                .unwrap_err();
            assert!(matches!(err, OrbitError::InvalidNumberFormat { .. }), "{bad:?}");
            assert!(!err.is_element_error());
        }
    }

    #[test]
    fn synchronous_period_uses_rotation() {
        let orbit = OrbitBuilder::new(kerbin())
            .set_synchronous_period()
            .expect("rotation period")
            .set(ElementKind::Eccentricity, 0.0)
            .build()
            .expect("orbit");
        assert!(rel(orbit.orbital_period(), 21_549.425) < 1e-12);
        // Kerbin's keostationary altitude is about 2 863 km.
        assert!((orbit.apoapsis_altitude() - 2_863_334.0).abs() < 1_000.0);

        let bare = Arc::new(ParentBody::new("Mun", 6.5138398e10, 200_000.0, 2_429_559.1));
        let err = OrbitBuilder::new(bare).set_synchronous_period().unwrap_err();
        assert_eq!(err, OrbitError::NoRotationPeriod("Mun".to_string()));
    }

    #[test]
    fn non_finite_derivations_are_unexpected() {
        let err = OrbitBuilder::new(kerbin())
            .set(ElementKind::Apoapsis, 0.0)
            .set(ElementKind::Periapsis, 0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, OrbitError::UnexpectedFailure(_)));
        assert!(!err.is_element_error());
    }
}
