use thiserror::Error;

use crate::element::ElementKind;

/// Errors raised while building an orbit from partial elements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    #[error("two orbital elements are required to complete the calculation (got {found})")]
    TwoElementsRequired { found: usize },
    #[error("semi-major axis and orbital period create an ambiguous case")]
    AmbiguousElementPair,
    #[error("{0} was supplied more than once")]
    DuplicateElementKind(ElementKind),
    #[error("resulting eccentricity {0} is outside the closed-orbit range [0, 1)")]
    InvalidEccentricity(f64),
    #[error("resulting semi-major axis {0} m must be positive")]
    InvalidSemiMajorAxis(f64),
    #[error("orbital period {0} s must be positive")]
    InvalidOrbitalPeriod(f64),
    #[error(
        "semi-major axis {semi_major_axis} m lies inside the parent body (radius {radius} m)"
    )]
    InsideParentBody { semi_major_axis: f64, radius: f64 },
    #[error("apoapsis {apoapsis} m exceeds the sphere of influence ({soi} m)")]
    OutsideSphereOfInfluence { apoapsis: f64, soi: f64 },
    #[error("'{input}' is not a valid number for {kind}")]
    InvalidNumberFormat { kind: ElementKind, input: String },
    #[error("{0} has no known rotation period")]
    NoRotationPeriod(String),
    #[error("unexpected failure: {0}")]
    UnexpectedFailure(String),
}

impl OrbitError {
    /// True for errors caused by the combination or values of the supplied
    /// elements, whose message can be shown to the user verbatim.
    pub fn is_element_error(&self) -> bool {
        !matches!(
            self,
            OrbitError::InvalidNumberFormat { .. } | OrbitError::UnexpectedFailure(_)
        )
    }
}
