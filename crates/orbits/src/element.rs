//! Orbital element slots a caller may supply to the builder.

use std::fmt;

/// One of the seven settable input slots.
///
/// The altitude kinds are aliases: they are converted to radii by adding the
/// parent's radius and then tracked as [`ElementKind::Apoapsis`] /
/// [`ElementKind::Periapsis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    SemiMajorAxis,
    Eccentricity,
    Apoapsis,
    Periapsis,
    OrbitalPeriod,
    ApoapsisAltitude,
    PeriapsisAltitude,
}

impl ElementKind {
    pub const ALL: [ElementKind; 7] = [
        ElementKind::SemiMajorAxis,
        ElementKind::Eccentricity,
        ElementKind::Apoapsis,
        ElementKind::Periapsis,
        ElementKind::OrbitalPeriod,
        ElementKind::ApoapsisAltitude,
        ElementKind::PeriapsisAltitude,
    ];

    /// The slot this kind is tracked under once altitudes are resolved.
    pub fn base(self) -> ElementKind {
        match self {
            ElementKind::ApoapsisAltitude => ElementKind::Apoapsis,
            ElementKind::PeriapsisAltitude => ElementKind::Periapsis,
            other => other,
        }
    }

    pub fn is_altitude(self) -> bool {
        matches!(
            self,
            ElementKind::ApoapsisAltitude | ElementKind::PeriapsisAltitude
        )
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ElementKind::SemiMajorAxis => "semi-major axis",
            ElementKind::Eccentricity => "eccentricity",
            ElementKind::Apoapsis => "apoapsis",
            ElementKind::Periapsis => "periapsis",
            ElementKind::OrbitalPeriod => "orbital period",
            ElementKind::ApoapsisAltitude => "apoapsis altitude",
            ElementKind::PeriapsisAltitude => "periapsis altitude",
        };
        f.write_str(label)
    }
}

/// Known values keyed by base kind, with a bitmask recording which slots are filled.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ElementSet {
    mask: u8,
    values: [f64; 5],
}

impl ElementSet {
    /// Store `value` under `kind`'s base slot. Returns `false` if the slot was
    /// already filled, leaving the earlier value in place.
    pub(crate) fn insert(&mut self, kind: ElementKind, value: f64) -> bool {
        let base = kind.base();
        if self.contains(base) {
            return false;
        }
        self.mask |= base.bit();
        self.values[base as usize] = value;
        true
    }

    pub(crate) fn contains(&self, kind: ElementKind) -> bool {
        self.mask & kind.base().bit() != 0
    }

    pub(crate) fn get(&self, kind: ElementKind) -> Option<f64> {
        let base = kind.base();
        self.contains(base).then(|| self.values[base as usize])
    }
}
