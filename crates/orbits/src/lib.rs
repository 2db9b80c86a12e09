//! Two-body orbit construction: derive a complete Keplerian ellipse from any two
//! independent elements and expose the resulting geometry, speeds and energies.

pub mod builder;
pub mod element;
pub mod error;
pub mod math;
pub mod orbit;

pub use builder::{OrbitBuilder, ValidationPolicy};
pub use element::ElementKind;
pub use error::OrbitError;
pub use orbit::Orbit;
pub use soc_core::ParentBody;
