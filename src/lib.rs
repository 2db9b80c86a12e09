//! Keplerian orbit calculator.
//!
//! Give any two independent orbital elements for a body around a known parent and
//! get back the complete orbit: apsides, period, speeds, energy, angular momentum
//! and shadow times. Two orbits of the same parent can then be compared for the
//! delta-v of a Hohmann-style transfer. The member crates are re-exported here so
//! front-ends only need one dependency.

pub use soc_config as config;
pub use soc_core as common;
pub use soc_export as export;
pub use soc_impulsive as impulsive;
pub use soc_orbits as orbits;

