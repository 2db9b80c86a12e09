//! Impulsive transfer utilities: Hohmann-style delta-v between built orbits and the
//! classical circular-orbit estimator.

pub mod transfers;

pub use transfers::{
    HohmannResult, TransferError, circular_hohmann, hohmann_transfer, hohmann_transfer_delta_v,
};
