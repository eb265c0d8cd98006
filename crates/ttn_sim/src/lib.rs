//! # ttn_sim
//!
//! The tree/graph tensor-network wavefunction simulator: a movable
//! two-site orthogonality center, SVD-truncated gate application, and
//! overlap-based measurement.

pub mod qcircuit;

pub use qcircuit::{overlap, QCircuit, ShiftDirection};
