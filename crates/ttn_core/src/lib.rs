//! # ttn_core
//!
//! Shared types for the tensor-network quantum circuit simulator:
//!
//! - [`gate::Gate`]: the gate catalogue (one-site and two-site variants)
//!   with their matrix representations.
//! - [`physics`]: the fixed 2x2/4x4 matrices and a few named physical
//!   constants.
//! - [`error::TtnError`]: unified error type.
//! - [`config::TtnConfig`]: serializable configuration.
//!
//! ## Example
//!
//! ```rust
//! use ttn_core::prelude::*;
//!
//! let g = Gate::h(0);
//! assert_eq!(g.sites(), vec![0]);
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod physics;
pub mod prelude;

pub use config::{SimulatorConfig, TtnConfig};
pub use error::{Result, TtnError};
pub use gate::{Gate, OneSiteKind, TwoSiteKind};
