//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use ttn_core::prelude::*;
//! ```

pub use crate::config::{SimulatorConfig, TtnConfig};
pub use crate::error::{Result, TtnError};
pub use crate::gate::{Gate, OneSiteKind, TwoSiteKind};
pub use crate::physics::{gate_times, Matrix2x2, Matrix4x4, C64};
