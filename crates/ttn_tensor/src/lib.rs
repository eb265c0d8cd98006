//! # ttn_tensor
//!
//! Labelled-index tensor algebra: contraction by index matching,
//! truncated SVD (delegated to `nalgebra`'s complex SVD), and gate
//! materialization on top of it.

pub mod gates;
pub mod index;
pub mod tensor;

pub use gates::{materialize, materialize_one_site, materialize_two_site};
pub use index::Index;
pub use tensor::Tensor;
