//! # ttn_topology
//!
//! The connectivity graph a tensor-network circuit is laid out over:
//! sites, the links between them, shortest-path routing between an
//! origin edge and a destination edge (used to move the orthogonality
//! center), and a handful of standard topology builders.

pub mod builders;
pub mod dot;
pub mod graph;

pub use builders::{make_all_to_all, make_chain, make_ibmq_topology};
pub use dot::{to_dot, DotOptions};
pub use graph::{Neighbor, Topology};
