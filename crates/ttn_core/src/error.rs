//! Error types shared across the tensor-network circuit simulator crates.

use thiserror::Error;

/// Unified error type for topology, tensor and circuit operations.
#[derive(Error, Debug)]
pub enum TtnError {
    // ============ Topology errors ============
    /// Site index out of range.
    #[error("invalid site index {0}, have {1} sites")]
    InvalidSite(usize, usize),

    /// A link was requested between a site and itself.
    #[error("a link cannot connect site {0} to itself")]
    SelfLink(usize),

    /// A link between two sites already exists.
    #[error("link between {0} and {1} already exists")]
    LinkExists(usize, usize),

    /// No link exists between two sites.
    #[error("no link between {0} and {1}")]
    NoSuchLink(usize, usize),

    /// The topology graph is not connected.
    #[error("topology is not connected")]
    Disconnected,

    /// `route` could not reach the requested destination.
    #[error("no path from {0:?} to {1:?}")]
    Unreachable((usize, usize), (usize, usize)),

    // ============ Tensor errors ============
    /// Generic tensor-algebra error (index mismatch during contraction/SVD).
    #[error("tensor error: {0}")]
    Tensor(String),

    /// Contraction attempted between tensors that share no matching index.
    #[error("no common index between operands")]
    NoCommonIndex,

    /// Row-index partition passed to `svd` referenced an index absent from the tensor.
    #[error("index {0} is not a free index of this tensor")]
    UnknownIndex(String),

    // ============ Simulator errors ============
    /// Generic wavefunction/circuit error.
    #[error("simulator error: {0}")]
    Simulator(String),

    /// Gate applied to sites that are not adjacent on the current cursor path.
    #[error("cannot apply gate: sites {0} and {1} are not adjacent")]
    NotAdjacent(usize, usize),

    // ============ Config / IO errors ============
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for tensor-network simulator operations.
pub type Result<T> = std::result::Result<T, TtnError>;

impl TtnError {
    /// Creates a tensor error with the given message.
    pub fn tensor(msg: impl Into<String>) -> Self {
        Self::Tensor(msg.into())
    }

    /// Creates a simulator error with the given message.
    pub fn simulator(msg: impl Into<String>) -> Self {
        Self::Simulator(msg.into())
    }

    /// Creates a config error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
