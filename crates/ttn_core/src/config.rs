//! Configuration management for the tensor-network circuit simulator.

use serde::{Deserialize, Serialize};

/// Global configuration bag, composed of per-layer configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TtnConfig {
    /// Simulator configuration.
    pub simulator: SimulatorConfig,
}

/// Configuration for the tensor-network wavefunction simulator.
///
/// `cutoff` and `max_dim` are consumed by every SVD performed while
/// shifting the orthogonality center; see `ttn_sim::QCircuit::decompose_psi`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Relative singular-value threshold below which a singular value is discarded.
    /// `0.0` means no cutoff-based truncation.
    pub cutoff: f64,
    /// Hard cap on bond dimension after truncation. `0` means unbounded.
    pub max_dim: usize,
    /// Optional fixed RNG seed, for reproducible measurement sampling.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            cutoff: 0.0,
            max_dim: 0,
            seed: None,
        }
    }
}

impl TtnConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Serializes configuration to a JSON string.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TtnConfig::default();
        assert_eq!(config.simulator.cutoff, 0.0);
        assert_eq!(config.simulator.max_dim, 0);
        assert_eq!(config.simulator.seed, None);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = TtnConfig::default();
        let json = config.to_json().unwrap();
        let parsed = TtnConfig::from_json(&json).unwrap();
        assert_eq!(config.simulator.cutoff, parsed.simulator.cutoff);
        assert_eq!(config.simulator.max_dim, parsed.simulator.max_dim);
    }
}
