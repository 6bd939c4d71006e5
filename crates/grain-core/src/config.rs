//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Lattice configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeConfig {
    /// Number of rows in the lattice
    pub rows: usize,
    /// Number of columns in the lattice
    pub cols: usize,
    /// Number of seed grains placed at construction
    pub grain_count: u32,
    /// Random seed for grain placement (reproducible runs)
    pub seed: u64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 40,
            grain_count: 40,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LatticeConfig::default();
        assert_eq!(config.rows, 40);
        assert_eq!(config.cols, 40);
        assert_eq!(config.grain_count, 40);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_config_serialization() {
        let config = LatticeConfig {
            rows: 12,
            cols: 8,
            grain_count: 5,
            seed: 99,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LatticeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.rows, deserialized.rows);
        assert_eq!(config.cols, deserialized.cols);
        assert_eq!(config.grain_count, deserialized.grain_count);
        assert_eq!(config.seed, deserialized.seed);
    }
}
