//! Core type definitions for the lattice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a grain. Valid ids start at 1; 0 is reserved for the
/// empty state in the raw integer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GrainId(pub u32);

impl GrainId {
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for GrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 2D lattice coordinate, 0-based, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance to another coordinate (max of per-axis distances)
    pub fn chebyshev_distance(&self, other: &Coordinate) -> usize {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// State of a single lattice site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Unclaimed site
    Empty,
    /// Site owned by a grain
    Grain(GrainId),
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    pub fn grain(&self) -> Option<GrainId> {
        match self {
            CellState::Empty => None,
            CellState::Grain(id) => Some(*id),
        }
    }

    /// Raw integer encoding consumed by renderers: 0 for empty,
    /// the grain id otherwise
    pub fn as_raw(&self) -> u32 {
        match self {
            CellState::Empty => 0,
            CellState::Grain(id) => id.0,
        }
    }
}

/// Logical timestamp for cell updates. The construction instant is 0;
/// growth step k stamps claimed cells with k.
pub type Generation = u64;
