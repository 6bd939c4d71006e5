//! A single lattice site.

use grain_core::{CellState, Coordinate, Generation};
use serde::{Deserialize, Serialize};

/// A lattice site: a fixed coordinate, the generation of its last update,
/// and the grain that owns it (if any).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    coordinate: Coordinate,
    generation: Generation,
    state: CellState,
}

impl Cell {
    /// An unclaimed cell stamped with the construction instant (generation 0).
    pub(crate) fn empty(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            generation: 0,
            state: CellState::Empty,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The only mutator. Growth is one-way: a claimed cell is never reset
    /// to empty, and callers supply a generation no earlier than the
    /// current one.
    pub(crate) fn set(&mut self, generation: Generation, state: CellState) {
        debug_assert!(generation >= self.generation);
        debug_assert!(!state.is_empty() || self.state.is_empty());
        self.generation = generation;
        self.state = state;
    }
}
