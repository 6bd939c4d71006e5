//! Grain growth simulation engine.
//!
//! This module implements the 2D lattice where seeded grains expand by
//! a synchronous majority-vote rule until every cell is claimed.

pub mod cell;
pub mod growth;
pub mod lattice;

pub use cell::Cell;
pub use growth::FillReport;
pub use lattice::Lattice;
