//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("growth stuck at step {step}: {empty_remaining} empty cells remain but no cell was claimed")]
    Stuck { step: u64, empty_remaining: usize },
}
