// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::config::GameMode;
use crate::node::ParseError;

#[derive(Error, Debug)]
pub enum BlockerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config node parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two mode sections with different resolved modes reached `merge`.
    ///
    /// Grouping by mode makes this unreachable; it guards the grouping.
    #[error("Incompatible merge: can't merge {other} into {base}")]
    IncompatibleMerge { base: GameMode, other: GameMode },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BlockerError>;
