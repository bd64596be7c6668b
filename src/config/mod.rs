// src/config/mod.rs

//! Per-mode hidden-facility configuration.
//!
//! Responsibilities:
//! - Name the game modes and their aliases (`mode.rs`, `alias.rs`).
//! - Turn `GAMEMODE` nodes into typed records (`model.rs`).
//! - Union sections that describe the same mode (`merge.rs`).
//! - Read the game-data tree from disk (`loader.rs`).
//! - Keep the built model for the rest of the process (`cache.rs`).

pub mod alias;
pub mod cache;
pub mod loader;
pub mod merge;
pub mod mode;
pub mod model;

pub use alias::{AliasTable, resolve_mode};
pub use cache::ModelCache;
pub use loader::{DEFAULT_GAME_DATA, DEFAULT_INCLUDE, load_forest, load_model};
pub use mode::GameMode;
pub use model::{ConfigModel, ModeConfig, UnresolvedMode};
