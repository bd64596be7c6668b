// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod node;
pub mod startup;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{ConfigModel, GameMode, load_model, resolve_mode};
use crate::errors::BlockerError;
use crate::fs::RealFileSystem;
use crate::startup::{FacilityHost, apply_visibility};

/// High-level entry point used by `main.rs`; reports to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = io::stdout();
    run_with(args, &mut stdout.lock())
}

/// Load the game-data tree, build the model and write either every
/// configured mode or the plan for a single one to `out`.
pub fn run_with(args: CliArgs, out: &mut impl Write) -> Result<()> {
    let root = PathBuf::from(&args.game_data);
    let model = load_model(&RealFileSystem, &root, &args.include)?;

    let Some(name) = args.mode.as_deref() else {
        write_model(&model, out)?;
        return Ok(());
    };

    let mode = resolve_mode(name)
        .ok_or_else(|| BlockerError::Config(format!("unknown game mode '{name}'")))?;

    if args.facilities.is_empty() {
        for facility in model.hidden_facilities(mode) {
            writeln!(out, "{facility}")?;
        }
    } else {
        let mut host = ListedFacilities::new(mode, args.facilities);
        apply_visibility(&model, &mut host);
        for (facility, visible) in &host.facilities {
            writeln!(out, "{} {facility}", if *visible { "show" } else { "hide" })?;
        }
    }

    debug!("report complete");
    Ok(())
}

fn write_model(model: &ConfigModel, out: &mut impl Write) -> io::Result<()> {
    if model.is_empty() {
        return writeln!(out, "no game modes configured");
    }
    for cfg in model.modes() {
        let names: Vec<&str> = cfg.hidden_facilities.iter().map(String::as_str).collect();
        writeln!(out, "{}: {}", cfg.mode, names.join(", "))?;
    }
    Ok(())
}

/// Facilities named on the command line, standing in for the game.
struct ListedFacilities {
    mode: GameMode,
    facilities: Vec<(String, bool)>,
}

impl ListedFacilities {
    fn new(mode: GameMode, names: Vec<String>) -> Self {
        Self {
            mode,
            facilities: names.into_iter().map(|n| (n, true)).collect(),
        }
    }
}

impl FacilityHost for ListedFacilities {
    fn current_mode(&self) -> Option<GameMode> {
        Some(self.mode)
    }

    fn facilities(&self) -> Vec<String> {
        self.facilities.iter().map(|(n, _)| n.clone()).collect()
    }

    fn set_visible(&mut self, facility: &str, visible: bool) {
        for (name, state) in self.facilities.iter_mut().filter(|(n, _)| n == facility) {
            debug!(facility = %name, visible, "facility visibility");
            *state = visible;
        }
    }
}
