// src/startup.rs

//! The space-centre startup pass: hide configured facilities for the
//! current game mode and show every other one.

use tracing::{debug, info};

use crate::config::{ConfigModel, GameMode, ModelCache};
use crate::errors::Result;
use crate::node::ConfigSource;

/// The part of the host that owns facilities and their visibility.
pub trait FacilityHost {
    /// Mode of the running game, if a game is loaded.
    fn current_mode(&self) -> Option<GameMode>;

    /// Names of all facilities the host can show or hide.
    fn facilities(&self) -> Vec<String>;

    fn set_visible(&mut self, facility: &str, visible: bool);
}

/// What one startup pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityReport {
    pub mode: Option<GameMode>,
    pub hidden: Vec<String>,
    pub shown: Vec<String>,
}

/// Apply `model` to every facility of `host`.
pub fn apply_visibility(model: &ConfigModel, host: &mut dyn FacilityHost) -> VisibilityReport {
    let mode = host.current_mode();
    let hidden_names = match mode {
        Some(mode) => model.hidden_facilities(mode).clone(),
        None => {
            debug!("no game mode; showing all facilities");
            Default::default()
        }
    };

    let mut report = VisibilityReport {
        mode,
        ..Default::default()
    };

    let facilities = host.facilities();
    for facility in &facilities {
        let visible = !hidden_names.contains(facility);
        host.set_visible(facility, visible);
        if visible {
            report.shown.push(facility.clone());
        } else {
            report.hidden.push(facility.clone());
        }
    }

    for name in hidden_names.iter().filter(|n| !facilities.contains(n)) {
        debug!(facility = %name, "configured facility not present in host");
    }

    info!(
        mode = ?report.mode,
        hidden = report.hidden.len(),
        shown = report.shown.len(),
        "applied facility visibility"
    );
    report
}

/// Startup hook owning the build-once model.
#[derive(Debug, Default)]
pub struct SpaceCentreStartup {
    cache: ModelCache,
}

impl SpaceCentreStartup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the model on first use, then run the visibility pass.
    pub fn on_start<S: ConfigSource + ?Sized>(
        &self,
        source: &S,
        host: &mut dyn FacilityHost,
    ) -> Result<VisibilityReport> {
        let model = self.cache.get_or_build(source)?;
        Ok(apply_visibility(model, host))
    }

    pub fn model(&self) -> Option<&ConfigModel> {
        self.cache.get()
    }
}
