// src/config/model.rs

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use super::alias::resolve_mode;
use super::mode::GameMode;
use crate::errors::Result;
use crate::node::{ConfigSource, RawNode};

/// Top-level node holding this system's configuration.
pub const CONFIG_NODE: &str = "BUILDINGBLOCKERCONFIG";
/// One per-mode section inside [`CONFIG_NODE`].
pub const GAME_MODE_NODE: &str = "GAMEMODE";
/// One hidden facility inside [`GAME_MODE_NODE`].
pub const HIDE_FACILITY_NODE: &str = "HIDEFACILITY";
pub const NAME_KEY: &str = "name";

static NO_FACILITIES: BTreeSet<String> = BTreeSet::new();

/// Hidden-facility policy for a single game mode.
///
/// Mirrors a `GAMEMODE` section:
///
/// ```text
/// GAMEMODE
/// {
///     name = Career
///     HIDEFACILITY { name = Observatory }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeConfig {
    pub mode: GameMode,
    pub hidden_facilities: BTreeSet<String>,
}

/// A `GAMEMODE` section whose name matched no mode or alias.
///
/// Returned instead of a `ModeConfig` so that callers drop it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedMode {
    /// The `name` value as written, or `None` when it was missing.
    pub name: Option<String>,
    pub hidden_facilities: BTreeSet<String>,
}

impl ModeConfig {
    pub fn new(mode: GameMode, hidden_facilities: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            mode,
            hidden_facilities: hidden_facilities.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a `GAMEMODE` node.
    ///
    /// `HIDEFACILITY` children without a non-empty `name` contribute nothing.
    pub fn from_node(node: &RawNode) -> std::result::Result<Self, UnresolvedMode> {
        let hidden_facilities: BTreeSet<String> = node
            .nodes_named(HIDE_FACILITY_NODE)
            .filter_map(|facility| match facility.value(NAME_KEY) {
                Some(name) if !name.is_empty() => Some(name.to_string()),
                _ => {
                    debug!("skipping {HIDE_FACILITY_NODE} without a name");
                    None
                }
            })
            .collect();

        let name = node.value(NAME_KEY);
        match name.and_then(resolve_mode) {
            Some(mode) => Ok(Self {
                mode,
                hidden_facilities,
            }),
            None => Err(UnresolvedMode {
                name: name.map(str::to_string),
                hidden_facilities,
            }),
        }
    }
}

/// Merged per-mode configuration for the whole process.
///
/// Modes without an entry hide nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigModel {
    modes: BTreeMap<GameMode, ModeConfig>,
}

impl ConfigModel {
    /// Build from every `BUILDINGBLOCKERCONFIG` node the source provides.
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self> {
        Self::from_forest(&source.configs(CONFIG_NODE))
    }

    /// Build from a forest of top-level nodes.
    ///
    /// Top-level nodes of other kinds are ignored, as are `GAMEMODE`
    /// sections naming an unknown mode. Sections for the same mode are
    /// merged into the first one seen.
    pub fn from_forest(roots: &[RawNode]) -> Result<Self> {
        let mut groups: BTreeMap<GameMode, Vec<ModeConfig>> = BTreeMap::new();
        let mut sections = 0usize;

        for section in roots
            .iter()
            .filter(|root| root.name == CONFIG_NODE)
            .flat_map(|root| root.nodes_named(GAME_MODE_NODE))
        {
            sections += 1;
            match ModeConfig::from_node(section) {
                Ok(cfg) => groups.entry(cfg.mode).or_default().push(cfg),
                Err(unresolved) => debug!(
                    name = ?unresolved.name,
                    facilities = unresolved.hidden_facilities.len(),
                    "skipping {GAME_MODE_NODE} with unrecognised mode"
                ),
            }
        }

        let mut modes = BTreeMap::new();
        for (mode, group) in groups {
            let mut group = group.into_iter();
            if let Some(base) = group.next() {
                modes.insert(mode, base.merge(group)?);
            }
        }

        let model = Self { modes };
        info!(
            sections,
            modes = model.len(),
            "loaded {CONFIG_NODE} configuration"
        );
        Ok(model)
    }

    /// Facilities to hide in `mode`; empty when the mode is not configured.
    pub fn hidden_facilities(&self, mode: GameMode) -> &BTreeSet<String> {
        self.modes
            .get(&mode)
            .map(|cfg| &cfg.hidden_facilities)
            .unwrap_or(&NO_FACILITIES)
    }

    pub fn get(&self, mode: GameMode) -> Option<&ModeConfig> {
        self.modes.get(&mode)
    }

    /// Configured modes in enum order.
    pub fn modes(&self) -> impl Iterator<Item = &ModeConfig> {
        self.modes.values()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
