// src/config/alias.rs

//! Human-friendly names for game modes.
//!
//! Config authors write `Science`, the host calls it `SCIENCE_SANDBOX`.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::mode::GameMode;

static BUILTIN: LazyLock<AliasTable> =
    LazyLock::new(|| AliasTable::new([("SCIENCE", GameMode::ScienceSandbox.as_str())]));

/// Alias → canonical mode name, compared ASCII-case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    // Keys are stored folded; every access goes through `fold`.
    entries: HashMap<String, String>,
}

impl AliasTable {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(alias, target)| (fold(alias.as_ref()), target.into()))
                .collect(),
        }
    }

    /// The process-wide table used when parsing config.
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN
    }

    /// Canonical name for `raw`, or `raw` itself when it is not an alias.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.entries
            .get(&fold(raw))
            .map(String::as_str)
            .unwrap_or(raw)
    }
}

// Surrounding whitespace is ignored, matching the mode parse that follows.
fn fold(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

/// Alias substitution followed by a case-insensitive mode parse.
///
/// `None` means the name belongs to no known mode.
pub fn resolve_mode(raw: &str) -> Option<GameMode> {
    AliasTable::builtin().resolve(raw).parse().ok()
}
