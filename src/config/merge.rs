// src/config/merge.rs

//! Combining several sections for the same mode.
//!
//! Several mods may each ship a `GAMEMODE` section for `Career`; every one of
//! them must take effect, so their facility sets are unioned.

use tracing::trace;

use super::model::ModeConfig;
use crate::errors::{BlockerError, Result};

impl ModeConfig {
    /// Union every `other`'s hidden facilities into `self`.
    ///
    /// All of `others` must have the same mode as `self`; a mismatch is an
    /// integrity error and nothing is returned.
    pub fn merge(mut self, others: impl IntoIterator<Item = ModeConfig>) -> Result<ModeConfig> {
        for other in others {
            if other.mode != self.mode {
                return Err(BlockerError::IncompatibleMerge {
                    base: self.mode,
                    other: other.mode,
                });
            }
            trace!(
                mode = %self.mode,
                added = other.hidden_facilities.len(),
                "merging section"
            );
            self.hidden_facilities.extend(other.hidden_facilities);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameMode;

    #[test]
    fn merge_unions_sets() {
        let base = ModeConfig::new(GameMode::Career, ["A", "B"]);
        let merged = base
            .merge([
                ModeConfig::new(GameMode::Career, ["B", "C"]),
                ModeConfig::new(GameMode::Career, ["D"]),
            ])
            .unwrap();
        assert_eq!(merged, ModeConfig::new(GameMode::Career, ["A", "B", "C", "D"]));
    }

    #[test]
    fn merge_with_nothing_returns_base() {
        let base = ModeConfig::new(GameMode::Sandbox, ["A"]);
        let merged = base.clone().merge(Vec::new()).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn merge_rejects_different_modes() {
        let base = ModeConfig::new(GameMode::Sandbox, ["A"]);
        let err = base
            .merge([
                ModeConfig::new(GameMode::Sandbox, ["B"]),
                ModeConfig::new(GameMode::Career, ["C"]),
            ])
            .unwrap_err();
        match err {
            BlockerError::IncompatibleMerge { base, other } => {
                assert_eq!(base, GameMode::Sandbox);
                assert_eq!(other, GameMode::Career);
            }
            e => panic!("expected IncompatibleMerge, got {e:?}"),
        }
    }

    #[test]
    fn incompatible_merge_message_names_both_modes() {
        let err = ModeConfig::new(GameMode::Career, ["A"])
            .merge([ModeConfig::new(GameMode::Mission, ["A"])])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Incompatible merge: can't merge MISSION into CAREER"
        );
    }
}
