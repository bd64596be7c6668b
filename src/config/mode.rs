// src/config/mode.rs

use std::fmt;
use std::str::FromStr;

/// Game-session modes known to the host.
///
/// The set is fixed by the host; config sections naming anything else are
/// dropped rather than reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameMode {
    Sandbox,
    Career,
    Scenario,
    ScenarioNonResumable,
    ScienceSandbox,
    Mission,
    MissionBuilder,
}

impl GameMode {
    /// Every mode, in discriminant order.
    pub const ALL: [GameMode; 7] = [
        GameMode::Sandbox,
        GameMode::Career,
        GameMode::Scenario,
        GameMode::ScenarioNonResumable,
        GameMode::ScienceSandbox,
        GameMode::Mission,
        GameMode::MissionBuilder,
    ];

    /// Canonical upper-case name as written by the host.
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Sandbox => "SANDBOX",
            GameMode::Career => "CAREER",
            GameMode::Scenario => "SCENARIO",
            GameMode::ScenarioNonResumable => "SCENARIO_NON_RESUMABLE",
            GameMode::ScienceSandbox => "SCIENCE_SANDBOX",
            GameMode::Mission => "MISSION",
            GameMode::MissionBuilder => "MISSION_BUILDER",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive match against the canonical names.
///
/// The numeric position of a mode (`"1"` for `CAREER`) is accepted too, since
/// the host writes modes that way in some saves.
impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Ok(index) = name.parse::<usize>() {
            return GameMode::ALL
                .get(index)
                .copied()
                .ok_or_else(|| format!("invalid game mode index: {index}"));
        }

        GameMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("unknown game mode: {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("career".parse::<GameMode>(), Ok(GameMode::Career));
        assert_eq!("Science_Sandbox".parse::<GameMode>(), Ok(GameMode::ScienceSandbox));
        assert_eq!(" MISSION_BUILDER ".parse::<GameMode>(), Ok(GameMode::MissionBuilder));
    }

    #[test]
    fn parses_host_scenario_names() {
        assert_eq!("SCENARIO".parse::<GameMode>(), Ok(GameMode::Scenario));
        assert_eq!(
            "Scenario_Non_Resumable".parse::<GameMode>(),
            Ok(GameMode::ScenarioNonResumable)
        );
        assert!("SCENARIOS".parse::<GameMode>().is_err());
    }

    #[test]
    fn parses_numeric_index() {
        assert_eq!("0".parse::<GameMode>(), Ok(GameMode::Sandbox));
        assert_eq!("3".parse::<GameMode>(), Ok(GameMode::ScenarioNonResumable));
        assert_eq!("4".parse::<GameMode>(), Ok(GameMode::ScienceSandbox));
        assert!("7".parse::<GameMode>().is_err());
    }

    #[test]
    fn rejects_unknown_and_partial_names() {
        assert!("science".parse::<GameMode>().is_err());
        assert!("".parse::<GameMode>().is_err());
        assert!("CAREERS".parse::<GameMode>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in GameMode::ALL {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }
    }
}
