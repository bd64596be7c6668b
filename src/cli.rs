// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `building-blocker`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "building-blocker",
    version,
    about = "Show which space-centre facilities are hidden in each game mode.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory scanned for config files.
    ///
    /// Default: `GameData` in the current working directory.
    #[arg(long, value_name = "DIR", default_value = crate::config::DEFAULT_GAME_DATA)]
    pub game_data: String,

    /// Glob (relative to the game-data directory) selecting config files.
    #[arg(long, value_name = "GLOB", default_value = crate::config::DEFAULT_INCLUDE)]
    pub include: String,

    /// Only report this game mode. Aliases such as `science` are accepted.
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Facility present at the space centre; may be repeated.
    ///
    /// With `--mode`, prints whether each one would be shown or hidden.
    #[arg(long = "facility", value_name = "NAME")]
    pub facilities: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BUILDING_BLOCKER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["building-blocker"]).unwrap();
        assert_eq!(args.game_data, crate::config::DEFAULT_GAME_DATA);
        assert_eq!(args.game_data, "GameData");
        assert_eq!(args.include, "**/*.cfg");
        assert!(args.mode.is_none());
        assert!(args.facilities.is_empty());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn repeated_facilities_and_mode() {
        let args = CliArgs::try_parse_from([
            "building-blocker",
            "--mode",
            "science",
            "--facility",
            "Observatory",
            "--facility",
            "Runway",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.mode.as_deref(), Some("science"));
        assert_eq!(args.facilities, vec!["Observatory", "Runway"]);
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
