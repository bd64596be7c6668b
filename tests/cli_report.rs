mod common;
use crate::common::init_tracing;

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use building_blocker::cli::CliArgs;
use building_blocker::errors::BlockerError;
use building_blocker::run_with;

fn game_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    let write = |rel: &str, contents: &str| {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    };

    write(
        "ModA/blocker.cfg",
        "BUILDINGBLOCKERCONFIG\n{\n  GAMEMODE\n  {\n    name = Science\n    HIDEFACILITY { name = Administration }\n    HIDEFACILITY { name = MissionControl }\n  }\n}\n",
    );
    write(
        "ModB/blocker.cfg",
        "BUILDINGBLOCKERCONFIG\n{\n  GAMEMODE\n  {\n    name = CAREER\n    HIDEFACILITY { name = Observatory }\n  }\n}\n",
    );
    dir
}

fn report(root: &Path, extra: &[&str]) -> anyhow::Result<String> {
    let root = root.to_string_lossy().to_string();
    let mut argv = vec!["building-blocker", "--game-data", root.as_str()];
    argv.extend_from_slice(extra);
    let args = CliArgs::try_parse_from(argv)?;

    let mut out = Vec::new();
    run_with(args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn without_mode_every_configured_mode_is_listed() {
    init_tracing();
    let dir = game_data();

    let text = report(dir.path(), &[]).unwrap();
    assert_eq!(
        text,
        "CAREER: Observatory\nSCIENCE_SANDBOX: Administration, MissionControl\n"
    );
}

#[test]
fn empty_game_data_says_so() {
    let dir = TempDir::new().unwrap();
    let text = report(dir.path(), &[]).unwrap();
    assert_eq!(text, "no game modes configured\n");
}

#[test]
fn mode_alias_selects_science_sandbox() {
    init_tracing();
    let dir = game_data();

    let alias = report(dir.path(), &["--mode", "science"]).unwrap();
    let canonical = report(dir.path(), &["--mode", "SCIENCE_SANDBOX"]).unwrap();
    assert_eq!(alias, "Administration\nMissionControl\n");
    assert_eq!(alias, canonical);
}

#[test]
fn unconfigured_mode_prints_nothing() {
    let dir = game_data();
    let text = report(dir.path(), &["--mode", "sandbox"]).unwrap();
    assert_eq!(text, "");
}

#[test]
fn unknown_mode_is_config_error() {
    let dir = game_data();

    let err = report(dir.path(), &["--mode", "Expedition"]).unwrap_err();
    match err.downcast_ref::<BlockerError>() {
        Some(BlockerError::Config(msg)) => assert!(msg.contains("Expedition")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

#[test]
fn facilities_print_show_and_hide_lines() {
    init_tracing();
    let dir = game_data();

    let text = report(
        dir.path(),
        &[
            "--mode",
            "career",
            "--facility",
            "Runway",
            "--facility",
            "Observatory",
        ],
    )
    .unwrap();
    assert_eq!(text, "show Runway\nhide Observatory\n");
}
