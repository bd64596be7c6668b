// src/config/loader.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{Glob, GlobMatcher};
use tracing::{debug, info, warn};

use crate::config::model::ConfigModel;
use crate::errors::{BlockerError, Result};
use crate::fs::FileSystem;
use crate::node::{Forest, parse_nodes};

/// Directory scanned when none is given.
pub const DEFAULT_GAME_DATA: &str = "GameData";

/// Files picked up under the game-data directory when no pattern is given.
pub const DEFAULT_INCLUDE: &str = "**/*.cfg";

/// Read every config file under `root` into one forest.
///
/// Files are visited in path order, which fixes the order in which sections
/// for the same mode are merged. A file that cannot be read or parsed is
/// logged and skipped; the rest of the tree still loads. A missing `root`
/// yields an empty forest.
pub fn load_forest(fs: &dyn FileSystem, root: &Path, include: &str) -> Result<Forest> {
    let matcher = build_matcher(include)?;

    if !fs.is_dir(root) {
        warn!(root = ?root, "config directory not found; no facilities will be hidden");
        return Ok(Forest::empty());
    }

    let mut forest = Forest::empty();
    for path in collect_config_files(fs, root, &matcher)? {
        let contents = match fs.read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(file = ?path, error = %err, "skipping unreadable config file");
                continue;
            }
        };

        match parse_nodes(&contents) {
            Ok(nodes) => {
                debug!(file = ?path, nodes = nodes.len(), "parsed config file");
                forest.extend(nodes);
            }
            Err(err) => {
                warn!(file = ?path, line = err.line(), error = %err, "skipping malformed config file");
            }
        }
    }

    info!(root = ?root, nodes = forest.len(), "loaded config tree");
    Ok(forest)
}

/// Load the tree under `root` and build the model from it.
///
/// This is the recommended entry point for the rest of the application.
pub fn load_model(fs: &dyn FileSystem, root: &Path, include: &str) -> Result<ConfigModel> {
    let forest = load_forest(fs, root, include)?;
    ConfigModel::from_source(&forest)
}

fn build_matcher(pattern: &str) -> Result<GlobMatcher> {
    let glob = Glob::new(pattern)
        .map_err(|e| BlockerError::Config(format!("invalid include pattern '{pattern}': {e}")))?;
    Ok(glob.compile_matcher())
}

/// All files under `root` whose `/`-separated relative path matches, sorted.
fn collect_config_files(
    fs: &dyn FileSystem,
    root: &Path,
    matcher: &GlobMatcher,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = fs
            .read_dir(&dir)
            .with_context(|| format!("listing config directory {:?}", dir))?;
        for path in entries {
            if fs.is_dir(&path) {
                stack.push(path);
            } else if fs.is_file(&path) {
                if let Ok(rel) = path.strip_prefix(root) {
                    let rel_str = rel.to_string_lossy().replace('\\', "/");
                    if matcher.is_match(&rel_str) {
                        files.push(path);
                    }
                }
            }
        }
    }

    files.sort();
    Ok(files)
}
