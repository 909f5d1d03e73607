//! Initialization helpers for `.selection/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::state_file::write_state;
use crate::core::state::ApplicationState;

/// JSON Schema for state snapshots, embedded at build time.
pub const STATE_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/application_state/v1.schema.json"
));

/// All canonical paths within `.selection/` for a project root.
#[derive(Debug, Clone)]
pub struct SelectionPaths {
    pub root: PathBuf,
    pub selection_dir: PathBuf,
    pub state_path: PathBuf,
    pub schema_path: PathBuf,
}

impl SelectionPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let selection_dir = root.join(".selection");
        Self {
            root,
            state_path: selection_dir.join("state.json"),
            schema_path: selection_dir.join("schema.json"),
            selection_dir,
        }
    }
}

/// Options for `init_selection`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing files.
    pub force: bool,
}

/// Create `.selection/` scaffolding in `root`: the schema and a snapshot of
/// the fixed startup default state.
///
/// Fails if `.selection/` already exists unless `options.force` is set.
pub fn init_selection(root: &Path, options: &InitOptions) -> Result<SelectionPaths> {
    let paths = SelectionPaths::new(root);
    if paths.selection_dir.exists() && !options.force {
        return Err(anyhow!(
            "selection init: .selection already exists (use --force to overwrite)"
        ));
    }
    if paths.selection_dir.exists() && !paths.selection_dir.is_dir() {
        return Err(anyhow!(
            "selection init: .selection exists but is not a directory"
        ));
    }

    fs::create_dir_all(&paths.selection_dir)
        .with_context(|| format!("create directory {}", paths.selection_dir.display()))?;
    fs::write(&paths.schema_path, STATE_SCHEMA)
        .with_context(|| format!("write {}", paths.schema_path.display()))?;
    write_state(&paths.state_path, &ApplicationState::default())?;

    Ok(paths)
}
