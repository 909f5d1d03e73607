//! Snapshot storage for the application state (`.selection/state.json`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::state::ApplicationState;

/// Load a state snapshot from disk.
pub fn load_state(path: &Path) -> Result<ApplicationState> {
    debug!(path = %path.display(), "loading state snapshot");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read snapshot {}", path.display()))?;
    let state: ApplicationState = serde_json::from_str(&contents)
        .with_context(|| format!("parse snapshot {}", path.display()))?;
    debug!(
        tabs = state.plots.len(),
        active = state.active_plot_selection,
        "state snapshot loaded"
    );
    Ok(state)
}

/// Atomically write a state snapshot to disk (temp file + rename).
pub fn write_state(path: &Path, state: &ApplicationState) -> Result<()> {
    debug!(path = %path.display(), tabs = state.plots.len(), "writing state snapshot");
    let mut buf = serde_json::to_string_pretty(state)?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("snapshot path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp snapshot {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace snapshot {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{state_with_tabs, tab};

    /// Verifies write → read preserves all fields.
    #[test]
    fn snapshot_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");

        let mut state = state_with_tabs(vec![tab(&["P1", "P2"], &["P2"])], 0);
        state.loading_flags.insert("search".to_string(), true);

        write_state(&path, &state).expect("write");
        let loaded = load_state(&path).expect("load");
        assert_eq!(loaded, state);
    }

    /// Ensures the default state serializes to a known, stable JSON format.
    ///
    /// Guards against accidental changes to the default style pair or field
    /// ordering.
    #[test]
    fn default_snapshot_is_deterministic() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");

        write_state(&path, &ApplicationState::default()).expect("write");
        let contents = fs::read_to_string(&path).expect("read");
        let expected = r##"{
  "loading": false,
  "loadingFlags": {},
  "activePlotSelection": 0,
  "plots": [],
  "styles": {
    "selected": {
      "fillColor": "#81BEF7",
      "opacity": 0.6,
      "fillOpacity": 0.6,
      "color": "#111111",
      "weight": 4.0
    },
    "unselected": {
      "fillColor": "#222111",
      "opacity": 0.4,
      "fillOpacity": 0.4,
      "color": "#111222",
      "weight": 2.0
    }
  }
}
"##;
        assert_eq!(contents, expected);
    }

    #[test]
    fn load_errors_on_missing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_state(&temp.path().join("absent.json")).expect_err("load should fail");
        assert!(err.to_string().contains("read snapshot"));
    }
}
