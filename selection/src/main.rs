//! CLI driver for the selection state engine.
//!
//! Maintains a state snapshot (`.selection/state.json`) and folds wire
//! action logs through the pure reducer. This binary is a development
//! harness: in production the engine sits inside a host application that
//! dispatches actions directly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use jsonschema::Draft;
use serde_json::Value;

use selection::core::invariants::validate_invariants;
use selection::core::query;
use selection::core::state::ApplicationState;
use selection::exit_codes;
use selection::io::action_log::read_action_log;
use selection::io::init::{InitOptions, SelectionPaths, init_selection};
use selection::io::state_file::{load_state, write_state};
use selection::store::Store;

#[derive(Parser)]
#[command(
    name = "selection",
    version,
    about = "State engine for cadastral plot selection tabs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.selection/` with the default state snapshot and schema.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Check the snapshot against schema and invariants (unique parcelles,
    /// selected ids backed by data, active index in range).
    Validate,
    /// Apply a JSON-lines action log to the snapshot.
    Replay {
        /// Path to the action log, one wire action per line.
        log: PathBuf,
        /// Print the resulting summary without writing the snapshot back.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print tab and selection counts from the snapshot.
    Show,
}

fn main() {
    selection::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = Path::new(".");
    match cli.command {
        Command::Init { force } => {
            init_selection(root, &InitOptions { force })?;
            Ok(())
        }
        Command::Validate => cmd_validate(root),
        Command::Replay { log, dry_run } => cmd_replay(root, &log, dry_run),
        Command::Show => cmd_show(root),
    }
}

fn cmd_validate(root: &Path) -> Result<()> {
    let paths = SelectionPaths::new(root);
    let snapshot_raw = std::fs::read_to_string(&paths.state_path)
        .with_context(|| format!("read {}", paths.state_path.display()))?;
    let schema_raw = std::fs::read_to_string(&paths.schema_path)
        .with_context(|| format!("read {}", paths.schema_path.display()))?;
    validate_snapshot(&snapshot_raw, &schema_raw)?;
    Ok(())
}

fn cmd_replay(root: &Path, log_path: &Path, dry_run: bool) -> Result<()> {
    let paths = SelectionPaths::new(root);
    let state = if paths.state_path.exists() {
        load_state(&paths.state_path)?
    } else {
        ApplicationState::default()
    };

    let log = read_action_log(log_path)?;
    let applied = log.actions.len();

    let mut store = Store::with_state(state);
    for action in log.actions {
        store.dispatch(action);
    }

    let state = store.into_state();
    println!(
        "applied {} action(s), skipped {}: {} tab(s), active {}, {} selected",
        applied,
        log.skipped,
        state.plots.len(),
        state.active_plot_selection,
        query::selected_parcelles(&state).len()
    );

    if !dry_run {
        write_state(&paths.state_path, &state)?;
    }
    Ok(())
}

fn cmd_show(root: &Path) -> Result<()> {
    let paths = SelectionPaths::new(root);
    let state = load_state(&paths.state_path)?;

    if state.plots.is_empty() {
        println!("no tabs");
    }
    for (index, tab) in state.plots.iter().enumerate() {
        let marker = if index == state.active_plot_selection {
            " (active)"
        } else {
            ""
        };
        println!(
            "tab {index}: {} plot(s), {} selected{marker}",
            tab.data.len(),
            tab.selected.len()
        );
    }
    Ok(())
}

/// Parse and validate a snapshot: schema conformance + semantic invariants.
///
/// Returns the parsed [`ApplicationState`] on success, or an error
/// describing violations.
fn validate_snapshot(snapshot_raw: &str, schema_raw: &str) -> Result<ApplicationState> {
    let snapshot_json: Value =
        serde_json::from_str(snapshot_raw).context("parse snapshot json")?;
    let schema_json: Value = serde_json::from_str(schema_raw).context("parse schema json")?;
    validate_schema(&snapshot_json, &schema_json)?;
    let state: ApplicationState =
        serde_json::from_str(snapshot_raw).context("parse snapshot as v1 struct")?;
    let errors = validate_invariants(&state);
    if !errors.is_empty() {
        bail!("invariant violations:\n- {}", errors.join("\n- "));
    }
    Ok(state)
}

/// Validate JSON instance against a JSON Schema (Draft 2020-12).
fn validate_schema(instance: &Value, schema: &Value) -> Result<()> {
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .context("compile json schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection::io::init::STATE_SCHEMA;

    #[test]
    fn parse_init() {
        let cli = Cli::parse_from(["selection", "init"]);
        assert!(matches!(cli.command, Command::Init { force: false }));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["selection", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_replay_dry_run() {
        let cli = Cli::parse_from(["selection", "replay", "actions.jsonl", "--dry-run"]);
        let Command::Replay { log, dry_run } = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(log, PathBuf::from("actions.jsonl"));
        assert!(dry_run);
    }

    #[test]
    fn validate_accepts_serialized_default_state() {
        let raw = serde_json::to_string(&ApplicationState::default()).expect("serialize");
        let state = validate_snapshot(&raw, STATE_SCHEMA).expect("validate");
        assert_eq!(state, ApplicationState::default());
    }

    #[test]
    fn validate_rejects_schema_violations() {
        let raw = r#"{"plots": [{"data": [], "selected": [0]}], "styles": {}}"#;
        let err = validate_snapshot(raw, STATE_SCHEMA).expect_err("validate should fail");
        assert!(err.to_string().contains("schema validation failed"));
    }

    #[test]
    fn validate_rejects_invariant_violations() {
        let raw = r#"{
            "plots": [{"data": [{"parcelle": "P1"}], "selected": ["P1", "P1"]}],
            "styles": {}
        }"#;
        let err = validate_snapshot(raw, STATE_SCHEMA).expect_err("validate should fail");
        assert!(err.to_string().contains("invariant violations"));
        assert!(err.to_string().contains("duplicate parcelle 'P1' in selected"));
    }

    /// End-to-end replay against a temp root: init, fold a log, reload.
    #[test]
    fn replay_applies_log_and_persists_snapshot() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_selection(temp.path(), &InitOptions { force: false }).expect("init");

        let log_path = temp.path().join("actions.jsonl");
        std::fs::write(
            &log_path,
            concat!(
                "{\"type\": \"CADASTRAPP:ADD_PLOT_SELECTION\"}\n",
                "{\"type\": \"CADASTRAPP:ADD_PLOTS\", \"plots\": [{\"parcelle\": \"P1\"}]}\n",
                "{\"type\": \"CADASTRAPP:ADD_PLOTS\", \"plots\": [{\"parcelle\": \"P1\"}]}\n",
            ),
        )
        .expect("write log");

        cmd_replay(temp.path(), &log_path, false).expect("replay");

        let paths = SelectionPaths::new(temp.path());
        let state = load_state(&paths.state_path).expect("load");
        assert_eq!(state.plots.len(), 1);
        assert_eq!(state.plots[0].selected, vec!["P1".to_string()]);
    }
}
