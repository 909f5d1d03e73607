//! JSON-lines action log reader.
//!
//! One wire action per line, in dispatch order. Unknown action types are
//! skipped (the engine ignores unknown intents); malformed payloads of a
//! known type are errors.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

use crate::core::action::{Action, decode_action};

/// Decoded action log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionLog {
    /// Recognized actions, in file order.
    pub actions: Vec<Action>,
    /// Count of lines carrying an unrecognized action type.
    pub skipped: usize,
}

/// Read and decode an action log. Blank lines are ignored.
pub fn read_action_log(path: &Path) -> Result<ActionLog> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read action log {}", path.display()))?;

    let mut actions = Vec::new();
    let mut skipped = 0;
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("parse action at line {}", index + 1))?;
        match decode_action(&value)
            .with_context(|| format!("decode action at line {}", index + 1))?
        {
            Some(action) => actions.push(action),
            None => {
                warn!(line = index + 1, "skipping action with unrecognized type");
                skipped += 1;
            }
        }
    }

    Ok(ActionLog { actions, skipped })
}
