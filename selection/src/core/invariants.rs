//! Semantic invariants not expressible via JSON Schema.
//!
//! Diagnostic only: the reducer itself never validates payloads, so a
//! collaborator feeding malformed plots can produce states these checks
//! report on.

use std::collections::HashSet;

use crate::core::state::ApplicationState;

/// Check semantic invariants of a state snapshot:
/// - No duplicate `parcelle` within a tab's `data`
/// - No duplicate ids within a tab's `selected`
/// - Every selected id corresponds to a `data` entry
/// - `activePlotSelection` in range while tabs exist
pub fn validate_invariants(state: &ApplicationState) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, tab) in state.plots.iter().enumerate() {
        let mut seen = HashSet::new();
        for plot in &tab.data {
            if !seen.insert(plot.parcelle.as_str()) {
                errors.push(format!(
                    "plots[{index}]: duplicate parcelle '{}' in data",
                    plot.parcelle
                ));
            }
        }

        let mut selected_seen = HashSet::new();
        for id in &tab.selected {
            if !selected_seen.insert(id.as_str()) {
                errors.push(format!("plots[{index}]: duplicate parcelle '{id}' in selected"));
            }
            if !seen.contains(id.as_str()) {
                errors.push(format!(
                    "plots[{index}]: selected parcelle '{id}' has no data entry"
                ));
            }
        }
    }

    if !state.plots.is_empty() && state.active_plot_selection >= state.plots.len() {
        errors.push(format!(
            "activePlotSelection {} out of range for {} tab(s)",
            state.active_plot_selection,
            state.plots.len()
        ));
    }

    errors
}
