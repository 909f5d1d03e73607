//! Intents consumed by the reducer.
//!
//! The action set is closed: a tagged union with exhaustive handling in
//! [`crate::core::reduce`]. Tolerance for unknown intents lives at the
//! decode boundary instead — collaborators dispatch JSON objects carrying
//! the original wire constants in their `type` field, and
//! [`decode_action`] maps unrecognized constants to `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::state::{JsonMap, LayerStyle, Plot, SearchTool, SelectionTool};

/// Wire constants recognized by [`decode_action`].
pub const KNOWN_TYPES: &[&str] = &[
    "CADASTRAPP:SET_CONFIGURATION",
    "CADASTRAPP:LOADING",
    "CADASTRAPP:TOGGLE_SELECTION",
    "CADASTRAPP:TOGGLE_SEARCH",
    "CADASTRAPP:ADD_PLOTS",
    "CADASTRAPP:REMOVE_PLOTS",
    "CADASTRAPP:SELECT_PLOTS",
    "CADASTRAPP:DESELECT_PLOTS",
    "CADASTRAPP:ADD_PLOT_SELECTION",
    "CADASTRAPP:REMOVE_PLOT_SELECTION",
    "CADASTRAPP:TEAR_DOWN",
    "CADASTRAPP:SET_ACTIVE_PLOT_SELECTION",
    "CADASTRAPP:SET_LAYER_STYLE",
];

/// A user intent or resolved async result, consumed one at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Replace the server configuration wholesale. No content validation.
    #[serde(rename = "CADASTRAPP:SET_CONFIGURATION")]
    SetConfiguration { configuration: JsonMap },
    /// Track a named operation's loading flag; the coarse flag always
    /// reflects the latest transition.
    #[serde(rename = "CADASTRAPP:LOADING")]
    Loading { name: String, value: bool },
    /// Set (or clear, with `None`) the selection tool mode. The
    /// click-twice-to-toggle logic belongs to the dispatching layer.
    #[serde(rename = "CADASTRAPP:TOGGLE_SELECTION")]
    ToggleSelectionMode {
        #[serde(default, rename = "selectionType")]
        selection_type: Option<SelectionTool>,
    },
    /// Set (or clear, with `None`) the search tool mode.
    #[serde(rename = "CADASTRAPP:TOGGLE_SEARCH")]
    ToggleSearchMode {
        #[serde(default, rename = "searchType")]
        search_type: Option<SearchTool>,
    },
    /// Upsert plots into the active tab, toggling selection of the ones
    /// already present there.
    #[serde(rename = "CADASTRAPP:ADD_PLOTS")]
    AddPlots { plots: Vec<Plot> },
    /// Drop the listed parcelles from the active tab's data and selection.
    #[serde(rename = "CADASTRAPP:REMOVE_PLOTS")]
    RemovePlots {
        #[serde(default)]
        parcelles: Vec<String>,
    },
    /// Mark the given plots selected in the active tab.
    #[serde(rename = "CADASTRAPP:SELECT_PLOTS")]
    SelectPlots {
        #[serde(default)]
        plots: Vec<Plot>,
    },
    /// Unmark the given plots in the active tab.
    #[serde(rename = "CADASTRAPP:DESELECT_PLOTS")]
    DeselectPlots {
        #[serde(default)]
        plots: Vec<Plot>,
    },
    /// Append one empty tab; the active index is untouched.
    #[serde(rename = "CADASTRAPP:ADD_PLOT_SELECTION")]
    AddPlotSelectionTab,
    /// Remove the tab at `active` (or the currently active one).
    #[serde(rename = "CADASTRAPP:REMOVE_PLOT_SELECTION")]
    RemovePlotSelectionTab {
        #[serde(default)]
        active: Option<usize>,
    },
    /// Reset everything to the startup default.
    #[serde(rename = "CADASTRAPP:TEAR_DOWN")]
    TeardownApplication,
    /// Point the active index at another tab. Not bounds-checked.
    #[serde(rename = "CADASTRAPP:SET_ACTIVE_PLOT_SELECTION")]
    SetActivePlotSelection { active: usize },
    /// Replace one style role wholesale. Roles beyond the default pair are
    /// accepted.
    #[serde(rename = "CADASTRAPP:SET_LAYER_STYLE")]
    SetLayerStyle {
        #[serde(rename = "styleType")]
        style_type: String,
        value: LayerStyle,
    },
}

/// Decode a wire action.
///
/// Returns `Ok(None)` for a missing or unrecognized `type` tag (unknown
/// intents are ignored, the state stays as-is) and an error for a known tag
/// with a malformed payload.
pub fn decode_action(value: &Value) -> Result<Option<Action>, serde_json::Error> {
    match value.get("type").and_then(Value::as_str) {
        Some(tag) if KNOWN_TYPES.contains(&tag) => serde_json::from_value(value.clone()).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_add_plots_keeps_payload_order_and_extra_fields() {
        let raw = json!({
            "type": "CADASTRAPP:ADD_PLOTS",
            "plots": [
                {"parcelle": "P1", "area": 12},
                {"parcelle": "P2", "area": 5}
            ]
        });
        let action = decode_action(&raw).expect("decode").expect("known type");
        let Action::AddPlots { plots } = action else {
            panic!("expected AddPlots");
        };
        assert_eq!(plots[0].parcelle, "P1");
        assert_eq!(plots[1].extra.get("area"), Some(&json!(5)));
    }

    #[test]
    fn decode_remove_tab_defaults_to_current_active() {
        let raw = json!({"type": "CADASTRAPP:REMOVE_PLOT_SELECTION"});
        let action = decode_action(&raw).expect("decode").expect("known type");
        assert_eq!(action, Action::RemovePlotSelectionTab { active: None });
    }

    /// Unknown intents decode to `None` rather than an error.
    #[test]
    fn decode_ignores_unknown_type() {
        let raw = json!({"type": "CADASTRAPP:ZOOM_TO_EXTENT", "extent": [0, 0, 1, 1]});
        assert_eq!(decode_action(&raw).expect("decode"), None);
        let untagged = json!({"plots": []});
        assert_eq!(decode_action(&untagged).expect("decode"), None);
    }

    /// A known tag with a broken payload is an error, not a silent skip.
    #[test]
    fn decode_rejects_malformed_known_payload() {
        let raw = json!({"type": "CADASTRAPP:LOADING", "name": "search", "value": "yes"});
        assert!(decode_action(&raw).is_err());
    }

    #[test]
    fn every_variant_round_trips_through_its_wire_tag() {
        let actions = vec![
            Action::Loading {
                name: "search".to_string(),
                value: true,
            },
            Action::ToggleSelectionMode {
                selection_type: Some(SelectionTool::Polygon),
            },
            Action::AddPlotSelectionTab,
            Action::TeardownApplication,
            Action::SetActivePlotSelection { active: 2 },
        ];
        for action in actions {
            let raw = serde_json::to_value(&action).expect("serialize");
            let tag = raw["type"].as_str().expect("tag");
            assert!(KNOWN_TYPES.contains(&tag), "unlisted tag {tag}");
            let back = decode_action(&raw).expect("decode").expect("known type");
            assert_eq!(back, action);
        }
    }
}
