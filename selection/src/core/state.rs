//! Application state tree for the cadastral plot selection tool.
//!
//! The whole tree is a plain value: collaborators read it, only the reducer
//! produces new versions of it. Serialization is deterministic (maps are
//! `BTreeMap`) so snapshots are stable across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque JSON object payload (server configuration, extra plot fields, ...).
pub type JsonMap = serde_json::Map<String, Value>;

/// Geometry mode of the map selection tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionTool {
    Point,
    LineString,
    Polygon,
}

/// Active search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchTool {
    Plot,
    Owner,
}

/// One cadastral parcel record.
///
/// `parcelle` is the identity; every other field is collaborator-supplied
/// and carried opaquely in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub parcelle: String,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// One selection tab: discovered plots plus which of them are selected.
///
/// `data` is unique by `parcelle` and keeps discovery order; `selected`
/// holds parcelle ids without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotSelection {
    #[serde(default)]
    pub data: Vec<Plot>,
    #[serde(default)]
    pub selected: Vec<String>,
}

/// Rendering style for one layer role.
///
/// The engine stores and replaces these values, it never interprets them.
/// Known fields exist so the default style pair can be spelled out; anything
/// else rides along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    /// Stroke color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Root state of the selection tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    /// Coarse loading flag, last write wins across overlapping operations.
    #[serde(default)]
    pub loading: bool,
    /// Per-operation loading flags, keyed by operation name.
    #[serde(default)]
    pub loading_flags: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<SelectionTool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchTool>,
    /// Index of the tab most mutations target. Not bounds-checked here.
    #[serde(default)]
    pub active_plot_selection: usize,
    #[serde(default)]
    pub plots: Vec<PlotSelection>,
    /// Server-provided settings, replaced wholesale, never merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<JsonMap>,
    #[serde(default)]
    pub styles: BTreeMap<String, LayerStyle>,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            loading: false,
            loading_flags: BTreeMap::new(),
            selection_type: None,
            search_type: None,
            active_plot_selection: 0,
            plots: Vec::new(),
            configuration: None,
            styles: default_styles(),
        }
    }
}

fn default_styles() -> BTreeMap<String, LayerStyle> {
    BTreeMap::from([
        (
            "selected".to_string(),
            LayerStyle {
                fill_color: Some("#81BEF7".to_string()),
                opacity: Some(0.6),
                fill_opacity: Some(0.6),
                color: Some("#111111".to_string()),
                weight: Some(4.0),
                extra: JsonMap::new(),
            },
        ),
        (
            "unselected".to_string(),
            LayerStyle {
                fill_color: Some("#222111".to_string()),
                opacity: Some(0.4),
                fill_opacity: Some(0.4),
                color: Some("#111222".to_string()),
                weight: Some(2.0),
                extra: JsonMap::new(),
            },
        ),
    ])
}
