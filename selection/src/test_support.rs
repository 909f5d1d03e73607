//! Builders shared by unit and integration tests.

use serde_json::Value;

use crate::core::state::{ApplicationState, JsonMap, Plot, PlotSelection};

/// Plot with just an identity.
pub fn plot(parcelle: &str) -> Plot {
    Plot {
        parcelle: parcelle.to_string(),
        extra: JsonMap::new(),
    }
}

/// Plot with one extra descriptive field.
pub fn plot_with(parcelle: &str, field: &str, value: Value) -> Plot {
    let mut extra = JsonMap::new();
    extra.insert(field.to_string(), value);
    Plot {
        parcelle: parcelle.to_string(),
        extra,
    }
}

/// Tab holding the given parcelles, with the given subset selected.
pub fn tab(parcelles: &[&str], selected: &[&str]) -> PlotSelection {
    PlotSelection {
        data: parcelles.iter().map(|id| plot(id)).collect(),
        selected: selected.iter().map(|id| (*id).to_string()).collect(),
    }
}

/// Default state carrying the given tabs and active index.
pub fn state_with_tabs(tabs: Vec<PlotSelection>, active: usize) -> ApplicationState {
    ApplicationState {
        plots: tabs,
        active_plot_selection: active,
        ..ApplicationState::default()
    }
}
