//! Read-only views over the state tree.
//!
//! Rendering and UI collaborators consume the state through these helpers;
//! nothing here mutates anything.

use crate::core::state::{ApplicationState, Plot, PlotSelection};

const NO_SELECTION: &[String] = &[];

/// The tab most mutations target, if it exists.
pub fn active_tab(state: &ApplicationState) -> Option<&PlotSelection> {
    state.plots.get(state.active_plot_selection)
}

/// Parcelle ids currently selected in the active tab.
pub fn selected_parcelles(state: &ApplicationState) -> &[String] {
    active_tab(state).map_or(NO_SELECTION, |tab| tab.selected.as_slice())
}

/// Plot records of the active tab whose parcelle is selected, in data order.
pub fn selected_plots(state: &ApplicationState) -> Vec<&Plot> {
    active_tab(state)
        .map(|tab| {
            tab.data
                .iter()
                .filter(|plot| tab.selected.contains(&plot.parcelle))
                .collect()
        })
        .unwrap_or_default()
}

/// Loading flag for a named operation; the literal name "loading" reads the
/// coarse flag.
pub fn is_loading(state: &ApplicationState, name: &str) -> bool {
    if name == "loading" {
        return state.loading;
    }
    state.loading_flags.get(name).copied().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{state_with_tabs, tab};

    #[test]
    fn active_tab_respects_the_index() {
        let state = state_with_tabs(vec![tab(&["a"], &[]), tab(&["b"], &["b"])], 1);
        assert_eq!(active_tab(&state).expect("tab").data[0].parcelle, "b");
        assert_eq!(selected_parcelles(&state), &["b".to_string()]);
    }

    #[test]
    fn queries_tolerate_a_missing_active_tab() {
        let state = ApplicationState::default();
        assert!(active_tab(&state).is_none());
        assert!(selected_parcelles(&state).is_empty());
        assert!(selected_plots(&state).is_empty());
    }

    /// Selected plots come back in data order, not selection order.
    #[test]
    fn selected_plots_follow_data_order() {
        let state = state_with_tabs(vec![tab(&["P1", "P2", "P3"], &["P3", "P1"])], 0);
        let ids: Vec<&str> = selected_plots(&state)
            .iter()
            .map(|plot| plot.parcelle.as_str())
            .collect();
        assert_eq!(ids, vec!["P1", "P3"]);
    }

    #[test]
    fn is_loading_reads_named_and_coarse_flags() {
        let state = ApplicationState {
            loading: true,
            loading_flags: [("search".to_string(), false)].into_iter().collect(),
            ..ApplicationState::default()
        };
        assert!(is_loading(&state, "loading"));
        assert!(!is_loading(&state, "search"));
        assert!(!is_loading(&state, "unknown"));
    }
}
