//! Pure state transitions for the selection tool.
//!
//! `reduce` is the single writer of [`ApplicationState`]: given the current
//! state and one action it derives the next state, by value, with no I/O and
//! no mutation visible to the caller. It is invoked serially, once per
//! action, by the holder in [`crate::store`].

use crate::core::action::Action;
use crate::core::state::{ApplicationState, Plot, PlotSelection};

/// Derive the next state from `state` and one `action`.
pub fn reduce(state: ApplicationState, action: Action) -> ApplicationState {
    match action {
        Action::SetConfiguration { configuration } => ApplicationState {
            configuration: Some(configuration),
            ..state
        },
        Action::Loading { name, value } => {
            let mut next = state;
            // The coarse flag always reflects the latest transition, even
            // when named operations overlap.
            next.loading = value;
            if name != "loading" {
                next.loading_flags.insert(name, value);
            }
            next
        }
        Action::ToggleSelectionMode { selection_type } => ApplicationState {
            selection_type,
            ..state
        },
        Action::ToggleSearchMode { search_type } => ApplicationState {
            search_type,
            ..state
        },
        Action::AddPlots { plots } => update_active_tab(state, |mut tab| {
            for plot in plots {
                // Toggle against the pre-upsert data: re-adding a plot that
                // is already on the page flips its selection, a brand-new
                // parcelle leaves `selected` untouched.
                tab = toggle_selection(tab, &plot.parcelle);
                upsert_plot(&mut tab.data, plot);
            }
            tab
        }),
        Action::RemovePlots { parcelles } => update_active_tab(state, |mut tab| {
            tab.data.retain(|plot| !parcelles.contains(&plot.parcelle));
            tab.selected.retain(|id| !parcelles.contains(id));
            tab
        }),
        Action::SelectPlots { plots } => update_active_tab(state, |mut tab| {
            for parcelle in plots.into_iter().map(|plot| plot.parcelle) {
                if !tab.selected.contains(&parcelle) {
                    tab.selected.push(parcelle);
                }
            }
            tab
        }),
        Action::DeselectPlots { plots } => update_active_tab(state, |mut tab| {
            let parcelles: Vec<String> = plots.into_iter().map(|plot| plot.parcelle).collect();
            tab.selected.retain(|id| !parcelles.contains(id));
            tab
        }),
        Action::AddPlotSelectionTab => {
            let mut next = state;
            next.plots.push(PlotSelection::default());
            next
        }
        Action::RemovePlotSelectionTab { active } => {
            let mut next = state;
            let target = active.unwrap_or(next.active_plot_selection);
            if target < next.plots.len() {
                next.plots.remove(target);
            }
            // Always steps back one position (clamped at zero), even when the
            // removed tab is not the active one.
            next.active_plot_selection = next.active_plot_selection.saturating_sub(1);
            next
        }
        Action::TeardownApplication => ApplicationState::default(),
        Action::SetActivePlotSelection { active } => ApplicationState {
            active_plot_selection: active,
            ..state
        },
        Action::SetLayerStyle { style_type, value } => {
            let mut next = state;
            next.styles.insert(style_type, value);
            next
        }
    }
}

/// Flip `parcelle`'s membership in `tab.selected`, if the tab's data holds
/// an entry with that id.
///
/// No-op (and no allocation) when the parcelle is absent from `data`.
pub fn toggle_selection(mut tab: PlotSelection, parcelle: &str) -> PlotSelection {
    if !tab.data.iter().any(|plot| plot.parcelle == parcelle) {
        return tab;
    }
    match tab.selected.iter().position(|id| id == parcelle) {
        Some(index) => {
            tab.selected.remove(index);
        }
        None => tab.selected.push(parcelle.to_string()),
    }
    tab
}

/// Replace the entry with the same parcelle, or append at the end.
fn upsert_plot(data: &mut Vec<Plot>, plot: Plot) {
    match data.iter_mut().find(|entry| entry.parcelle == plot.parcelle) {
        Some(entry) => *entry = plot,
        None => data.push(plot),
    }
}

/// Run `apply` on the active tab (an empty one if absent) and write the
/// result back at the active index, padding with empty tabs when the index
/// points past the end.
fn update_active_tab(
    mut state: ApplicationState,
    apply: impl FnOnce(PlotSelection) -> PlotSelection,
) -> ApplicationState {
    let active = state.active_plot_selection;
    let tab = if active < state.plots.len() {
        std::mem::take(&mut state.plots[active])
    } else {
        PlotSelection::default()
    };
    let tab = apply(tab);
    while state.plots.len() <= active {
        state.plots.push(PlotSelection::default());
    }
    state.plots[active] = tab;
    state
}
