//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The open-tab set
//! lives here; tab mutation rules are plain functions over `Vec<Tab>` with
//! thin store wrappers, so components never reach into ambient globals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Tab;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Open navigation tabs, de-duplicated by path; at most one active
    pub tabs: Vec<Tab>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Tab Operations
// ========================

/// Open a tab for `path`, or refocus it if already open. Activation is
/// idempotent; the previously active tab is deactivated but kept open.
pub fn open_or_activate(tabs: &mut Vec<Tab>, name: &str, path: &str) {
    for tab in tabs.iter_mut() {
        tab.active = tab.path == path;
    }
    if !tabs.iter().any(|tab| tab.path == path) {
        tabs.push(Tab {
            name: name.to_string(),
            path: path.to_string(),
            active: true,
        });
    }
}

/// Close the tab for `path`. Closing the active tab hands focus to the last
/// remaining tab, if any.
pub fn close(tabs: &mut Vec<Tab>, path: &str) {
    let was_active = tabs.iter().any(|tab| tab.path == path && tab.active);
    tabs.retain(|tab| tab.path != path);
    if was_active {
        if let Some(last) = tabs.last_mut() {
            last.active = true;
        }
    }
}

/// The currently focused tab.
pub fn active_tab(tabs: &[Tab]) -> Option<&Tab> {
    tabs.iter().find(|tab| tab.active)
}

// ========================
// Store Wrappers
// ========================

pub fn store_open_tab(store: &AppStore, name: &str, path: &str) {
    open_or_activate(&mut store.tabs().write(), name, path);
}

pub fn store_close_tab(store: &AppStore, path: &str) {
    close(&mut store.tabs().write(), path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activating_same_leaf_twice_keeps_one_tab() {
        let mut tabs = Vec::new();
        open_or_activate(&mut tabs, "Kanban", "kanban");
        open_or_activate(&mut tabs, "Kanban", "kanban");

        assert_eq!(tabs.len(), 1);
        assert!(tabs[0].active);
        assert_eq!(tabs[0].path, "kanban");
    }

    #[test]
    fn activating_different_leaf_deactivates_without_closing() {
        let mut tabs = Vec::new();
        open_or_activate(&mut tabs, "Kanban", "kanban");
        open_or_activate(&mut tabs, "Task List", "tasklist");

        assert_eq!(tabs.len(), 2);
        assert!(!tabs[0].active);
        assert!(tabs[1].active);
        assert_eq!(active_tab(&tabs).unwrap().path, "tasklist");
    }

    #[test]
    fn at_most_one_tab_active_after_any_sequence() {
        let mut tabs = Vec::new();
        open_or_activate(&mut tabs, "Kanban", "kanban");
        open_or_activate(&mut tabs, "Gantt", "ganttchart");
        open_or_activate(&mut tabs, "Kanban", "kanban");

        assert_eq!(tabs.iter().filter(|t| t.active).count(), 1);
        assert_eq!(active_tab(&tabs).unwrap().path, "kanban");
    }

    #[test]
    fn closing_active_tab_refocuses_last_remaining() {
        let mut tabs = Vec::new();
        open_or_activate(&mut tabs, "Kanban", "kanban");
        open_or_activate(&mut tabs, "Task List", "tasklist");
        close(&mut tabs, "tasklist");

        assert_eq!(tabs.len(), 1);
        assert_eq!(active_tab(&tabs).unwrap().path, "kanban");
    }

    #[test]
    fn closing_inactive_tab_keeps_focus() {
        let mut tabs = Vec::new();
        open_or_activate(&mut tabs, "Kanban", "kanban");
        open_or_activate(&mut tabs, "Task List", "tasklist");
        close(&mut tabs, "kanban");

        assert_eq!(tabs.len(), 1);
        assert_eq!(active_tab(&tabs).unwrap().path, "tasklist");
    }

    #[test]
    fn closing_last_tab_leaves_none_active() {
        let mut tabs = Vec::new();
        open_or_activate(&mut tabs, "Kanban", "kanban");
        close(&mut tabs, "kanban");

        assert!(tabs.is_empty());
        assert!(active_tab(&tabs).is_none());
    }
}
