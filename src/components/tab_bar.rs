//! Tab Bar Component
//!
//! Strip of open feature views above the main content area. Clicking a tab
//! refocuses it; the close button removes it without touching the others.

use leptos::prelude::*;

use crate::store::{store_close_tab, store_open_tab, use_app_store, AppStateStoreFields};

/// Open-tab strip
#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="tab-bar">
            <For
                each=move || store.tabs().get()
                key=|tab| tab.path.clone()
                children=move |tab| {
                    let name = tab.name.clone();
                    let path = tab.path.clone();
                    let activate_name = tab.name.clone();
                    let activate_path = tab.path.clone();
                    let close_path = tab.path.clone();
                    // Read activity from the store, not the row snapshot
                    let is_active = move || {
                        store
                            .tabs()
                            .with(|tabs| tabs.iter().any(|t| t.path == path && t.active))
                    };

                    view! {
                        <div
                            class=move || if is_active() { "tab active" } else { "tab" }
                            on:click=move |_| store_open_tab(&store, &activate_name, &activate_path)
                        >
                            <span class="tab-name">{name}</span>
                            <button
                                class="tab-close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    store_close_tab(&store, &close_path);
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
