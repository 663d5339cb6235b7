//! Sidebar Navigation
//!
//! Fixed category tree with per-category expand state. Leaf clicks request a
//! tab via the app store; activation is idempotent there, not here.

use leptos::prelude::*;

use crate::store::{store_open_tab, use_app_store};

/// One sidebar category: a title, an icon, and positionally correlated leaf
/// labels and paths (`items.len() == links.len()`).
pub struct SidebarCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
    pub links: &'static [&'static str],
}

// Hard-coded for now, like the menu this replaces; per-auth menus would come
// from the backend.
pub const SIDEBAR_CATEGORIES: &[SidebarCategory] = &[
    SidebarCategory {
        title: "차트샘플",
        icon: "📊",
        items: &["StackedBar Chart", "Pie Chart", "Scatter Chart", "Tree Chart"],
        links: &["stackedbarchart", "piechart", "threedimscatterchart", "treemapchart"],
    },
    SidebarCategory {
        title: "컴포넌트관리",
        icon: "🗂",
        items: &["Kanban", "Gantt", "Document Editor", "Calendar", "Task List"],
        links: &["kanban", "ganttchart", "documenteditor", "calendar", "tasklist"],
    },
    SidebarCategory {
        title: "사용자관리",
        icon: "👤",
        items: &["Menu1", "Menu2", "Menu3", "Menu4"],
        links: &["menu1", "menu2", "menu3", "menu4"],
    },
];

/// One collapsible category block
#[component]
fn SidebarCategoryView(category: &'static SidebarCategory) -> impl IntoView {
    let store = use_app_store();
    // Each category toggles independently (not a one-open accordion)
    let (open, set_open) = signal(false);

    view! {
        <div class="sidebar-category">
            <div
                class=move || if open.get() { "sidebar-category-header open" } else { "sidebar-category-header" }
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <span class="sidebar-category-icon">{category.icon}</span>
                <span class="sidebar-category-title">{category.title}</span>
                <span class="sidebar-category-toggle">
                    {move || if open.get() { "▲" } else { "▼" }}
                </span>
            </div>
            <Show when=move || open.get()>
                <ul class="sidebar-leaf-list">
                    {category
                        .items
                        .iter()
                        .zip(category.links.iter())
                        .map(|(item, link)| {
                            view! {
                                <li
                                    class="sidebar-leaf"
                                    on:click=move |_| store_open_tab(&store, item, link)
                                >
                                    {*item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

/// Sidebar navigation column
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <span class="sidebar-logo">"C"</span>
                <span class="sidebar-brand">"Coint Company" <br/> "MES System"</span>
            </div>
            {SIDEBAR_CATEGORIES
                .iter()
                .map(|category| view! { <SidebarCategoryView category=category /> })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_matching_labels_and_paths() {
        for category in SIDEBAR_CATEGORIES {
            assert_eq!(
                category.items.len(),
                category.links.len(),
                "category {} has mismatched items/links",
                category.title
            );
        }
    }

    #[test]
    fn leaf_paths_are_unique_across_categories() {
        let mut seen = std::collections::HashSet::new();
        for category in SIDEBAR_CATEGORIES {
            for link in category.links {
                assert!(seen.insert(*link), "duplicate path {link}");
            }
        }
    }
}
