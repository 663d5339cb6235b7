use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{KanbanBoard, Sidebar, TabBar, TaskTable};
use crate::context::AppContext;
use crate::store::{self, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let app_store = Store::new(AppState::default());
    provide_context(app_store);
    provide_context(ApiClient::new());
    provide_context(AppContext::new());

    let active_path = Memo::new(move |_| {
        app_store
            .tabs()
            .with(|tabs| store::active_tab(tabs).map(|tab| tab.path.clone()))
    });

    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-main">
                <TabBar />
                <div class="app-content">
                    {move || match active_path.get().as_deref() {
                        Some("kanban") => view! { <KanbanBoard /> }.into_any(),
                        Some("tasklist") => view! { <TaskTable /> }.into_any(),
                        Some(_) => view! {
                            <div class="placeholder-view">"준비 중인 화면입니다."</div>
                        }
                        .into_any(),
                        None => view! {
                            <div class="welcome-view">
                                <h2>"Coint Company MES System"</h2>
                                <p>"왼쪽 메뉴에서 화면을 선택해주세요."</p>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}
