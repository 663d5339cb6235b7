//! Task Table View
//!
//! Flat task list with status chips and per-row entry points into the
//! work-log modals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{ErrorModal, ErrorState, StatusModal, WorkInfoModal};
use crate::context::AppContext;
use crate::models::{Task, TaskDetail, TaskStatus};

/// Task list view
#[component]
pub fn TaskTable() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = expect_context::<AppContext>();
    let error = ErrorState::new();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (work_task, set_work_task) = signal::<Option<u64>>(None);
    let (work_info, set_work_info) = signal::<Option<TaskDetail>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api.fetch_tasks().await {
                Ok(list) => set_tasks.set(list),
                Err(e) => error.show(&e, "업무 목록을 불러오는데 실패했습니다."),
            }
        });
    });

    let open_work_info = move |id: u64| {
        spawn_local(async move {
            match api.fetch_task_info(id).await {
                Ok(detail) => set_work_info.set(Some(detail)),
                Err(e) => error.show(&e, "업무 정보를 가져오는데 실패했습니다."),
            }
        });
    };

    view! {
        <div class="task-table-view">
            <table class="task-table">
                <thead>
                    <tr>
                        <th>"업무명"</th>
                        <th>"프로젝트"</th>
                        <th>"기간"</th>
                        <th>"상태"</th>
                        <th>"공수"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || tasks.get()
                        key=|task| task.id_num
                        children=move |task| {
                            let id = task.id_num;
                            let status = task.status.unwrap_or(TaskStatus::Todo);
                            view! {
                                <tr>
                                    <td class="task-name-cell">{task.task_name}</td>
                                    <td>{task.project_name}</td>
                                    <td class="task-dates-cell">
                                        {task.start_date} " ~ " {task.end_date}
                                    </td>
                                    <td>
                                        <span class=status.css_class()>{status.label()}</span>
                                    </td>
                                    <td class="task-actions-cell">
                                        <button
                                            class="table-btn"
                                            on:click=move |_| set_work_task.set(Some(id))
                                        >
                                            "공수등록"
                                        </button>
                                        <button
                                            class="table-btn"
                                            on:click=move |_| open_work_info(id)
                                        >
                                            "조회"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || tasks.get().is_empty()>
                <div class="task-table-empty">"업무가 없습니다."</div>
            </Show>

            <p class="task-count">{move || format!("{}개 업무", tasks.get().len())}</p>

            <StatusModal task_id=work_task set_task_id=set_work_task />
            <WorkInfoModal info=work_info set_info=set_work_info />
            <ErrorModal state=error />
        </div>
    }
}
