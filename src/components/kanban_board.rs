//! Task-Status Board
//!
//! Four fixed lanes (TODO/WORKING/WAITING/DONE) over the full task list,
//! optionally restricted to one project via the autocomplete search. Cards
//! move between lanes by mouse drag; a drop stages an optimistic override
//! and persists it with a status update, reverting on failure.

use leptos::prelude::*;
use leptos::task::spawn_local;
use futures::future::{join, join_all};
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_card_mouseenter, make_on_lane_mouseenter,
    make_on_mousedown, make_on_mouseleave, CardKey, DndSignals, DropTarget,
};

use crate::api::ApiClient;
use crate::board::{self, PendingMove, LANES};
use crate::components::{ErrorModal, ErrorState, ProjectSearch, StatusModal};
use crate::context::AppContext;
use crate::models::{Project, Task, TaskGroup, TaskStatus, TaskStatusUpdate};
use crate::richtext;

/// One draggable card
#[component]
fn KanbanCard(
    task: Task,
    key: CardKey,
    dnd: DndSignals,
    set_work_task: WriteSignal<Option<u64>>,
) -> impl IntoView {
    let id = task.id_num;
    let status = task.status.unwrap_or(TaskStatus::Todo);
    let summary = task
        .description
        .as_deref()
        .map(richtext::summary)
        .unwrap_or_default();

    let on_mousedown = make_on_mousedown(dnd, key);
    let on_mouseenter = make_on_card_mouseenter(dnd, key);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_dragging = move || dnd.dragging_read.get() == Some(key);
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Card(k)) if k == key)
    };
    let card_class = move || {
        let mut class = "kanban-card".to_string();
        if is_dragging() {
            class.push_str(" dragging");
        }
        if is_drop_target() {
            class.push_str(" drop-target");
        }
        class
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="card-title-row">
                <span class="card-title">{task.task_name}</span>
                <button
                    class="card-work-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        // Suppress the click that follows a drop
                        if dnd.drag_just_ended_read.get_untracked() {
                            return;
                        }
                        set_work_task.set(Some(id));
                    }
                >
                    "공수"
                </button>
            </div>
            <div class="card-project">{task.project_name}</div>
            <Show when={
                let summary = summary.clone();
                move || !summary.is_empty()
            }>
                <div class="card-description">{summary.clone()}</div>
            </Show>
            <div class="card-dates">{task.start_date} " ~ " {task.end_date}</div>
            <span class=status.css_class()>{status.label()}</span>
        </div>
    }
}

/// Expandable per-project summary cards
#[component]
fn ProjectSummaryList(
    projects: ReadSignal<Vec<Project>>,
    task_groups: ReadSignal<Vec<TaskGroup>>,
    tasks: Memo<Vec<Task>>,
    set_search: WriteSignal<String>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="project-summary-grid">
            <For
                each=move || projects.get()
                key=|project| project.id_num
                children=move |project| {
                    let id = project.id_num;
                    let name = project.project_name.clone();
                    let pick_name = name.clone();
                    let count_name = name.clone();
                    let counts = move || board::project_lane_counts(&tasks.get(), &count_name);
                    let group_count = move || {
                        task_groups
                            .with(|groups| groups.iter().filter(|g| g.projects_id_num == id).count())
                    };

                    view! {
                        <div
                            class="project-summary-card"
                            on:click=move |_| {
                                set_search.set(pick_name.clone());
                                set_open.set(false);
                            }
                        >
                            <div class="project-summary-name">{name}</div>
                            <div class="project-summary-dates">
                                {project.start_date} " ~ " {project.end_date}
                            </div>
                            <span class="project-status-chip">{project.status}</span>
                            <div class="project-summary-counts">
                                <span>"업무그룹: " {group_count} "개"</span>
                                {LANES
                                    .iter()
                                    .enumerate()
                                    .map(|(idx, lane)| {
                                        let counts = counts.clone();
                                        view! {
                                            <span>
                                                {lane.label()} ": " {move || counts()[idx]} "개"
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Task-status board view
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = expect_context::<AppContext>();
    let error = ErrorState::new();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (task_groups, set_task_groups) = signal(Vec::<TaskGroup>::new());
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (search, set_search) = signal(String::new());
    let (project_list_open, set_project_list_open) = signal(false);
    let (pending_move, set_pending_move) = signal::<Option<PendingMove>>(None);
    let (work_task, set_work_task) = signal::<Option<u64>>(None);

    // Load board data on mount and whenever a save requests a refetch
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            let (projects_result, tasks_result) = join(api.fetch_projects(), api.fetch_tasks()).await;
            let loaded_projects = match projects_result {
                Ok(list) => list,
                Err(e) => {
                    error.show(&e, "프로젝트 목록을 불러오는데 실패했습니다.");
                    return;
                }
            };
            let loaded_tasks = match tasks_result {
                Ok(list) => list,
                Err(e) => {
                    error.show(&e, "업무 목록을 불러오는데 실패했습니다.");
                    return;
                }
            };
            // One request per project; the backend has no batched form
            let group_results =
                join_all(loaded_projects.iter().map(|p| api.fetch_task_groups(p.id_num))).await;
            let mut groups = Vec::new();
            for result in group_results {
                match result {
                    Ok(mut list) => groups.append(&mut list),
                    Err(e) => {
                        error.show(&e, "업무그룹 목록을 불러오는데 실패했습니다.");
                        return;
                    }
                }
            }
            log::info!(
                "board loaded: {} projects, {} tasks, {} groups",
                loaded_projects.len(),
                loaded_tasks.len(),
                groups.len()
            );
            set_projects.set(loaded_projects);
            set_tasks.set(loaded_tasks);
            set_task_groups.set(groups);
        });
    });

    // View projection: fetched tasks plus the staged move
    let projected = Memo::new(move |_| board::apply_override(&tasks.get(), pending_move.get()));

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |from, target| {
        let current = projected.get_untracked();
        let term = search.get_untracked();
        let Some(mv) = board::resolve_move(&current, &term, from, target.lane()) else {
            return;
        };
        // Optimistic: show the new lane immediately, persist, revert on failure
        set_pending_move.set(Some(mv));
        spawn_local(async move {
            let update = TaskStatusUpdate { id_num: mv.task_id, status: mv.status };
            match api.update_task_status(&update).await {
                Ok(()) => {
                    set_tasks.update(|list| board::commit_move(list, mv));
                    set_pending_move.set(None);
                }
                Err(e) => {
                    set_pending_move.set(None);
                    error.show(&e, "업무 상태 변경에 실패했습니다.");
                }
            }
        });
    });

    let project_names = Memo::new(move |_| {
        projects
            .get()
            .into_iter()
            .map(|project| project.project_name)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="kanban-board">
            <div class="kanban-toolbar">
                <ProjectSearch options=project_names value=search set_value=set_search />
                <button
                    class="project-list-toggle"
                    title=move || if project_list_open.get() { "프로젝트 목록 접기" } else { "프로젝트 목록 보기" }
                    on:click=move |_| set_project_list_open.update(|v| *v = !*v)
                >
                    {move || if project_list_open.get() { "▲" } else { "▼" }}
                </button>
            </div>

            <Show when=move || project_list_open.get()>
                <ProjectSummaryList
                    projects=projects
                    task_groups=task_groups
                    tasks=projected
                    set_search=set_search
                    set_open=set_project_list_open
                />
            </Show>

            <div class="kanban-lanes">
                {LANES
                    .iter()
                    .enumerate()
                    .map(|(lane_idx, lane)| {
                        let lane = *lane;
                        let lane_list = Memo::new(move |_| {
                            board::lane_tasks(&projected.get(), &search.get(), lane)
                        });
                        let on_lane_enter = make_on_lane_mouseenter(dnd, lane_idx);
                        let is_lane_target = move || {
                            dnd.drop_target_read.get() == Some(DropTarget::Lane(lane_idx))
                        };

                        view! {
                            <div
                                class=move || {
                                    let mut class = format!("kanban-lane lane-{}", lane.label().to_lowercase());
                                    if is_lane_target() {
                                        class.push_str(" drop-target");
                                    }
                                    class
                                }
                                on:mouseenter=on_lane_enter
                            >
                                <div class="lane-header">{lane.label()}</div>
                                <Show when=move || lane_list.get().is_empty()>
                                    <div class="lane-empty">"업무가 없습니다."</div>
                                </Show>
                                {move || {
                                    lane_list
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, task)| {
                                            view! {
                                                <KanbanCard
                                                    task=task
                                                    key=CardKey { lane: lane_idx, index }
                                                    dnd=dnd
                                                    set_work_task=set_work_task
                                                />
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <StatusModal task_id=work_task set_task_id=set_work_task />
            <ErrorModal state=error />
        </div>
    }
}
