//! Work-Info Display Modal
//!
//! Read-only view of a task's registered work detail: registration date and
//! the stored rich-text description rendered to HTML. A malformed stored
//! document degrades to a notice instead of breaking the dialog.

use leptos::prelude::*;

use crate::models::TaskDetail;
use crate::richtext;

/// Read-only work detail modal, open while `info` is set.
#[component]
pub fn WorkInfoModal(
    info: ReadSignal<Option<TaskDetail>>,
    set_info: WriteSignal<Option<TaskDetail>>,
) -> impl IntoView {
    view! {
        <Show when=move || info.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal-box work-info-modal">
                    <div class="modal-title bordered">
                        <span>"공수관리"</span>
                        <button class="close-btn" on:click=move |_| set_info.set(None)>"×"</button>
                    </div>

                    {move || info.get().map(|detail| {
                        let reg_date: String = detail.reg_date.chars().take(10).collect();
                        let body = match detail.description.as_deref() {
                            None | Some("") => view! {
                                <p class="work-info-empty">"공수 내용이 없습니다."</p>
                            }.into_any(),
                            Some(stored) => match richtext::render_html(stored) {
                                Ok(html) => view! {
                                    <div class="work-info-body" inner_html=html></div>
                                }.into_any(),
                                Err(_) => view! {
                                    <p class="work-info-empty">"에디터 내용을 불러오는 데 실패했습니다."</p>
                                }.into_any(),
                            },
                        };

                        view! {
                            <div class="work-info-card">
                                <div class="work-info-header">
                                    <span class="work-info-task">{detail.task_name}</span>
                                    <span class="work-info-project">{detail.project_name}</span>
                                </div>
                                <div class="work-info-regdate">"등록일: " {reg_date}</div>
                                {body}
                            </div>
                        }
                    })}

                    <div class="modal-actions">
                        <button class="modal-btn primary" on:click=move |_| set_info.set(None)>
                            "확인"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
