//! Work-Log Entry Modal
//!
//! Captures a work duration, a rich-text description (markdown with live
//! preview), and an optional single attachment, then runs the submission
//! saga. Closing with unsaved input asks for confirmation; closing does not
//! cancel an in-flight save.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::{ConfirmModal, ErrorModal, ErrorState, SuccessModal};
use crate::context::AppContext;
use crate::models::TaskDetail;
use crate::richtext;
use crate::saga::{self, WorkEntry};

/// Work-log entry modal, open while `task_id` is set.
#[component]
pub fn StatusModal(
    task_id: ReadSignal<Option<u64>>,
    set_task_id: WriteSignal<Option<u64>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = expect_context::<AppContext>();
    let error = ErrorState::new();

    let (task_info, set_task_info) = signal::<Option<TaskDetail>>(None);
    let (work_time, set_work_time) = signal(0u32);
    let (description, set_description) = signal(String::new());
    // web_sys::File is not thread-safe; keep it in a local-storage signal
    let (attachment, set_attachment) = signal_local::<Option<web_sys::File>>(None);
    let (file_name, set_file_name) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (success_open, set_success_open) = signal(false);
    let (confirm_open, set_confirm_open) = signal(false);

    // Header info for the targeted task
    Effect::new(move |_| {
        match task_id.get() {
            Some(id) => {
                spawn_local(async move {
                    match api.fetch_task_info(id).await {
                        Ok(info) => set_task_info.set(Some(info)),
                        Err(e) => error.show(&e, "업무 정보를 가져오는데 실패했습니다."),
                    }
                });
            }
            None => set_task_info.set(None),
        }
    });

    let reset_and_close = move || {
        set_work_time.set(0);
        set_description.set(String::new());
        set_attachment.set(None);
        set_file_name.set(String::new());
        set_confirm_open.set(false);
        set_task_id.set(None);
    };

    let has_unsaved_input = move || {
        work_time.get_untracked() > 0
            || !description.get_untracked().is_empty()
            || attachment.with_untracked(|file| file.is_some())
    };

    let on_close = move |_| {
        if has_unsaved_input() {
            set_confirm_open.set(true);
        } else {
            reset_and_close();
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                set_file_name.set(file.name());
                set_attachment.set(Some(file));
            }
        }
    };

    let on_save = move |_| {
        let Some(id) = task_id.get_untracked() else { return };
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        let entry = WorkEntry {
            task_id: id,
            work_time: work_time.get_untracked(),
            description: richtext::serialize_markdown(&description.get_untracked()),
            attachment: attachment.get_untracked(),
        };
        spawn_local(async move {
            match saga::submit_work_entry(&api, entry).await {
                Ok(steps) => {
                    log::info!("work entry saved for task {id} in {} steps", steps.len());
                    set_success_open.set(true);
                    ctx.reload();
                }
                Err(err) => error.show_message(err.dialog_title(), &err.dialog_message()),
            }
            set_saving.set(false);
        });
    };

    let preview_html = move || richtext::markdown_to_html(&description.get());

    view! {
        <Show when=move || task_id.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal-box status-modal">
                    <div class="modal-title bordered">
                        <span>"공수관리"</span>
                        <button class="close-btn" on:click=on_close>"×"</button>
                    </div>

                    <div class="status-modal-task">
                        {move || task_info.get().map(|info| view! {
                            <span class="status-modal-task-name">{info.task_name}</span>
                            <span class="status-modal-project">{info.project_name}</span>
                        })}
                    </div>

                    <div class="status-modal-fields">
                        <label class="field-label">"공수 시간 (시간)"</label>
                        <input
                            type="number"
                            min="0"
                            step="1"
                            prop:value=move || work_time.get().to_string()
                            on:input=move |ev| {
                                set_work_time.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                        />

                        <label class="field-label">"첨부파일"</label>
                        <label class="file-upload">
                            <input type="file" on:change=on_file_change />
                            {move || {
                                let name = file_name.get();
                                if name.is_empty() { "☁ 파일 선택".to_string() } else { name }
                            }}
                        </label>
                    </div>

                    <div class="status-modal-editor">
                        <div class="editor-pane">
                            <div class="pane-header">"작성"</div>
                            <textarea
                                class="work-textarea"
                                placeholder="공수 내용을 입력해주세요..."
                                prop:value=move || description.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    set_description.set(textarea.value());
                                }
                            ></textarea>
                        </div>
                        <div class="preview-pane">
                            <div class="pane-header">"미리보기"</div>
                            <div class="preview-content" inner_html=preview_html></div>
                        </div>
                    </div>

                    <div class="modal-actions">
                        <button class="modal-btn primary" disabled=move || saving.get() on:click=on_save>
                            {move || if saving.get() { "저장 중..." } else { "저장" }}
                        </button>
                    </div>

                    <SuccessModal
                        open=success_open
                        description="업무의 공수관리가 정상적으로 등록되었습니다.".to_string()
                        on_close=Callback::new(move |_| {
                            set_success_open.set(false);
                            reset_and_close();
                        })
                    />

                    <ConfirmModal
                        open=confirm_open
                        title="작성 취소".to_string()
                        description="작성 중인 내용이 있습니다. 닫으시겠습니까?".to_string()
                        on_confirm=Callback::new(move |_| reset_and_close())
                        on_close=Callback::new(move |_| set_confirm_open.set(false))
                    />

                    <ErrorModal state=error />
                </div>
            </div>
        </Show>
    }
}
