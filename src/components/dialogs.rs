//! Modal Primitives
//!
//! Stateless confirm/error/success dialogs parameterized by title,
//! description and callbacks.

use leptos::prelude::*;

use crate::error::ApiError;

/// Error-dialog signals bundled for passing into spawned futures.
#[derive(Clone, Copy)]
pub struct ErrorState {
    pub open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    pub title: ReadSignal<String>,
    set_title: WriteSignal<String>,
    pub message: ReadSignal<String>,
    set_message: WriteSignal<String>,
}

impl ErrorState {
    pub fn new() -> Self {
        let (open, set_open) = signal(false);
        let (title, set_title) = signal(String::new());
        let (message, set_message) = signal(String::new());
        Self { open, set_open, title, set_title, message, set_message }
    }

    /// Present a structured error; the dialog title follows the error kind.
    pub fn show(&self, error: &ApiError, fallback: &str) {
        self.set_title.set(error.dialog_title().to_string());
        self.set_message.set(error.dialog_message(fallback));
        self.set_open.set(true);
    }

    pub fn show_message(&self, title: &str, message: &str) {
        self.set_title.set(title.to_string());
        self.set_message.set(message.to_string());
        self.set_open.set(true);
    }

    pub fn close(&self) {
        self.set_open.set(false);
    }
}

/// Error dialog
#[component]
pub fn ErrorModal(state: ErrorState) -> impl IntoView {
    view! {
        <Show when=move || state.open.get()>
            <div class="modal-backdrop">
                <div class="modal-box error-modal">
                    <div class="modal-title">
                        <span class="modal-icon warning">"⚠"</span>
                        {move || state.title.get()}
                    </div>
                    <p class="modal-description">{move || state.message.get()}</p>
                    <div class="modal-actions">
                        <button class="modal-btn primary" on:click=move |_| state.close()>"확인"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Success dialog
#[component]
pub fn SuccessModal(
    open: ReadSignal<bool>,
    #[prop(into)] description: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-box success-modal">
                    <div class="modal-title">
                        <span class="modal-icon success">"✓"</span>
                        "처리 완료"
                    </div>
                    <p class="modal-description">{move || description.get()}</p>
                    <div class="modal-actions">
                        <button class="modal-btn primary" on:click=move |_| on_close.run(())>"확인"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Confirm dialog with confirm/cancel actions
#[component]
pub fn ConfirmModal(
    open: ReadSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-box confirm-modal">
                    <div class="modal-title">
                        <span class="modal-icon warning">"⚠"</span>
                        {move || title.get()}
                    </div>
                    <p class="modal-description">{move || description.get()}</p>
                    <div class="modal-actions">
                        <button class="modal-btn primary" on:click=move |_| on_confirm.run(())>"확인"</button>
                        <button class="modal-btn danger" on:click=move |_| on_close.run(())>"취소"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
