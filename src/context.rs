//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch board/table data from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch board/table data from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0);
        Self { reload_trigger, set_reload_trigger }
    }

    /// Trigger a refetch from the backend
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
