//! Project Search Component
//!
//! Autocomplete input over project names with fuzzy suggestions. The bound
//! value is the board's search term; the board only restricts tasks when the
//! term equals a project name exactly.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

/// Project-name autocomplete input
#[component]
pub fn ProjectSearch(
    #[prop(into)] options: Signal<Vec<String>>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || {
        let term = value.get();
        if term.is_empty() || options.get().iter().any(|name| *name == term) {
            return vec![];
        }
        options
            .get()
            .into_iter()
            .filter(|name| fuzzy_match(&term, name))
            .take(5)
            .collect::<Vec<_>>()
    };

    let pick = move |name: String| {
        set_value.set(name);
        set_selected_idx.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "Enter" | "Tab" => {
                if !sugg.is_empty() {
                    ev.prevent_default();
                    let sel = selected_idx.get();
                    if sel < sugg.len() {
                        pick(sugg[sel].clone());
                    }
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="project-search">
            <input
                type="text"
                placeholder="프로젝트명을 입력해주세요"
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_value.set(input.value());
                    set_selected_idx.set(0);
                }
                on:keydown=on_keydown
            />
            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        <div class="autocomplete-list">
                            {sugg.into_iter().enumerate().map(|(i, name)| {
                                let label = name.clone();
                                let is_selected = i == selected;
                                view! {
                                    <button
                                        type="button"
                                        class=if is_selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            pick(name.clone());
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_match_requires_chars_in_order() {
        assert!(fuzzy_match("mes", "MES 구축 프로젝트"));
        assert!(fuzzy_match("구프", "MES 구축 프로젝트"));
        assert!(!fuzzy_match("프구", "MES 구축 프로젝트"));
        assert!(fuzzy_match("", "anything"));
    }
}
