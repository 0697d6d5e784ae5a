//! Search bar component

use dioxus::prelude::*;

use crate::state::use_app;

/// Search input; Enter or the button runs the query, a blank query resets
/// the list.
#[component]
pub fn SearchBar() -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();
    let mut query = use_signal(String::new);
    let mut search_input = app.search_input;

    let submit = {
        let app = app.clone();
        move || {
            let text = query();
            app.run(|controller| async move { controller.search(&text).await });
        }
    };
    let on_enter = submit.clone();
    let on_click = submit;

    rsx! {
        div {
            class: "search-bar",
            style: "display: flex; gap: 8px; flex: 1; min-width: 240px;",

            input {
                id: "search-input",
                r#type: "search",
                placeholder: "Search notes... (Ctrl+K)",
                "aria-label": "Search notes",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
                onkeydown: move |evt: Event<KeyboardData>| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        on_enter();
                    }
                },
                onmounted: move |evt: MountedEvent| search_input.set(Some(evt.data())),
                style: "
                    flex: 1;
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_click(),
                "Search"
            }
        }
    }
}
