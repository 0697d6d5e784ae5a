//! Inline form for adding a category

use dioxus::prelude::*;

use crate::state::use_app;

#[component]
pub fn CategoryCreator() -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();
    let mut open = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let save = move || {
        if saving() {
            return;
        }
        saving.set(true);
        let text = name();
        let controller = app.controller.clone();
        spawn(async move {
            if controller.create_category(&text).await {
                name.set(String::new());
                open.set(false);
            }
            saving.set(false);
        });
    };
    let mut on_enter = save.clone();
    let mut on_click = save;

    if !open() {
        return rsx! {
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| open.set(true),
                "+ Category"
            }
        };
    }

    rsx! {
        div {
            class: "category-creator",
            style: "display: flex; gap: 6px; align-items: center;",

            input {
                r#type: "text",
                placeholder: "Category name",
                "aria-label": "New category name",
                value: "{name}",
                disabled: saving(),
                oninput: move |evt| name.set(evt.value()),
                onkeydown: move |evt: Event<KeyboardData>| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        on_enter();
                    }
                },
                onmounted: move |evt: MountedEvent| async move {
                    let _ = evt.set_focus(true).await;
                },
                style: "
                    padding: 7px 10px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: saving(),
                onclick: move |_| on_click(),
                "Add"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    name.set(String::new());
                    open.set(false);
                },
                "Cancel"
            }
        }
    }
}
