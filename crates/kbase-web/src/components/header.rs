//! Page header with the note and category counters

use dioxus::prelude::*;

use crate::state::use_app;

#[component]
pub fn Header() -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();
    let stats = *app.state.read().stats();

    rsx! {
        header {
            class: "app-header",
            style: "
                display: flex;
                align-items: baseline;
                justify-content: space-between;
                padding: 20px 24px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            h1 {
                style: "margin: 0; font-size: 22px; font-weight: 600; color: {colors.text_primary};",
                "Knowledge Base"
            }

            div {
                class: "stats",
                style: "display: flex; gap: 16px; font-size: 14px; color: {colors.text_secondary};",
                span { id: "total-notes", "{stats.notes_label()}" }
                span { id: "total-categories", "{stats.categories_label()}" }
            }
        }
    }
}
