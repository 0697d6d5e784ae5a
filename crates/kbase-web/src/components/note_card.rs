//! Note card component

use dioxus::prelude::*;
use kbase_core::controller::NoteCard as CardData;

use crate::state::use_app;

/// A single card in the note grid; click, Enter or Space opens the detail
/// modal.
#[component]
pub fn NoteCard(card: CardData) -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();
    let note_id = card.id;

    let open_click = app.controller.clone();
    let open_key = app.controller.clone();

    rsx! {
        article {
            class: "note-card",
            tabindex: "0",
            role: "button",
            "aria-label": "Open note {card.title}",
            "data-note-id": "{note_id}",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_primary};
                cursor: pointer;
                transition: box-shadow 0.15s;
            ",
            onclick: move |_| {
                open_click.open_modal(note_id);
            },
            onkeydown: move |evt: Event<KeyboardData>| {
                let key = evt.key();
                if key == Key::Enter || key == Key::Character(" ".to_string()) {
                    evt.prevent_default();
                    open_key.open_modal(note_id);
                }
            },

            h3 {
                class: "note-title",
                style: "margin: 0; font-size: 16px; font-weight: 600; color: {colors.text_primary};",
                "{card.title}"
            }

            p {
                class: "note-summary",
                style: "margin: 0; flex: 1; font-size: 13px; line-height: 1.5; color: {colors.text_secondary};",
                "{card.summary}"
            }

            div {
                class: "note-meta",
                style: "display: flex; justify-content: space-between; font-size: 12px; color: {colors.text_muted};",
                span {
                    class: "note-category",
                    style: "padding: 2px 8px; border-radius: 999px; background: {colors.bg_tertiary};",
                    "{card.category}"
                }
                span { class: "note-date", "{card.updated}" }
            }
        }
    }
}
