//! Note grid component

use dioxus::prelude::*;
use kbase_core::controller::ListView;

use super::NoteCard;
use crate::state::use_app;

/// Grid of note cards, or the loading / empty placeholder
#[component]
pub fn NoteList() -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();
    let view = app.state.read().list_view();

    let placeholder_style = format!(
        "padding: 48px 20px; text-align: center; color: {};",
        colors.text_muted
    );

    rsx! {
        section {
            id: "notes-container",
            class: "note-list",
            "aria-live": "polite",
            style: "padding: 24px; overflow-y: auto; flex: 1;",

            {match view {
                ListView::Loading => rsx! {
                    div { class: "loading", style: "{placeholder_style}", "Loading notes..." }
                },
                ListView::Empty(message) => rsx! {
                    div { class: "empty-state", style: "{placeholder_style}", "{message}" }
                },
                ListView::Grid(cards) => rsx! {
                    div {
                        class: "notes-grid",
                        style: "
                            display: grid;
                            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                            gap: 16px;
                        ",
                        for card in cards {
                            NoteCard { key: "{card.id}", card }
                        }
                    }
                },
            }}
        }
    }
}
