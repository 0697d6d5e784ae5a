//! Toolbar with list filters and actions

use dioxus::prelude::*;

use super::{CategoryCreator, SearchBar};
use crate::state::use_app;

/// Search, category filter, favorites toggle and the create actions
#[component]
pub fn Toolbar() -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();

    let (filter_options, selected, favorites_active, submitting) = {
        let state = app.state.read();
        (
            state.filter_category_options(),
            state.category_filter().unwrap_or_default().to_string(),
            state.is_favorite_view(),
            state.is_submitting(),
        )
    };

    let filter_app = app.clone();
    let favorites_app = app.clone();
    let new_note_app = app.clone();

    let favorites_style = if favorites_active {
        format!(
            "background: {}; color: {}; border-color: {};",
            colors.favorite, colors.accent_text, colors.favorite
        )
    } else {
        String::new()
    };

    rsx! {
        div {
            class: "toolbar",
            style: "
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                gap: 12px;
                padding: 16px 24px;
                border-bottom: 1px solid {colors.border};
            ",

            SearchBar {}

            select {
                id: "category-filter",
                "aria-label": "Filter by category",
                value: "{selected}",
                onchange: move |evt| {
                    let value = evt.value();
                    let category = if value.is_empty() { None } else { Some(value) };
                    filter_app.run(|controller| async move {
                        controller.select_category(category).await;
                    });
                },
                for option in filter_options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: option.value == selected,
                        "{option.label}"
                    }
                }
            }

            button {
                id: "favorites-toggle",
                class: if favorites_active { "btn btn-secondary active" } else { "btn btn-secondary" },
                r#type: "button",
                "aria-pressed": "{favorites_active}",
                disabled: submitting,
                style: "{favorites_style}",
                onclick: move |_| {
                    favorites_app.run(|controller| async move {
                        controller.toggle_favorites_view().await;
                    });
                },
                "★ Favorites"
            }

            div { style: "flex: 1;" }

            CategoryCreator {}

            button {
                id: "new-note",
                class: "btn btn-primary",
                r#type: "button",
                title: "New note (Ctrl+N)",
                onclick: move |_| {
                    new_note_app.controller.open_create_form();
                },
                "+ New Note"
            }
        }
    }
}
