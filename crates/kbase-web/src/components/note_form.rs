//! Create / edit note form

use dioxus::prelude::*;
use kbase_core::validation::FormField;

use crate::state::use_app;

/// Overlay form for creating or editing a note.
///
/// Renders nothing while the form is closed.
#[component]
pub fn NoteForm() -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();
    let (form, category_options) = {
        let state = app.state.read();
        (state.form().cloned(), state.editor_category_options())
    };
    let Some(form) = form else {
        return rsx! {};
    };

    let fields = form.fields().clone();
    let title_error = form.errors().get(FormField::Title).map(str::to_string);
    let content_error = form.errors().get(FormField::Content).map(str::to_string);
    let submitting = form.is_submitting();

    let input_style = format!(
        "width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid {}; \
         border-radius: 6px; font-size: 14px; font-family: inherit; background: {}; color: {};",
        colors.border, colors.bg_primary, colors.text_primary
    );
    let error_style = format!("margin: 4px 0 0; font-size: 12px; color: {};", colors.error);
    let label_style = format!(
        "display: block; margin-bottom: 4px; font-size: 13px; font-weight: 500; color: {};",
        colors.text_secondary
    );

    let update = app.controller.clone();
    let update_title = update.clone();
    let update_content = update.clone();
    let update_category = update.clone();
    let update_tags = update;
    let cancel = app.controller.clone();
    let submit_app = app.clone();

    rsx! {
        div {
            class: "form-overlay",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
                z-index: 20;
            ",

            form {
                id: "note-form",
                class: "note-form",
                "aria-labelledby": "note-form-heading",
                novalidate: true,
                style: "
                    width: min(560px, 92vw);
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                    padding: 24px;
                    border-radius: 10px;
                    background: {colors.bg_secondary};
                ",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit_app.run(|controller| async move { controller.submit_form().await });
                },

                h2 {
                    id: "note-form-heading",
                    style: "margin: 0; font-size: 18px; color: {colors.text_primary};",
                    "{form.heading()}"
                }

                div {
                    label { r#for: "note-title", style: "{label_style}", "Title" }
                    input {
                        id: "note-title",
                        r#type: "text",
                        value: "{fields.title}",
                        "aria-invalid": "{title_error.is_some()}",
                        style: "{input_style}",
                        oninput: move |evt| update_title.update_field(FormField::Title, evt.value()),
                        onmounted: move |evt: MountedEvent| async move {
                            if let Err(error) = evt.set_focus(true).await {
                                tracing::debug!("Failed to focus note title: {:?}", error);
                            }
                        },
                    }
                    if let Some(message) = title_error.clone() {
                        p { class: "field-error", style: "{error_style}", "{message}" }
                    }
                }

                div {
                    label { r#for: "note-content", style: "{label_style}", "Content" }
                    textarea {
                        id: "note-content",
                        rows: "8",
                        value: "{fields.content}",
                        "aria-invalid": "{content_error.is_some()}",
                        style: "{input_style} resize: vertical;",
                        oninput: move |evt| update_content.update_field(FormField::Content, evt.value()),
                    }
                    if let Some(message) = content_error.clone() {
                        p { class: "field-error", style: "{error_style}", "{message}" }
                    }
                }

                div {
                    style: "display: flex; gap: 12px;",
                    div {
                        style: "flex: 1;",
                        label { r#for: "note-category", style: "{label_style}", "Category" }
                        select {
                            id: "note-category",
                            value: "{fields.category}",
                            style: "{input_style}",
                            onchange: move |evt| update_category.update_field(FormField::Category, evt.value()),
                            for option in category_options {
                                option {
                                    key: "{option.value}",
                                    value: "{option.value}",
                                    selected: option.value == fields.category,
                                    "{option.label}"
                                }
                            }
                        }
                    }
                    div {
                        style: "flex: 1;",
                        label { r#for: "note-tags", style: "{label_style}", "Tags" }
                        input {
                            id: "note-tags",
                            r#type: "text",
                            placeholder: "comma, separated",
                            value: "{fields.tags}",
                            style: "{input_style}",
                            oninput: move |evt| update_tags.update_field(FormField::Tags, evt.value()),
                        }
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: submitting,
                        onclick: move |_| {
                            cancel.close_form();
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        "{form.submit_label()}"
                    }
                }
            }
        }
    }
}
