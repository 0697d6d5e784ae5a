//! Note detail modal

use std::rc::Rc;

use dioxus::prelude::*;
use kbase_core::controller::{FocusTrap, ModalSession};
use kbase_core::models::{format_date, Note};

use crate::state::{use_app, AppContext};

/// Buttons inside the dialog, in tab order.
const FOCUSABLE_COUNT: usize = 4;
const CLOSE_BUTTON: usize = 3;

const REMEMBER_FOCUS: &str = "window.__kbaseReturnFocus = document.activeElement;";
const RESTORE_FOCUS: &str = r"
const target = window.__kbaseReturnFocus;
window.__kbaseReturnFocus = null;
if (target && document.contains(target) && target.focus) { target.focus(); }
";
const CONFIRM_DELETE: &str =
    "return window.confirm('Are you sure you want to delete this note? This cannot be undone.');";

/// Renders the modal for the note currently open, if any.
#[component]
pub fn NoteModal() -> Element {
    let app = use_app();
    let open = app
        .state
        .read()
        .modal()
        .map(|(session, note)| (session, note.clone()));

    match open {
        Some((session, note)) => rsx! { ModalDialog { session, note } },
        None => rsx! {},
    }
}

#[component]
fn ModalDialog(session: ModalSession, note: Note) -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();
    let mut handles = use_signal(|| vec![None::<Rc<MountedData>>; FOCUSABLE_COUNT]);
    let mut focused = use_signal(|| None::<usize>);

    use_hook(|| {
        document::eval(REMEMBER_FOCUS);
    });
    use_drop(|| {
        document::eval(RESTORE_FOCUS);
    });

    let focus_index = move |index: usize| {
        let handle = handles.read().get(index).cloned().flatten();
        if let Some(handle) = handle {
            spawn(async move {
                if let Err(error) = handle.set_focus(true).await {
                    tracing::debug!("Failed to move focus inside modal: {:?}", error);
                }
            });
        }
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() != Key::Tab {
            return;
        }
        evt.prevent_default();
        let backwards = evt.modifiers().shift();
        if let Some(next) = FocusTrap::new(FOCUSABLE_COUNT).next(focused(), backwards) {
            focus_index(next);
        }
    };

    let mut register = move |index: usize, evt: MountedEvent| {
        if let Some(slot) = handles.write().get_mut(index) {
            *slot = Some(evt.data());
        }
        if index == CLOSE_BUTTON {
            focus_index(index);
        }
    };

    let note_id = note.id;
    let tags = note.tag_list();
    let created = format_date(note.created_at);
    let updated = note.updated_at.map(format_date);
    let favorite_label = if note.is_favorite {
        "★ Unfavorite"
    } else {
        "☆ Favorite"
    };

    let backdrop = app.controller.clone();
    let close = app.controller.clone();
    let edit_app = app.clone();
    let favorite_app = app.clone();
    let delete_app = app.clone();

    rsx! {
        div {
            class: "modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
                z-index: 10;
            ",
            onclick: move |_| {
                backdrop.close_modal(session);
            },

            div {
                id: "note-modal",
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "modal-title",
                style: "
                    width: min(680px, 92vw);
                    max-height: 85vh;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                    padding: 24px;
                    overflow-y: auto;
                    border-radius: 10px;
                    background: {colors.bg_secondary};
                    color: {colors.text_primary};
                ",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: on_keydown,

                h2 { id: "modal-title", style: "margin: 0; font-size: 20px;", "{note.title}" }

                div {
                    class: "modal-meta",
                    style: "display: flex; flex-wrap: wrap; gap: 12px; font-size: 12px; color: {colors.text_muted};",
                    span { class: "note-category", "{note.category}" }
                    span { "Created {created}" }
                    if let Some(updated) = updated {
                        span { "Updated {updated}" }
                    }
                    if note.is_favorite {
                        span { style: "color: {colors.favorite};", "★ Favorite" }
                    }
                }

                div {
                    class: "modal-content",
                    style: "white-space: pre-wrap; line-height: 1.6; font-size: 14px;",
                    "{note.content}"
                }

                if !tags.is_empty() {
                    div {
                        class: "modal-tags",
                        style: "display: flex; flex-wrap: wrap; gap: 6px;",
                        for tag in tags {
                            span {
                                key: "{tag}",
                                class: "tag",
                                style: "padding: 2px 8px; border-radius: 999px; font-size: 12px; background: {colors.bg_tertiary};",
                                "#{tag}"
                            }
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    style: "display: flex; gap: 8px; justify-content: flex-end;",

                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onmounted: move |evt| register(0, evt),
                        onfocus: move |_| focused.set(Some(0)),
                        onclick: move |_| {
                            edit_app.run(|controller| async move {
                                controller.open_edit_form(note_id).await;
                            });
                        },
                        "Edit"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onmounted: move |evt| register(1, evt),
                        onfocus: move |_| focused.set(Some(1)),
                        onclick: move |_| {
                            favorite_app.run(|controller| async move {
                                controller.toggle_favorite(note_id).await;
                            });
                        },
                        "{favorite_label}"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        style: "color: {colors.error};",
                        onmounted: move |evt| register(2, evt),
                        onfocus: move |_| focused.set(Some(2)),
                        onclick: move |_| confirm_and_delete(&delete_app, note_id),
                        "Delete"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        "aria-label": "Close",
                        onmounted: move |evt| register(CLOSE_BUTTON, evt),
                        onfocus: move |_| focused.set(Some(CLOSE_BUTTON)),
                        onclick: move |_| {
                            close.close_modal(session);
                        },
                        "Close"
                    }
                }
            }
        }
    }
}

/// Ask the browser for confirmation, then delete.
fn confirm_and_delete(app: &AppContext, note_id: kbase_core::models::NoteId) {
    app.run(|controller| async move {
        let confirmed = match document::eval(CONFIRM_DELETE).join::<bool>().await {
            Ok(confirmed) => confirmed,
            Err(error) => {
                tracing::warn!("Delete confirmation failed: {:?}", error);
                false
            }
        };
        if confirmed {
            controller.delete_note(note_id).await;
        } else {
            tracing::debug!("Delete of note {} cancelled", note_id);
        }
    });
}
