//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{Header, NoteForm, NoteList, NoteModal, ToastStack, Toolbar};

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; min-height: 100vh;",

            Header {}
            Toolbar {}

            main {
                class: "content-area",
                style: "flex: 1; display: flex;",
                NoteList {}
            }

            NoteModal {}
            NoteForm {}
            ToastStack {}
        }
    }
}
