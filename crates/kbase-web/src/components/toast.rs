//! Toast notifications

use dioxus::prelude::*;
use gloo_timers::future::sleep;
use kbase_core::controller::{Toast, ToastKind};

use crate::state::use_app;

/// Stack of live toasts in the bottom-right corner
#[component]
pub fn ToastStack() -> Element {
    let app = use_app();
    let toasts: Vec<Toast> = app.state.read().toasts().iter().cloned().collect();

    rsx! {
        div {
            id: "toast-container",
            class: "toast-container",
            "aria-live": "polite",
            style: "
                position: fixed;
                right: 20px;
                bottom: 20px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 30;
            ",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

/// One toast; removes itself after the configured TTL.
#[component]
fn ToastItem(toast: Toast) -> Element {
    let app = use_app();
    let colors = (app.theme)().palette();
    let id = toast.id;

    let expire = app.controller.clone();
    let ttl = app.config.toast_ttl();
    use_future(move || {
        let controller = expire.clone();
        async move {
            sleep(ttl).await;
            controller.dismiss_toast(id);
        }
    });

    let accent = match toast.kind {
        ToastKind::Success => colors.success,
        ToastKind::Error => colors.error,
        ToastKind::Info => colors.info,
    };
    let role = if toast.kind == ToastKind::Error {
        "alert"
    } else {
        "status"
    };
    let dismiss = app.controller.clone();

    rsx! {
        div {
            class: "toast {toast.kind.css_class()}",
            role: "{role}",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                min-width: 240px;
                max-width: 380px;
                padding: 10px 14px;
                border-left: 4px solid {accent};
                border-radius: 6px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                font-size: 14px;
            ",
            span { style: "flex: 1;", "{toast.message}" }
            button {
                class: "toast-close",
                r#type: "button",
                "aria-label": "Dismiss notification",
                style: "border: none; background: none; cursor: pointer; color: {colors.text_muted};",
                onclick: move |_| {
                    dismiss.dismiss_toast(id);
                },
                "×"
            }
        }
    }
}
