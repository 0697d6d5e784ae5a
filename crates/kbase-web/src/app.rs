//! Main application component

use std::rc::Rc;

use dioxus::prelude::*;
use kbase_core::api::HttpBackend;
use kbase_core::config::ClientConfig;
use kbase_core::controller::{AppState, Controller};

use crate::bootstrap_config::load_bootstrap_config;
use crate::hooks::use_global_shortcuts;
use crate::state::{AppContext, SignalState};
use crate::theme::{detect_browser_theme, ResolvedTheme};
use crate::views::Home;

/// Shared button and focus styles; colors come from the root's CSS variables.
const BASE_CSS: &str = r"
* { box-sizing: border-box; }
body { margin: 0; }
.btn {
    padding: 7px 14px;
    border-radius: 6px;
    border: 1px solid var(--kb-border);
    font-size: 14px;
    cursor: pointer;
    background: var(--kb-bg-primary);
    color: var(--kb-text-primary);
}
.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-primary { background: var(--kb-accent); border-color: var(--kb-accent); color: var(--kb-accent-text); }
.btn-primary:hover:not(:disabled) { background: var(--kb-accent-hover); }
.note-card:hover, .note-card:focus { box-shadow: 0 4px 14px rgba(0, 0, 0, 0.12); }
:focus-visible { outline: 2px solid var(--kb-accent); outline-offset: 2px; }
";

/// Root component: resolves the API location, then mounts the workspace.
#[component]
pub fn App() -> Element {
    let bootstrap = use_hook(load_bootstrap_config);
    let page_origin = use_resource(|| async {
        document::eval("return window.location.origin;")
            .join::<String>()
            .await
            .map_err(|error| tracing::warn!("Failed to read page origin: {:?}", error))
            .ok()
    });

    let resolved = page_origin.read().clone();
    match resolved {
        Some(origin) => {
            let config = bootstrap.client_config(origin);
            rsx! { Workspace { config } }
        }
        None => rsx! {
            div { class: "loading", style: "padding: 48px; text-align: center;", "Loading..." }
        },
    }
}

#[component]
fn Workspace(config: ClientConfig) -> Element {
    let state = use_signal(AppState::default);
    let mut theme = use_signal(ResolvedTheme::default);
    let search_input = use_signal(|| None);
    let controller = use_hook(|| {
        HttpBackend::new(&config)
            .map(|backend| Rc::new(Controller::new(backend, SignalState(state))))
            .map_err(|error| error.to_string())
    });

    // Fixed for the component's lifetime, so the hooks below always run in
    // the same order.
    let controller = match controller {
        Ok(controller) => controller,
        Err(error) => {
            tracing::error!("Failed to create API client: {}", error);
            return rsx! {
                div { class: "fatal", style: "padding: 48px;", "Unable to start: {error}" }
            };
        }
    };

    let app = use_context_provider(|| {
        tracing::info!("Using notes API at {}", config.api_base_url);
        AppContext {
            state,
            controller,
            config: config.clone(),
            theme,
            search_input,
        }
    });

    let mut initialized = use_signal(|| false);
    let init_app = app.clone();
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true); // Mark immediately to prevent double init
        init_app.run(|controller| async move { controller.init().await });
    });

    use_future(move || async move {
        theme.set(detect_browser_theme().await);
    });

    use_global_shortcuts(app);

    let current_theme = theme();
    let colors = current_theme.palette();

    rsx! {
        style { {BASE_CSS} }

        div {
            class: "app-container",
            "data-theme": "{current_theme.attr()}",
            style: "
                --kb-bg-primary: {colors.bg_primary};
                --kb-text-primary: {colors.text_primary};
                --kb-border: {colors.border};
                --kb-accent: {colors.accent};
                --kb-accent-hover: {colors.accent_hover};
                --kb-accent-text: {colors.accent_text};
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
