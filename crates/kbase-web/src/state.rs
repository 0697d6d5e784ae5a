//! Application state management
//!
//! The view state lives in one `Signal<AppState>`; components read it for
//! rendering and hand every intent to the shared controller.

use std::rc::Rc;

use dioxus::prelude::*;

use kbase_core::api::HttpBackend;
use kbase_core::config::ClientConfig;
use kbase_core::controller::{AppState, Controller, StateCell};

use crate::theme::ResolvedTheme;

/// Signal wrapper the controller writes through.
///
/// Each closure runs under a single signal borrow, so no borrow survives an
/// await inside the controller.
#[derive(Clone, Copy)]
pub struct SignalState(pub Signal<AppState>);

impl StateCell for SignalState {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.0.read())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut state)
    }
}

pub type WebController = Controller<HttpBackend, SignalState>;

/// Global context shared by every component
#[derive(Clone)]
pub struct AppContext {
    /// View state, read reactively while rendering
    pub state: Signal<AppState>,
    pub controller: Rc<WebController>,
    pub config: ClientConfig,
    pub theme: Signal<ResolvedTheme>,
    /// Handle to the search input, for Ctrl/Cmd+K
    pub search_input: Signal<Option<Rc<MountedData>>>,
}

impl AppContext {
    /// Run an async controller operation on the Dioxus executor.
    pub fn run<F, Fut>(&self, operation: F)
    where
        F: FnOnce(Rc<WebController>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        spawn(operation(Rc::clone(&self.controller)));
    }

    /// Move keyboard focus to the search input, if it is mounted.
    pub fn focus_search(&self) {
        let Some(input) = (self.search_input)() else {
            return;
        };
        spawn(async move {
            if let Err(error) = input.set_focus(true).await {
                tracing::debug!("Failed to focus search input: {:?}", error);
            }
        });
    }
}

/// Shorthand for `use_context::<AppContext>()`.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
