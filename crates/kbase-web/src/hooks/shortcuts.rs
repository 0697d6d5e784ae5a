//! Document-level keyboard shortcuts.

use dioxus::prelude::*;
use kbase_core::controller::{Shortcut, ShortcutAction};
use serde::Deserialize;

use crate::state::AppContext;

/// Installs a `keydown` listener on the document and forwards every key
/// press that could be a shortcut. Ctrl/Cmd+K and Ctrl/Cmd+N are claimed
/// so the browser does not act on them.
const KEYDOWN_LISTENER: &str = r"
document.addEventListener('keydown', (event) => {
    const modifier = event.ctrlKey || event.metaKey;
    const key = event.key || '';
    if (modifier && ['k', 'n'].includes(key.toLowerCase())) {
        event.preventDefault();
    }
    if (key === 'Escape' || modifier) {
        dioxus.send({ key, ctrl: event.ctrlKey, meta: event.metaKey });
    }
});
";

#[derive(Debug, Deserialize)]
struct KeyPress {
    key: String,
    ctrl: bool,
    meta: bool,
}

/// Listen for Escape, Ctrl/Cmd+K and Ctrl/Cmd+N for the app's lifetime.
pub fn use_global_shortcuts(app: AppContext) {
    use_future(move || {
        let app = app.clone();
        async move {
            let mut listener = document::eval(KEYDOWN_LISTENER);
            loop {
                let press = match listener.recv::<KeyPress>().await {
                    Ok(press) => press,
                    Err(error) => {
                        tracing::warn!("Keyboard shortcut listener stopped: {:?}", error);
                        break;
                    }
                };
                let Some(shortcut) = Shortcut::from_key(&press.key, press.ctrl, press.meta) else {
                    continue;
                };
                tracing::debug!("Shortcut {:?}", shortcut);
                if app.controller.apply_shortcut(shortcut) == ShortcutAction::FocusSearch {
                    app.focus_search();
                }
            }
        }
    });
}
