//! Application-wide keyboard shortcuts.

/// A recognized shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close the modal, otherwise the form
    Dismiss,
    /// Ctrl/Cmd+K
    FocusSearch,
    /// Ctrl/Cmd+N
    NewNote,
}

impl Shortcut {
    /// Map a `KeyboardEvent.key` value plus modifiers to a shortcut.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        if key == "Escape" {
            return Some(Self::Dismiss);
        }
        if !(ctrl || meta) {
            return None;
        }
        if key.eq_ignore_ascii_case("k") {
            Some(Self::FocusSearch)
        } else if key.eq_ignore_ascii_case("n") {
            Some(Self::NewNote)
        } else {
            None
        }
    }
}

/// What the view still has to do after the state handled a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// State changed (or nothing to do); just re-render
    Handled,
    /// Move keyboard focus to the search input
    FocusSearch,
}
