//! Keyboard focus confinement for the detail modal.

/// Cycles Tab / Shift+Tab through a fixed number of focusable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    len: usize,
}

impl FocusTrap {
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Index that should receive focus after a Tab press.
    ///
    /// `current` is the focused element's index, `None` when focus is outside
    /// the trap. Wraps at both ends; `None` when nothing is focusable.
    pub const fn next(&self, current: Option<usize>, backwards: bool) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let last = self.len - 1;
        let next = match (current, backwards) {
            (None, false) => 0,
            (None, true) => last,
            (Some(index), false) if index >= last => 0,
            (Some(index), false) => index + 1,
            (Some(0), true) => last,
            (Some(index), true) if index > last => last,
            (Some(index), true) => index - 1,
        };
        Some(next)
    }
}
