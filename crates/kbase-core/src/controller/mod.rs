//! View controller: maps UI intents to service calls and state updates.
//!
//! [`Controller`] owns a backend and a [`StateCell`]. Each operation reads what
//! it needs from the state, awaits the backend without holding any borrow, then
//! applies the response. Every failure ends as a toast; nothing propagates to
//! the caller, so the view always returns to an idle state.

mod focus;
mod sequence;
mod shortcuts;
mod state;
mod toast;

pub use focus::FocusTrap;
pub use sequence::{RequestSequence, RequestToken};
pub use shortcuts::{Shortcut, ShortcutAction};
pub use state::{
    AppState, FormMode, FormState, ListSource, ListView, LoadOutcome, ModalSession, NoteCard,
    SelectOption, StateCell, SubmitStart, ALL_CATEGORIES_LABEL, GENERAL_OPTION_LABEL,
};
pub use toast::{Toast, ToastId, ToastKind, ToastQueue};

use crate::api::NotesBackend;
use crate::error::Error;
use crate::models::{CategoryDraft, Note, NoteId};
use crate::util::pluralize;
use crate::validation::FormField;
use crate::Result;

/// Shown when Edit would replace a create form that holds input.
pub const UNSAVED_DRAFT_MESSAGE: &str = "Save or cancel the new note before editing another";

/// Drives [`AppState`] from user intents.
#[derive(Debug, Clone)]
pub struct Controller<B, S> {
    backend: B,
    state: S,
}

impl<B: NotesBackend, S: StateCell> Controller<B, S> {
    pub const fn new(backend: B, state: S) -> Self {
        Self { backend, state }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn state(&self) -> &S {
        &self.state
    }

    fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.state.with_mut(|state| state.notify(kind, message));
    }

    fn toast_error(&self, error: &Error, fallback: &str) {
        tracing::error!("{}: {}", fallback, error);
        self.toast(ToastKind::Error, error.user_message(fallback));
    }

    // ---------------------------------------------------------------------
    // Startup and loaders
    // ---------------------------------------------------------------------

    /// Load stats, categories and notes concurrently.
    ///
    /// Waits for all three to settle; failures are gathered into one toast.
    pub async fn init(&self) {
        let (token, source) = self.state.with_mut(AppState::begin_list_load);
        let (stats, categories, notes) = tokio::join!(
            self.backend.stats(),
            self.backend.list_categories(),
            self.fetch_list(&source),
        );

        let mut failed = Vec::new();
        self.state.with_mut(|state| {
            if let Err(error) = state.apply_stats(stats) {
                tracing::error!("Error loading stats: {}", error);
                failed.push("stats");
            }
            if let Err(error) = state.apply_categories(categories) {
                tracing::error!("Error loading categories: {}", error);
                failed.push("categories");
            }
            match state.finish_list_load(token, notes) {
                LoadOutcome::Applied(count) => tracing::info!("Loaded {} notes", count),
                LoadOutcome::Stale => {}
                LoadOutcome::Failed(error) => {
                    tracing::error!("Error loading notes: {}", error);
                    failed.push("notes");
                }
            }
        });

        if !failed.is_empty() {
            self.toast(
                ToastKind::Error,
                format!("Failed to load {}", failed.join(", ")),
            );
        }
    }

    /// Refresh the header counters; failure zeroes them and toasts.
    pub async fn load_stats(&self) {
        let result = self.backend.stats().await;
        if let Err(error) = self.state.with_mut(|state| state.apply_stats(result)) {
            self.toast_error(&error, "Failed to load stats");
        }
    }

    /// Refresh the category cache feeding both selectors.
    pub async fn load_categories(&self) {
        let result = self.backend.list_categories().await;
        if let Err(error) = self.state.with_mut(|state| state.apply_categories(result)) {
            self.toast_error(&error, "Failed to load categories");
        }
    }

    /// Reload the grid from the current list source.
    pub async fn load_notes(&self) {
        let (token, source) = self.state.with_mut(AppState::begin_list_load);
        let result = self.fetch_list(&source).await;
        let outcome = self
            .state
            .with_mut(|state| state.finish_list_load(token, result));

        match (outcome, &source) {
            (LoadOutcome::Failed(error), ListSource::Search(_)) => {
                self.toast_error(&error, "Search failed");
            }
            (LoadOutcome::Failed(error), _) => self.toast_error(&error, "Failed to load notes"),
            (LoadOutcome::Applied(count), _) => tracing::debug!("Loaded {} notes", count),
            (LoadOutcome::Stale, _) => {}
        }
    }

    async fn fetch_list(&self, source: &ListSource) -> Result<Vec<Note>> {
        match source {
            ListSource::All => self.backend.list_notes(None).await,
            ListSource::Category(name) => self.backend.list_notes(Some(name)).await,
            ListSource::Favorites => self.backend.list_favorites().await,
            ListSource::Search(query) => self.backend.search(query).await,
        }
    }

    async fn reload_notes_and_stats(&self) {
        tokio::join!(self.load_notes(), self.load_stats());
    }

    // ---------------------------------------------------------------------
    // List source
    // ---------------------------------------------------------------------

    /// Search notes; a blank query reloads the unfiltered list instead.
    pub async fn search(&self, query: &str) {
        self.state.with_mut(|state| state.set_search(query));
        let Some(query) = self
            .state
            .with(|state| state.search_query().map(ToString::to_string))
        else {
            self.load_notes().await;
            return;
        };

        let (token, _) = self.state.with_mut(AppState::begin_list_load);
        let result = self.backend.search(&query).await;
        match self
            .state
            .with_mut(|state| state.finish_list_load(token, result))
        {
            LoadOutcome::Applied(count) => {
                tracing::info!("Search for {:?} returned {} notes", query, count);
                self.toast(
                    ToastKind::Info,
                    format!("Found {}", pluralize(count as u64, "note", "notes")),
                );
            }
            LoadOutcome::Stale => {}
            LoadOutcome::Failed(error) => self.toast_error(&error, "Search failed"),
        }
    }

    /// Filter the grid by category; `None` shows every note.
    pub async fn select_category(&self, category: Option<String>) {
        self.state.with_mut(|state| state.select_category(category));
        self.load_notes().await;
    }

    /// Flip between favorites and the full list, then reload.
    pub async fn toggle_favorites_view(&self) {
        if self.state.with_mut(AppState::toggle_favorites_view) {
            self.load_notes().await;
        }
    }

    // ---------------------------------------------------------------------
    // Form
    // ---------------------------------------------------------------------

    pub fn open_create_form(&self) -> bool {
        self.state.with_mut(AppState::open_create_form)
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.state
            .with_mut(|state| state.update_form_field(field, value));
    }

    pub fn close_form(&self) -> bool {
        self.state.with_mut(AppState::close_form)
    }

    /// Fetch the full note and open it in the form.
    ///
    /// List entries may carry only a summary, so the form is never filled
    /// from the cache.
    pub async fn open_edit_form(&self, id: NoteId) {
        if self.state.with(AppState::has_unsaved_draft) {
            self.toast(ToastKind::Info, UNSAVED_DRAFT_MESSAGE);
            return;
        }
        match self.backend.get_note(id).await {
            Ok(note) => {
                if !self.state.with_mut(|state| state.open_edit_form(&note)) {
                    tracing::warn!("Ignoring edit of note {} while another form is busy", id);
                }
            }
            Err(error) => self.toast_error(&error, "Failed to load note"),
        }
    }

    /// Validate and save the open form.
    ///
    /// Invalid input never reaches the backend. On success the form closes and
    /// the list and counters reload; on failure the input is kept.
    pub async fn submit_form(&self) {
        let (mode, draft) = match self.state.with_mut(AppState::begin_submit) {
            SubmitStart::Ready { mode, draft } => (mode, draft),
            SubmitStart::Invalid => {
                tracing::debug!("Note form failed validation");
                return;
            }
            SubmitStart::NotOpen | SubmitStart::InFlight => return,
        };

        let result = match mode {
            FormMode::Create => self.backend.create_note(&draft).await,
            FormMode::Edit(id) => self.backend.update_note(id, &draft).await,
        };
        self.state.with_mut(|state| state.finish_submit(&result));

        match (result, mode) {
            (Ok(note), FormMode::Create) => {
                tracing::info!("Created note {}", note.id);
                self.toast(ToastKind::Success, "Note created successfully!");
                self.reload_notes_and_stats().await;
            }
            (Ok(note), FormMode::Edit(_)) => {
                tracing::info!("Updated note {}", note.id);
                self.toast(ToastKind::Success, "Note updated successfully!");
                self.reload_notes_and_stats().await;
            }
            (Err(error), FormMode::Create) => self.toast_error(&error, "Failed to create note"),
            (Err(error), FormMode::Edit(_)) => self.toast_error(&error, "Failed to update note"),
        }
    }

    // ---------------------------------------------------------------------
    // Modal
    // ---------------------------------------------------------------------

    pub fn open_modal(&self, id: NoteId) -> Option<ModalSession> {
        self.state.with_mut(|state| state.open_modal(id))
    }

    pub fn close_modal(&self, session: ModalSession) -> bool {
        self.state.with_mut(|state| state.close_modal(session))
    }

    /// Flip a note's favorite flag, close the modal and reload the grid.
    pub async fn toggle_favorite(&self, id: NoteId) {
        match self.backend.toggle_favorite(id).await {
            Ok(toggle) => {
                self.state.with_mut(|state| {
                    state.set_favorite(id, toggle.is_favorite);
                    state.close_active_modal();
                });
                let message = if toggle.is_favorite {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                };
                self.toast(ToastKind::Success, message);
                self.load_notes().await;
            }
            Err(error) => self.toast_error(&error, "Failed to update favorite"),
        }
    }

    /// Delete a note the user has already confirmed.
    pub async fn delete_note(&self, id: NoteId) {
        match self.backend.delete_note(id).await {
            Ok(()) => {
                tracing::info!("Deleted note {}", id);
                self.state.with_mut(AppState::close_active_modal);
                self.toast(ToastKind::Success, "Note deleted successfully!");
                self.reload_notes_and_stats().await;
            }
            Err(error) => self.toast_error(&error, "Failed to delete note"),
        }
    }

    // ---------------------------------------------------------------------
    // Categories
    // ---------------------------------------------------------------------

    /// Create a category, then refresh selectors and counters.
    pub async fn create_category(&self, name: &str) -> bool {
        let Some(draft) = CategoryDraft::named(name) else {
            self.toast(ToastKind::Error, "Category name is required");
            return false;
        };

        match self.backend.create_category(&draft).await {
            Ok(category) => {
                tracing::info!("Created category {}", category.name);
                self.toast(
                    ToastKind::Success,
                    format!("Category \"{}\" created", category.name),
                );
                tokio::join!(self.load_categories(), self.load_stats());
                true
            }
            Err(error) => {
                self.toast_error(&error, "Failed to create category");
                false
            }
        }
    }

    // ---------------------------------------------------------------------
    // Misc
    // ---------------------------------------------------------------------

    pub fn dismiss_toast(&self, id: ToastId) -> bool {
        self.state.with_mut(|state| state.dismiss_toast(id))
    }

    pub fn apply_shortcut(&self, shortcut: Shortcut) -> ShortcutAction {
        self.state.with_mut(|state| state.apply_shortcut(shortcut))
    }
}

#[cfg(test)]
mod tests;
