//! Application state owned by the view controller.
//!
//! All mutation goes through methods here so the invariants hold regardless of
//! which front end drives it: caches are replaced wholesale, the list source is
//! a single value, and a submitting form cannot be closed or have the list
//! source switched underneath it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::models::{format_date, Category, Note, NoteId, Stats, DEFAULT_CATEGORY};
use crate::validation::{FieldErrors, FormField, NoteForm};

use super::sequence::{RequestSequence, RequestToken};
use super::shortcuts::{Shortcut, ShortcutAction};
use super::toast::{ToastId, ToastKind, ToastQueue};

/// Label of the editor's sentinel category option
pub const GENERAL_OPTION_LABEL: &str = "General";
/// Label of the filter's sentinel category option
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Which endpoint feeds the note grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListSource {
    #[default]
    All,
    Category(String),
    Favorites,
    Search(String),
}

impl ListSource {
    /// Request line this source loads from.
    pub fn endpoint(&self) -> String {
        match self {
            Self::All => "GET /api/notes".to_string(),
            Self::Category(name) => {
                format!("GET /api/notes?category={}", urlencoding::encode(name))
            }
            Self::Favorites => "GET /api/notes/favorites".to_string(),
            Self::Search(query) => format!("GET /api/search?q={}", urlencoding::encode(query)),
        }
    }

    fn empty_message(&self) -> String {
        match self {
            Self::All => "No notes yet. Create your first note!".to_string(),
            Self::Category(name) => format!("No notes in \"{name}\"."),
            Self::Favorites => "No favorite notes yet.".to_string(),
            Self::Search(query) => format!("No notes match \"{query}\"."),
        }
    }
}

/// Whether the form creates a note or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(NoteId),
}

/// Open form: mode, current input, inline errors, and whether a save is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
    fields: NoteForm,
    errors: FieldErrors,
    submitting: bool,
}

impl FormState {
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    pub const fn fields(&self) -> &NoteForm {
        &self.fields
    }

    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub const fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New Note",
            FormMode::Edit(_) => "Edit Note",
        }
    }

    pub const fn submit_label(&self) -> &'static str {
        match (self.submitting, self.mode) {
            (true, _) => "Saving...",
            (false, FormMode::Create) => "Create Note",
            (false, FormMode::Edit(_)) => "Update Note",
        }
    }
}

/// Result of trying to start a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation passed; the form is now submitting this payload
    Ready {
        mode: FormMode,
        draft: crate::models::NoteDraft,
    },
    /// Validation failed; errors are on the form and no request should be made
    Invalid,
    /// No form is open
    NotOpen,
    /// A submission is already in flight
    InFlight,
}

/// Handle returned when the detail modal opens.
///
/// Closing through the session only closes the modal it was issued for, so a
/// late close from a previous opening cannot dismiss a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalSession {
    generation: u64,
    note_id: NoteId,
}

impl ModalSession {
    pub const fn note_id(&self) -> NoteId {
        self.note_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenModal {
    session: ModalSession,
    note: Note,
}

/// One rendered note card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub updated: String,
}

impl From<&Note> for NoteCard {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            summary: note.card_summary(),
            category: note.category.clone(),
            updated: format_date(note.last_updated()),
        }
    }
}

/// What the note area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty(String),
    Grid(Vec<NoteCard>),
}

/// An `<option>` in a category selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Outcome of applying a list response
#[derive(Debug)]
pub enum LoadOutcome {
    /// Cache replaced with this many notes
    Applied(usize),
    /// A newer request was issued; the response was dropped
    Stale,
    Failed(Error),
}

/// Everything the view renders from
#[derive(Debug, Clone, Default)]
pub struct AppState {
    notes: Vec<Note>,
    categories: Vec<Category>,
    stats: Stats,
    notes_loading: bool,
    list_source: ListSource,
    /// Source to return to when favorites view is switched off
    before_favorites: Option<ListSource>,
    list_sequence: RequestSequence,
    form: Option<FormState>,
    modal: Option<OpenModal>,
    modal_generation: u64,
    toasts: ToastQueue,
}

impl AppState {
    // ---------------------------------------------------------------------
    // Read access
    // ---------------------------------------------------------------------

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    pub const fn is_loading(&self) -> bool {
        self.notes_loading
    }

    pub const fn list_source(&self) -> &ListSource {
        &self.list_source
    }

    pub const fn is_favorite_view(&self) -> bool {
        matches!(self.list_source, ListSource::Favorites)
    }

    /// Category the list is filtered by, if any.
    pub fn category_filter(&self) -> Option<&str> {
        match &self.list_source {
            ListSource::Category(name) => Some(name),
            _ => None,
        }
    }

    pub fn search_query(&self) -> Option<&str> {
        match &self.list_source {
            ListSource::Search(query) => Some(query),
            _ => None,
        }
    }

    pub const fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub const fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn is_editing(&self) -> bool {
        matches!(
            self.form.as_ref().map(FormState::mode),
            Some(FormMode::Edit(_))
        )
    }

    pub fn is_submitting(&self) -> bool {
        self.form.as_ref().is_some_and(FormState::is_submitting)
    }

    /// The open modal's session and note.
    pub fn modal(&self) -> Option<(ModalSession, &Note)> {
        self.modal.as_ref().map(|open| (open.session, &open.note))
    }

    /// Note shown in the modal, or being edited in the form.
    pub fn current_note_id(&self) -> Option<NoteId> {
        if let Some(open) = &self.modal {
            return Some(open.session.note_id);
        }
        match self.form.as_ref().map(FormState::mode) {
            Some(FormMode::Edit(id)) => Some(id),
            _ => None,
        }
    }

    pub const fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn list_view(&self) -> ListView {
        if self.notes_loading {
            return ListView::Loading;
        }
        if self.notes.is_empty() {
            return ListView::Empty(self.list_source.empty_message());
        }
        ListView::Grid(self.notes.iter().map(NoteCard::from).collect())
    }

    /// Options for the editor's category picker, "General" first.
    pub fn editor_category_options(&self) -> Vec<SelectOption> {
        self.category_options(DEFAULT_CATEGORY, GENERAL_OPTION_LABEL)
    }

    /// Options for the list filter, "All Categories" first.
    pub fn filter_category_options(&self) -> Vec<SelectOption> {
        self.category_options("", ALL_CATEGORIES_LABEL)
    }

    fn category_options(&self, sentinel_value: &str, sentinel_label: &str) -> Vec<SelectOption> {
        let sentinel = SelectOption {
            value: sentinel_value.to_string(),
            label: sentinel_label.to_string(),
        };
        std::iter::once(sentinel)
            .chain(
                self.categories
                    .iter()
                    .filter(|category| !category.name.eq_ignore_ascii_case(sentinel_value))
                    .map(|category| SelectOption {
                        value: category.name.clone(),
                        label: category.name.clone(),
                    }),
            )
            .collect()
    }

    // ---------------------------------------------------------------------
    // Toasts
    // ---------------------------------------------------------------------

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        self.toasts.push(kind, message)
    }

    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    // ---------------------------------------------------------------------
    // Loaders
    // ---------------------------------------------------------------------

    /// Replace the counters; a failure zeroes them.
    pub fn apply_stats(&mut self, result: crate::Result<Stats>) -> crate::Result<()> {
        match result {
            Ok(stats) => {
                self.stats = stats;
                Ok(())
            }
            Err(error) => {
                self.stats = Stats::default();
                Err(error)
            }
        }
    }

    /// Replace the category cache; a failure keeps the previous snapshot.
    pub fn apply_categories(&mut self, result: crate::Result<Vec<Category>>) -> crate::Result<()> {
        self.categories = result?;
        Ok(())
    }

    /// Start a load of the current list source.
    pub fn begin_list_load(&mut self) -> (RequestToken, ListSource) {
        self.notes_loading = true;
        (self.list_sequence.issue(), self.list_source.clone())
    }

    /// Apply a list response unless a newer load has been issued since.
    pub fn finish_list_load(
        &mut self,
        token: RequestToken,
        result: crate::Result<Vec<Note>>,
    ) -> LoadOutcome {
        if !self.list_sequence.is_current(token) {
            tracing::debug!("Discarding stale list response {:?}", token);
            return LoadOutcome::Stale;
        }
        self.notes_loading = false;
        match result {
            Ok(notes) => {
                let count = notes.len();
                self.notes = notes;
                LoadOutcome::Applied(count)
            }
            Err(error) => LoadOutcome::Failed(error),
        }
    }

    // ---------------------------------------------------------------------
    // List source
    // ---------------------------------------------------------------------

    /// Filter by category, or clear the filter with `None`. Leaves favorites view.
    pub fn select_category(&mut self, category: Option<String>) {
        self.before_favorites = None;
        self.list_source = match category.map(|name| name.trim().to_string()) {
            Some(name) if !name.is_empty() => ListSource::Category(name),
            _ => ListSource::All,
        };
    }

    /// Enter favorites view, or leave it for whichever source was active before.
    ///
    /// Refused (returns `false`) while a form submission is in flight.
    pub fn toggle_favorites_view(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        if self.is_favorite_view() {
            self.list_source = self.before_favorites.take().unwrap_or_default();
        } else {
            let previous = std::mem::replace(&mut self.list_source, ListSource::Favorites);
            self.before_favorites = Some(previous);
        }
        true
    }

    /// Show search results for `query`; a blank query shows the unfiltered list.
    pub fn set_search(&mut self, query: &str) {
        self.before_favorites = None;
        let query = query.trim();
        self.list_source = if query.is_empty() {
            ListSource::All
        } else {
            ListSource::Search(query.to_string())
        };
    }

    // ---------------------------------------------------------------------
    // Form
    // ---------------------------------------------------------------------

    /// Open an empty create form. No-op when a form is already open.
    pub fn open_create_form(&mut self) -> bool {
        if self.form.is_some() {
            return false;
        }
        self.form = Some(FormState {
            mode: FormMode::Create,
            fields: NoteForm::default(),
            errors: FieldErrors::default(),
            submitting: false,
        });
        true
    }

    /// A create form is open with input that would be lost by replacing it.
    pub fn has_unsaved_draft(&self) -> bool {
        self.form
            .as_ref()
            .is_some_and(|form| form.mode == FormMode::Create && !form.fields.is_blank())
    }

    /// Open the form prefilled with a freshly fetched note and close the modal.
    ///
    /// Refused while a save is in flight or a create form holds input.
    pub fn open_edit_form(&mut self, note: &Note) -> bool {
        if self.is_submitting() || self.has_unsaved_draft() {
            return false;
        }
        self.modal = None;
        self.form = Some(FormState {
            mode: FormMode::Edit(note.id),
            fields: NoteForm::from_note(note),
            errors: FieldErrors::default(),
            submitting: false,
        });
        true
    }

    pub fn update_form_field(&mut self, field: FormField, value: String) {
        if let Some(form) = self.form.as_mut().filter(|form| !form.submitting) {
            form.fields.set(field, value);
            form.errors.clear(field);
        }
    }

    /// Validate the open form and, when valid, mark it submitting.
    pub fn begin_submit(&mut self) -> SubmitStart {
        let Some(form) = self.form.as_mut() else {
            return SubmitStart::NotOpen;
        };
        if form.submitting {
            return SubmitStart::InFlight;
        }
        match form.fields.validate() {
            Ok(draft) => {
                form.errors = FieldErrors::default();
                form.submitting = true;
                SubmitStart::Ready {
                    mode: form.mode,
                    draft,
                }
            }
            Err(errors) => {
                form.errors = errors;
                self.toasts
                    .push(ToastKind::Error, "Please fix the highlighted fields");
                SubmitStart::Invalid
            }
        }
    }

    /// Close the form after a successful save, or reopen it with input kept.
    pub fn finish_submit(&mut self, result: &crate::Result<Note>) {
        match result {
            Ok(_) => self.form = None,
            Err(_) => {
                if let Some(form) = self.form.as_mut() {
                    form.submitting = false;
                }
            }
        }
    }

    /// Discard the form. Refused while a submission is in flight.
    pub fn close_form(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.form.take().is_some()
    }

    // ---------------------------------------------------------------------
    // Modal
    // ---------------------------------------------------------------------

    /// Show a cached note in the detail modal.
    pub fn open_modal(&mut self, id: NoteId) -> Option<ModalSession> {
        let note = self.note(id)?.clone();
        self.modal_generation += 1;
        let session = ModalSession {
            generation: self.modal_generation,
            note_id: id,
        };
        self.modal = Some(OpenModal { session, note });
        Some(session)
    }

    /// Close the modal opened with `session`; stale sessions are ignored.
    pub fn close_modal(&mut self, session: ModalSession) -> bool {
        if self.modal.as_ref().map(|open| open.session) == Some(session) {
            self.modal = None;
            true
        } else {
            false
        }
    }

    /// Close whatever modal is open (Escape, backdrop click).
    pub fn close_active_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    /// Reflect a favorite toggle in the caches.
    pub fn set_favorite(&mut self, id: NoteId, is_favorite: bool) {
        for note in self.notes.iter_mut().filter(|note| note.id == id) {
            note.is_favorite = is_favorite;
        }
        if let Some(open) = self.modal.as_mut().filter(|open| open.note.id == id) {
            open.note.is_favorite = is_favorite;
        }
    }

    // ---------------------------------------------------------------------
    // Shortcuts
    // ---------------------------------------------------------------------

    /// Apply the state side of a shortcut.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) -> ShortcutAction {
        match shortcut {
            Shortcut::Dismiss => {
                if !self.close_active_modal() {
                    self.close_form();
                }
                ShortcutAction::Handled
            }
            Shortcut::NewNote => {
                self.open_create_form();
                ShortcutAction::Handled
            }
            Shortcut::FocusSearch => ShortcutAction::FocusSearch,
        }
    }
}

/// Shared access to [`AppState`] without holding a borrow across awaits.
///
/// Implementations hand out the state only for the duration of the closure.
pub trait StateCell {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn with_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateCell for RefCell<AppState> {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T: StateCell + ?Sized> StateCell for Rc<T> {
    fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        (**self).with(f)
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        (**self).with_mut(f)
    }
}
