//! Access to the notes REST service.
//!
//! [`NotesBackend`] is the seam the controller talks through; [`HttpBackend`]
//! is the production implementation.

mod http;

pub use http::HttpBackend;

use crate::error::Result;
use crate::models::{Category, CategoryDraft, FavoriteToggle, Note, NoteDraft, NoteId, Stats};

/// Operations offered by the notes service.
///
/// Futures are not required to be `Send`: the browser build runs on a
/// single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait NotesBackend {
    /// `GET /api/stats`
    async fn stats(&self) -> Result<Stats>;

    /// `GET /api/categories`
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// `POST /api/categories`
    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category>;

    /// `PUT /api/categories/{id}`
    async fn update_category(&self, id: i64, draft: &CategoryDraft) -> Result<Category>;

    /// `DELETE /api/categories/{id}`
    async fn delete_category(&self, id: i64) -> Result<()>;

    /// `GET /api/notes`, optionally filtered by category name
    async fn list_notes(&self, category: Option<&str>) -> Result<Vec<Note>>;

    /// `GET /api/notes/favorites`
    async fn list_favorites(&self) -> Result<Vec<Note>>;

    /// `GET /api/notes/{id}`
    async fn get_note(&self, id: NoteId) -> Result<Note>;

    /// `POST /api/notes`
    async fn create_note(&self, draft: &NoteDraft) -> Result<Note>;

    /// `PUT /api/notes/{id}`
    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<Note>;

    /// `DELETE /api/notes/{id}`
    async fn delete_note(&self, id: NoteId) -> Result<()>;

    /// `POST /api/notes/{id}/favorite`
    async fn toggle_favorite(&self, id: NoteId) -> Result<FavoriteToggle>;

    /// `GET /api/search?q=`
    async fn search(&self, query: &str) -> Result<Vec<Note>>;
}
