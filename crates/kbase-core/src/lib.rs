//! kbase-core - Core library for the kbase notes client
//!
//! This crate contains the shared models, the HTTP client for the notes
//! service, form validation and the view controller used by the web UI and
//! the CLI.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod util;
pub mod validation;

pub use api::{HttpBackend, NotesBackend};
pub use config::ClientConfig;
pub use controller::{AppState, Controller, StateCell};
pub use error::{Error, Result};
pub use models::{Category, CategoryDraft, Note, NoteDraft, NoteId, Stats};
