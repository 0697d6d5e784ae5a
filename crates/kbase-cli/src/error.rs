use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] kbase_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note content provided")]
    EmptyContent,
    #[error("Edited note content cannot be empty")]
    EmptyEditedContent,
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Invalid note ID: {0}")]
    InvalidNoteId(String),
    #[error("Category name is required")]
    EmptyCategoryName,
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
    #[error("Refusing to delete without confirmation; pass --yes")]
    ConfirmationRequired,
}
