//! Client-side validation for the note form.
//!
//! Runs synchronously before any request is made; a form that fails here
//! never reaches the network.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Note, NoteDraft, DEFAULT_CATEGORY};

pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_CONTENT_CHARS: usize = 10;

/// Which form field an error or edit refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Content,
    Category,
    Tags,
}

/// Raw text currently in the note form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    /// Picker value; blank means the "General" sentinel
    pub category: String,
    pub tags: String,
}

impl NoteForm {
    /// Form prefilled from a full note, for editing.
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
            tags: note.tags.clone().unwrap_or_default(),
        }
    }

    /// Nothing but whitespace has been typed.
    pub fn is_blank(&self) -> bool {
        [&self.title, &self.content, &self.category, &self.tags]
            .iter()
            .all(|value| value.trim().is_empty())
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Content => self.content = value,
            FormField::Category => self.category = value,
            FormField::Tags => self.tags = value,
        }
    }

    /// Check field rules and build the request payload.
    pub fn validate(&self) -> Result<NoteDraft, FieldErrors> {
        let title = self.title.trim();
        let content = self.content.trim();

        let errors = FieldErrors {
            title: check_length(title, "Title", MIN_TITLE_CHARS),
            content: check_length(content, "Content", MIN_CONTENT_CHARS),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let category = if self.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category.trim().to_string()
        };

        Ok(NoteDraft::new(title, content)
            .with_category(category)
            .with_tags(Some(self.tags.clone())))
    }
}

fn check_length(value: &str, label: &str, min_chars: usize) -> Option<String> {
    if value.is_empty() {
        Some(format!("{label} is required"))
    } else if value.chars().count() < min_chars {
        Some(format!("{label} must be at least {min_chars} characters"))
    } else {
        None
    }
}

/// Inline messages for fields that failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl FieldErrors {
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Error text for a field; `None` means the field is valid.
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => self.title.as_deref(),
            FormField::Content => self.content.as_deref(),
            FormField::Category | FormField::Tags => None,
        }
    }

    /// Editing a field clears its stale message.
    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Title => self.title = None,
            FormField::Content => self.content = None,
            FormField::Category | FormField::Tags => {}
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = [self.title.as_deref(), self.content.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}
