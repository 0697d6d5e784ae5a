//! Data models for the notes service

mod category;
mod note;
mod stats;
pub mod timestamp;

use serde::{Deserialize, Serialize};

pub use category::{Category, CategoryDraft, DEFAULT_CATEGORY_COLOR};
pub use note::{
    format_date, generate_summary, parse_tags, Note, NoteDraft, NoteId,
    CARD_SUMMARY_CHARS, DEFAULT_CATEGORY, SUMMARY_MAX_CHARS,
};
pub use stats::Stats;

/// Body of `GET /api/notes` and `GET /api/notes/favorites`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub total: usize,
}

/// Body of `GET /api/categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub total: usize,
}

/// Body of `GET /api/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub query: String,
}

/// Body of `POST /api/notes/{id}/favorite`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    #[serde(default)]
    pub message: String,
    pub is_favorite: bool,
}

/// Error body the service sends with non-success statuses.
///
/// `detail` is a plain string for business errors and a list of
/// `{loc, msg, type}` items for request validation failures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human-readable detail text, if any.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(text) if !text.trim().is_empty() => {
                Some(text.trim().to_string())
            }
            serde_json::Value::Array(items) => {
                let messages = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                    .collect::<Vec<_>>();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_reads_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Note not found"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("Note not found"));
    }

    #[test]
    fn error_body_joins_validation_items() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [
                {"loc": ["body", "title"], "msg": "field required", "type": "value_error.missing"},
                {"loc": ["body", "content"], "msg": "str type expected", "type": "type_error.str"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("field required; str type expected")
        );
    }

    #[test]
    fn error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn favorite_toggle_decodes() {
        let toggle: FavoriteToggle = serde_json::from_str(
            r#"{"message": "Favorite status updated", "is_favorite": true}"#,
        )
        .unwrap();
        assert!(toggle.is_favorite);
    }
}
