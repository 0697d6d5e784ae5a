//! Category model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::util::normalize_text_option;

/// Badge color the service assigns when none is given.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

/// A named label grouping notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/categories` and `PUT /api/categories/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CategoryDraft {
    /// Draft with a trimmed name; `None` when the name is blank.
    pub fn named(name: &str) -> Option<Self> {
        normalize_text_option(Some(name.to_string())).map(|name| Self {
            name,
            description: None,
            color: None,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = normalize_text_option(description);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = normalize_text_option(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_rejects_blank_names() {
        assert!(CategoryDraft::named("   ").is_none());
        assert_eq!(CategoryDraft::named(" work ").unwrap().name, "work");
    }

    #[test]
    fn draft_omits_unset_optional_fields() {
        let draft = CategoryDraft::named("work").unwrap();
        assert_eq!(
            serde_json::to_string(&draft).unwrap(),
            r##"{"name":"work"}"##
        );

        let colored = draft.with_color(Some("#ff0000".to_string()));
        assert_eq!(
            serde_json::to_string(&colored).unwrap(),
            r##"{"name":"work","color":"#ff0000"}"##
        );
    }

    #[test]
    fn category_defaults_color() {
        let category: Category = serde_json::from_str(r#"{"id": 3, "name": "ideas"}"#).unwrap();
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(category.created_at, None);
    }
}
