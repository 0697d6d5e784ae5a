//! Note model

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::timestamp;
use crate::util::{ellipsize, normalize_text_option};

/// Category assigned when the editor leaves the picker on its sentinel option.
pub const DEFAULT_CATEGORY: &str = "general";

/// Characters of content shown on a card when the server sent no summary.
pub const CARD_SUMMARY_CHARS: usize = 150;

/// Length the server trims generated summaries to.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Server-assigned note identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A note as returned by the notes service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Server-generated excerpt; list endpoints may send it instead of relying on content
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    /// Comma-separated tags
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Null until the note is first updated
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Text shown on a note card.
    ///
    /// Uses the server summary when present, otherwise the first
    /// [`CARD_SUMMARY_CHARS`] characters of the content.
    #[must_use]
    pub fn card_summary(&self) -> String {
        normalize_text_option(self.summary.clone())
            .unwrap_or_else(|| ellipsize(&self.content, CARD_SUMMARY_CHARS))
    }

    #[must_use]
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.as_deref().map(parse_tags).unwrap_or_default()
    }

    /// Last modification time, falling back to creation for never-edited notes.
    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Option<String>,
}

impl NoteDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: default_category(),
            tags: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category =
            normalize_text_option(Some(category.into())).unwrap_or_else(default_category);
        self
    }

    /// Blank tag strings are sent as `null`.
    #[must_use]
    pub fn with_tags(mut self, tags: Option<String>) -> Self {
        self.tags = normalize_text_option(tags);
        self
    }
}

/// Localized calendar date used on cards and in the detail view.
#[must_use]
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%b %-d, %Y")
        .to_string()
}

/// Split a comma-separated tag string, dropping blanks.
#[must_use]
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Excerpt the service stores when a note is saved without one.
///
/// Content within `max_chars` is returned unchanged. Longer content is cut at
/// the last sentence end when that keeps more than 70% of the budget,
/// otherwise it is hard-truncated and marked with `...`.
#[must_use]
pub fn generate_summary(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }

    let truncated: String = content.chars().take(max_chars).collect();
    let last_sentence_end = truncated
        .char_indices()
        .rev()
        .find(|(_, ch)| matches!(ch, '.' | '!' | '?'))
        .map(|(byte_idx, _)| (byte_idx, truncated[..byte_idx].chars().count()));

    match last_sentence_end {
        // keep the sentence when it retains most of the budget
        Some((byte_idx, char_idx)) if char_idx * 10 > max_chars * 7 => {
            truncated[..=byte_idx].to_string()
        }
        _ => format!("{truncated}..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_note() -> Note {
        serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Ownership",
                "content": "Every value has a single owner.",
                "summary": null,
                "category": "rust",
                "tags": "lang, memory ,",
                "is_favorite": false,
                "is_public": false,
                "created_at": "2024-03-01T10:15:00",
                "updated_at": null
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_note_id_parse() {
        let id: NoteId = " 42 ".parse().unwrap();
        assert_eq!(id, NoteId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_decodes_naive_timestamps_as_utc() {
        let note = sample_note();
        assert_eq!(note.created_at.to_rfc3339(), "2024-03-01T10:15:00+00:00");
        assert_eq!(note.updated_at, None);
        assert_eq!(note.last_updated(), note.created_at);
    }

    #[test]
    fn test_note_defaults_missing_fields() {
        let note: Note = serde_json::from_str(
            r#"{"id": 1, "title": "t", "content": "c", "created_at": "2024-03-01T10:15:00Z"}"#,
        )
        .unwrap();
        assert_eq!(note.category, DEFAULT_CATEGORY);
        assert!(!note.is_favorite);
        assert_eq!(note.tags, None);
    }

    #[test]
    fn test_card_summary_prefers_server_summary() {
        let mut note = sample_note();
        note.summary = Some("Server excerpt".to_string());
        assert_eq!(note.card_summary(), "Server excerpt");

        note.summary = Some("   ".to_string());
        assert_eq!(note.card_summary(), "Every value has a single owner.");
    }

    #[test]
    fn test_card_summary_truncates_long_content() {
        let mut note = sample_note();
        note.content = "x".repeat(CARD_SUMMARY_CHARS + 20);
        let summary = note.card_summary();
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), CARD_SUMMARY_CHARS + 3);
    }

    #[test]
    fn test_tag_list() {
        assert_eq!(sample_note().tag_list(), vec!["lang", "memory"]);
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_draft_normalizes_blank_fields() {
        let draft = NoteDraft::new("Title", "Some content")
            .with_category("  ")
            .with_tags(Some("   ".to_string()));
        assert_eq!(draft.category, DEFAULT_CATEGORY);
        assert_eq!(draft.tags, None);

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["tags"], serde_json::Value::Null);
    }

    #[test]
    fn test_generate_summary_short_content_unchanged() {
        assert_eq!(generate_summary("Short note.", 200), "Short note.");
    }

    #[test]
    fn test_generate_summary_cuts_at_late_sentence_end() {
        let content = format!("{}. And then more text follows", "a".repeat(80));
        let summary = generate_summary(&content, 100);
        assert_eq!(summary, format!("{}.", "a".repeat(80)));
    }

    #[test]
    fn test_generate_summary_hard_truncates_without_sentence() {
        let content = format!("Hi. {}", "b".repeat(150));
        let summary = generate_summary(&content, 100);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), 103);
    }
}
