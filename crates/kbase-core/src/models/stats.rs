//! Dashboard counters

use serde::{Deserialize, Serialize};

use crate::util::pluralize;

/// Body of `GET /api/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_notes: u64,
    pub total_categories: u64,
    #[serde(default)]
    pub favorite_notes: u64,
    /// Notes created in the last seven days
    #[serde(default)]
    pub recent_notes: u64,
}

impl Stats {
    #[must_use]
    pub fn notes_label(&self) -> String {
        pluralize(self.total_notes, "note", "notes")
    }

    #[must_use]
    pub fn categories_label(&self) -> String {
        pluralize(self.total_categories, "category", "categories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_stats_render_empty_counters() {
        let stats = Stats::default();
        assert_eq!(stats.notes_label(), "0 notes");
        assert_eq!(stats.categories_label(), "0 categories");
    }

    #[test]
    fn optional_counters_default_to_zero() {
        let stats: Stats =
            serde_json::from_str(r#"{"total_notes": 1, "total_categories": 4}"#).unwrap();
        assert_eq!(stats.notes_label(), "1 note");
        assert_eq!(stats.categories_label(), "4 categories");
        assert_eq!(stats.favorite_notes, 0);
    }
}
