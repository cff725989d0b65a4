use chrono::{DateTime, Utc};

use crate::search;

/// A single row in a list screen: a message, canned response or question.
pub trait Record {
    /// Unique within a store and never changed for the record's lifetime.
    fn id(&self) -> &str;

    /// Timestamp used by `newest`/`oldest` and date-range filters.
    fn timestamp(&self) -> Option<DateTime<Utc>>;

    /// Title or subject used by the title sort keys.
    fn title(&self) -> &str;

    /// Fields eligible for substring search.
    fn search_fields(&self) -> Vec<&str>;

    fn is_pinned(&self) -> bool {
        false
    }

    /// Lowercase-folded concatenation of `search_fields`, rebuilt on every call.
    fn searchable_text(&self) -> String {
        search::searchable_text(self.search_fields())
    }
}
