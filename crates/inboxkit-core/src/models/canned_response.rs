use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::controls::NamedControl;
use crate::filter::{DateRange, ListFilter};
use crate::record::Record;

/// Saved reply text that can be dropped into a compose window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CannedResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
    pub updated_at: DateTime<Utc>,
}

impl CannedResponse {
    pub fn toggle_pin(&mut self) {
        self.pinned = !self.pinned;
    }

    /// Replace title and body, stamping the edit time.
    pub fn edit(&mut self, title: &str, body: &str, now: DateTime<Utc>) {
        self.title = title.to_string();
        self.body = body.to_string();
        self.updated_at = now;
    }
}

impl Record for CannedResponse {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.updated_at)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.body.as_str(), self.category.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CannedResponseFilter {
    #[default]
    All,
    Pinned,
    DateRange(DateRange),
}

impl NamedControl for CannedResponseFilter {
    const KIND: &'static str = "canned response filter";

    fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pinned => "pinned",
            Self::DateRange(_) => "dateRange",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "pinned" => Some(Self::Pinned),
            "dateRange" => Some(Self::DateRange(DateRange::unset())),
            _ => None,
        }
    }
}

impl ListFilter<CannedResponse> for CannedResponseFilter {
    fn matches(&self, record: &CannedResponse, config: &ViewConfig) -> bool {
        match self {
            Self::All => true,
            Self::Pinned => record.pinned,
            Self::DateRange(range) => range.contains(record.timestamp(), config.unset_date_range),
        }
    }
}
