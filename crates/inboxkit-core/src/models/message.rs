use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ViewConfig;
use crate::controls::NamedControl;
use crate::filter::{DateRange, ListFilter};
use crate::record::Record;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Folder {
    #[default]
    Inbox,
    Sent,
}

/// A message shown in the inbox or sent box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub folder: Folder,
    pub sender: String,
    #[serde(default)]
    pub recipients: Vec<String>,
    pub subject: String,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub pinned: bool,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// An unread inbox message with no recipients, tags or body.
    pub fn received(
        id: &str,
        sender: &str,
        subject: &str,
        preview: &str,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            folder: Folder::Inbox,
            sender: sender.to_string(),
            recipients: Vec::new(),
            subject: subject.to_string(),
            preview: preview.to_string(),
            body: String::new(),
            tags: Vec::new(),
            is_read: false,
            pinned: false,
            sent_at,
        }
    }

    pub fn is_unread(&self) -> bool {
        !self.is_read
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }

    pub fn mark_unread(&mut self) {
        self.is_read = false;
    }

    pub fn toggle_pin(&mut self) {
        self.pinned = !self.pinned;
    }
}

impl Record for Message {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.sent_at)
    }

    fn title(&self) -> &str {
        &self.subject
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.sender.as_str(), self.subject.as_str(), self.preview.as_str()];
        fields.extend(self.recipients.iter().map(String::as_str));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }
}

/// A message being written on the compose screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDraft {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MessageDraft {
    /// Turn the draft into a read sent-box message with a fresh id.
    ///
    /// The preview is the first line of the body, cut at 120 characters.
    pub fn into_sent(self, sender: &str, sent_at: DateTime<Utc>) -> Message {
        let preview: String = self
            .body
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(120)
            .collect();
        Message {
            id: Uuid::new_v4().to_string(),
            folder: Folder::Sent,
            sender: sender.to_string(),
            recipients: self.to,
            subject: self.subject,
            preview,
            body: self.body,
            tags: self.tags,
            is_read: true,
            pinned: false,
            sent_at,
        }
    }
}

/// Filter control shared by the inbox and the sent box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MessageFilter {
    #[default]
    All,
    Unread,
    Pinned,
    DateRange(DateRange),
}

impl MessageFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Pinned => "Pinned",
            Self::DateRange(_) => "Date range",
        }
    }

    /// Next value of the filter dropdown, wrapping back to `All`.
    pub fn cycle_next(&self) -> Self {
        match self {
            Self::All => Self::Unread,
            Self::Unread => Self::Pinned,
            Self::Pinned => Self::DateRange(DateRange::unset()),
            Self::DateRange(_) => Self::All,
        }
    }
}

impl NamedControl for MessageFilter {
    const KIND: &'static str = "message filter";

    fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
            Self::Pinned => "pinned",
            Self::DateRange(_) => "dateRange",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "unread" => Some(Self::Unread),
            "pinned" => Some(Self::Pinned),
            "dateRange" => Some(Self::DateRange(DateRange::unset())),
            _ => None,
        }
    }
}

impl ListFilter<Message> for MessageFilter {
    fn matches(&self, record: &Message, config: &ViewConfig) -> bool {
        match self {
            Self::All => true,
            Self::Unread => record.is_unread(),
            Self::Pinned => record.pinned,
            Self::DateRange(range) => range.contains(record.timestamp(), config.unset_date_range),
        }
    }
}
