use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use inboxkit_core::models::{CannedResponse, Folder, Message, Question};
use inboxkit_core::{Record, SelectAllState, SortKey};
use serde::Serialize;

/// Screen-specific columns on top of what every record has.
pub trait RowDisplay: Record {
    /// Secondary column: sender, category or question kind.
    fn detail(&self) -> String;

    fn is_unread(&self) -> bool {
        false
    }
}

impl RowDisplay for Message {
    fn detail(&self) -> String {
        match self.folder {
            Folder::Inbox => self.sender.clone(),
            Folder::Sent => format!("to {}", self.recipients.join(", ")),
        }
    }

    fn is_unread(&self) -> bool {
        Message::is_unread(self)
    }
}

impl RowDisplay for CannedResponse {
    fn detail(&self) -> String {
        self.category.clone()
    }
}

impl RowDisplay for Question {
    fn detail(&self) -> String {
        format!("{} / {}", self.kind.name(), self.status.name())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: String,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub pinned: bool,
    pub unread: bool,
    pub selected: bool,
}

impl Row {
    pub fn new<R: RowDisplay>(record: &R, selected: bool) -> Self {
        Self {
            id: record.id().to_string(),
            title: record.title().to_string(),
            detail: record.detail(),
            timestamp: record.timestamp(),
            pinned: record.is_pinned(),
            unread: record.is_unread(),
            selected,
        }
    }
}

/// A rendered page of one screen, plus the state of its controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub screen: String,
    pub query: String,
    pub filter: String,
    pub sort_key: SortKey,
    /// One-based
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub checkbox_mode: bool,
    pub select_all: SelectAllState,
    pub selected: Vec<String>,
    pub rows: Vec<Row>,
}

impl Listing {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize listing")
    }

    /// Plain-text table for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let header_box = match self.select_all {
            SelectAllState::Checked => "[x] ",
            SelectAllState::Indeterminate => "[-] ",
            SelectAllState::Unchecked => "[ ] ",
        };
        let _ = writeln!(
            out,
            "{}{} · {} · {}{}",
            if self.checkbox_mode { header_box } else { "" },
            self.screen,
            self.filter,
            self.sort_key.label(),
            if self.query.is_empty() {
                String::new()
            } else {
                format!(" · \"{}\"", self.query)
            }
        );

        if self.rows.is_empty() {
            let _ = writeln!(out, "  (no results)");
        }
        for row in &self.rows {
            let checkbox = match (self.checkbox_mode, row.selected) {
                (false, _) => "",
                (true, true) => "[x] ",
                (true, false) => "[ ] ",
            };
            let when = row
                .timestamp
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".repeat(16));
            let _ = writeln!(
                out,
                "{}{}{} {:<8} {}  {}  ({})",
                checkbox,
                if row.pinned { '*' } else { ' ' },
                if row.unread { '•' } else { ' ' },
                row.id,
                when,
                row.title,
                row.detail
            );
        }

        let _ = write!(
            out,
            "page {}/{} · {} total",
            self.page, self.page_count, self.total
        );
        if self.checkbox_mode {
            let _ = write!(out, " · {} selected", self.selected.len());
        }
        out
    }
}
