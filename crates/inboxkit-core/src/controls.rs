use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::UnknownControlPolicy;
use crate::error::ViewError;
use crate::selection::SelectionTracker;
use crate::sort::SortKey;

/// A closed set of UI control values addressable by a stable name.
pub trait NamedControl: Sized + Default {
    /// Human-readable control kind used in errors and logs.
    const KIND: &'static str;

    fn name(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;
}

/// Resolve a raw control name, applying the unknown-value policy.
pub fn resolve_control<T: NamedControl>(
    raw: &str,
    policy: UnknownControlPolicy,
) -> Result<T, ViewError> {
    if let Some(control) = T::from_name(raw.trim()) {
        return Ok(control);
    }
    match policy {
        UnknownControlPolicy::Fallback => {
            let fallback = T::default();
            warn!(
                kind = T::KIND,
                name = raw,
                fallback = fallback.name(),
                "Unknown control value, using default"
            );
            Ok(fallback)
        }
        UnknownControlPolicy::Reject => Err(ViewError::UnknownControl {
            kind: T::KIND,
            name: raw.to_string(),
        }),
    }
}

/// Everything a list screen feeds the view-model, as one plain value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewControls<F> {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filter: F,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(flatten)]
    pub selection: SelectionTracker,
}

impl<F> ViewControls<F> {
    pub fn new(filter: F) -> Self {
        Self {
            query: String::new(),
            filter,
            sort_key: SortKey::default(),
            selection: SelectionTracker::new(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageFilter;

    #[test]
    fn test_resolve_known_name() {
        let key: SortKey = resolve_control("titleDesc", UnknownControlPolicy::Reject).unwrap();
        assert_eq!(key, SortKey::TitleDesc);
        let key: SortKey = resolve_control("  oldest ", UnknownControlPolicy::Reject).unwrap();
        assert_eq!(key, SortKey::Oldest);
    }

    #[test]
    fn test_unknown_sort_falls_back_to_newest() {
        let key: SortKey = resolve_control("loudest", UnknownControlPolicy::Fallback).unwrap();
        assert_eq!(key, SortKey::Newest);
    }

    #[test]
    fn test_unknown_filter_falls_back_to_all() {
        let filter: MessageFilter =
            resolve_control("starred", UnknownControlPolicy::Fallback).unwrap();
        assert_eq!(filter, MessageFilter::All);
    }

    #[test]
    fn test_unknown_control_rejected() {
        let err = resolve_control::<SortKey>("loudest", UnknownControlPolicy::Reject).unwrap_err();
        match err {
            ViewError::UnknownControl { kind, name } => {
                assert_eq!(kind, "sort key");
                assert_eq!(name, "loudest");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_controls_serialize_flat() {
        let mut controls = ViewControls::new(MessageFilter::Unread)
            .with_query("invoice")
            .with_sort_key(SortKey::TitleAsc);
        controls.selection.toggle("7");

        let value = serde_json::to_value(&controls).unwrap();
        assert_eq!(value["query"], "invoice");
        assert_eq!(value["filter"]["kind"], "unread");
        assert_eq!(value["sortKey"], "titleAsc");
        assert_eq!(value["checkboxMode"], true);
        assert_eq!(value["selected"][0], "7");

        let back: ViewControls<MessageFilter> = serde_json::from_value(value).unwrap();
        assert_eq!(back, controls);
    }

    #[test]
    fn test_controls_deserialize_defaults() {
        let controls: ViewControls<MessageFilter> = serde_json::from_str("{}").unwrap();
        assert_eq!(controls, ViewControls::new(MessageFilter::All));
    }
}
