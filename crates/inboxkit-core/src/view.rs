//! The list view-model: filter, search, then sort with pinned rows first.

use std::collections::HashSet;

use tracing::debug;

use crate::config::ViewConfig;
use crate::controls::ViewControls;
use crate::filter::ListFilter;
use crate::record::Record;
use crate::search;
use crate::sort::SortKey;
use crate::store::RecordStore;

/// Compute the display order with the default config.
///
/// Pure: never mutates `records` and keeps no state between calls.
pub fn project<'a, R, F>(records: &'a [R], query: &str, filter: &F, sort_key: SortKey) -> Vec<&'a R>
where
    R: Record,
    F: ListFilter<R>,
{
    project_with(records, query, filter, sort_key, &ViewConfig::default())
}

pub fn project_with<'a, R, F>(
    records: &'a [R],
    query: &str,
    filter: &F,
    sort_key: SortKey,
    config: &ViewConfig,
) -> Vec<&'a R>
where
    R: Record,
    F: ListFilter<R>,
{
    project_indices(records, query, filter, sort_key, config)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Indices into `records` in display order.
fn project_indices<R, F>(
    records: &[R],
    query: &str,
    filter: &F,
    sort_key: SortKey,
    config: &ViewConfig,
) -> Vec<usize>
where
    R: Record,
    F: ListFilter<R>,
{
    let needle = search::normalize_query(query);
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());

    // First occurrence of an id wins, before any predicate runs.
    let (mut pinned, mut unpinned): (Vec<usize>, Vec<usize>) = records
        .iter()
        .enumerate()
        .filter(|&(_, r)| seen.insert(r.id()))
        .filter(|&(_, r)| filter.matches(r, config))
        .filter(|&(_, r)| {
            needle
                .as_deref()
                .map_or(true, |n| search::text_contains_term(&r.searchable_text(), n))
        })
        .map(|(i, _)| i)
        .partition(|&i| records[i].is_pinned());

    pinned.sort_by(|&a, &b| sort_key.compare(&records[a], &records[b]));
    unpinned.sort_by(|&a, &b| sort_key.compare(&records[a], &records[b]));
    pinned.extend(unpinned);
    pinned
}

#[derive(Debug, Clone, PartialEq)]
struct MemoKey<F> {
    query: String,
    filter: F,
    sort_key: SortKey,
    revision: u64,
}

#[derive(Debug, Clone)]
struct Memo<F> {
    key: MemoKey<F>,
    order: Vec<usize>,
}

/// `project` bound to a config, memoized on the controls and store revision.
/// The last ordering is reused until the controls or the store revision change.
#[derive(Debug, Clone)]
pub struct ListViewModel<F> {
    config: ViewConfig,
    memo: Option<Memo<F>>,
}

impl<F> Default for ListViewModel<F> {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl<F> ListViewModel<F> {
    pub fn new(config: ViewConfig) -> Self {
        Self { config, memo: None }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Drop the memoized ordering.
    pub fn invalidate(&mut self) {
        self.memo = None;
    }
}

impl<F: Clone + PartialEq> ListViewModel<F> {
    pub fn project<'a, R>(
        &mut self,
        store: &'a RecordStore<R>,
        query: &str,
        filter: &F,
        sort_key: SortKey,
    ) -> Vec<&'a R>
    where
        R: Record,
        F: ListFilter<R>,
    {
        let records = store.records();
        if !self.config.memoize {
            return project_with(records, query, filter, sort_key, &self.config);
        }

        let key = MemoKey {
            query: query.to_string(),
            filter: filter.clone(),
            sort_key,
            revision: store.revision(),
        };

        if let Some(memo) = self.memo.as_ref().filter(|m| m.key == key) {
            debug!(revision = key.revision, rows = memo.order.len(), "Projection memo hit");
            return memo.order.iter().map(|&i| &records[i]).collect();
        }

        let order = project_indices(records, query, filter, sort_key, &self.config);
        debug!(
            revision = key.revision,
            total = records.len(),
            rows = order.len(),
            "Projection recomputed"
        );
        let projected = order.iter().map(|&i| &records[i]).collect();
        self.memo = Some(Memo { key, order });
        projected
    }

    pub fn project_controls<'a, R>(
        &mut self,
        store: &'a RecordStore<R>,
        controls: &ViewControls<F>,
    ) -> Vec<&'a R>
    where
        R: Record,
        F: ListFilter<R>,
    {
        self.project(store, &controls.query, &controls.filter, controls.sort_key)
    }

    pub fn is_memoized(&self) -> bool {
        self.memo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnsetRangePolicy;
    use crate::filter::DateRange;
    use crate::models::{Message, MessageFilter};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn msg(id: &str, subject: &str, unread: bool, pinned: bool, hour: u32) -> Message {
        let mut m = Message::received(id, "Ada Lovelace", subject, "", at(hour));
        m.is_read = !unread;
        m.pinned = pinned;
        m
    }

    fn ids(list: &[&Message]) -> Vec<String> {
        list.iter().map(|m| m.id.clone()).collect()
    }

    fn invoices() -> Vec<Message> {
        vec![
            msg("1", "Invoice #1", true, false, 10),
            msg("2", "Invoice #2", false, true, 8),
        ]
    }

    #[test]
    fn test_pinned_first_despite_older_timestamp() {
        let records = invoices();
        let out = project(&records, "", &MessageFilter::All, SortKey::Newest);
        assert_eq!(ids(&out), vec!["2", "1"]);
    }

    #[test]
    fn test_search_and_unread_filter() {
        let records = invoices();
        let out = project(&records, "invoice", &MessageFilter::Unread, SortKey::Newest);
        assert_eq!(ids(&out), vec!["1"]);
    }

    #[test]
    fn test_blank_query_is_no_search() {
        let records = invoices();
        let out = project(&records, "   ", &MessageFilter::All, SortKey::Newest);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = invoices();
        let out = project(&records, "INVOICE #2", &MessageFilter::All, SortKey::Newest);
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn test_sort_keys_within_partitions() {
        let records = vec![
            msg("a", "Charlie", false, false, 1),
            msg("b", "alpha", false, false, 3),
            msg("c", "Bravo", false, true, 2),
            msg("d", "delta", false, false, 2),
        ];
        let newest = project(&records, "", &MessageFilter::All, SortKey::Newest);
        assert_eq!(ids(&newest), vec!["c", "b", "d", "a"]);

        let oldest = project(&records, "", &MessageFilter::All, SortKey::Oldest);
        assert_eq!(ids(&oldest), vec!["c", "a", "d", "b"]);

        let asc = project(&records, "", &MessageFilter::All, SortKey::TitleAsc);
        assert_eq!(ids(&asc), vec!["c", "b", "a", "d"]);

        let desc = project(&records, "", &MessageFilter::All, SortKey::TitleDesc);
        assert_eq!(ids(&desc), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn test_title_sort_places_accented_titles_alphabetically() {
        let records = vec![
            msg("z", "Zebra report", false, false, 1),
            msg("e", "École schedule", false, false, 2),
            msg("a", "apple", false, false, 3),
        ];
        let asc = project(&records, "", &MessageFilter::All, SortKey::TitleAsc);
        assert_eq!(ids(&asc), vec!["a", "e", "z"]);

        let desc = project(&records, "", &MessageFilter::All, SortKey::TitleDesc);
        assert_eq!(ids(&desc), vec!["z", "e", "a"]);
    }

    #[test]
    fn test_equal_timestamps_break_ties_by_id() {
        let records = vec![
            msg("m-3", "x", false, false, 5),
            msg("m-1", "y", false, false, 5),
            msg("m-2", "z", false, false, 5),
        ];
        let out = project(&records, "", &MessageFilter::All, SortKey::Newest);
        assert_eq!(ids(&out), vec!["m-1", "m-2", "m-3"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let records = vec![
            msg("1", "first copy", false, false, 1),
            msg("1", "second copy", false, false, 9),
        ];
        let out = project(&records, "", &MessageFilter::All, SortKey::Newest);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].subject, "first copy");
    }

    #[test]
    fn test_unset_date_range_shows_nothing_by_default() {
        let records = invoices();
        let filter = MessageFilter::DateRange(DateRange::unset());
        assert!(project(&records, "", &filter, SortKey::Newest).is_empty());

        let config = ViewConfig {
            unset_date_range: UnsetRangePolicy::MatchAll,
            ..ViewConfig::default()
        };
        assert_eq!(project_with(&records, "", &filter, SortKey::Newest, &config).len(), 2);
    }

    #[test]
    fn test_input_is_untouched() {
        let records = invoices();
        let before = records.clone();
        let _ = project(&records, "invoice", &MessageFilter::Pinned, SortKey::TitleDesc);
        assert_eq!(records, before);
    }

    #[test]
    fn test_view_model_memoizes_until_revision_changes() {
        let mut store = RecordStore::from_records(invoices());
        let mut vm: ListViewModel<MessageFilter> = ListViewModel::default();

        let first = ids(&vm.project(&store, "", &MessageFilter::All, SortKey::Newest));
        assert!(vm.is_memoized());
        let again = ids(&vm.project(&store, "", &MessageFilter::All, SortKey::Newest));
        assert_eq!(first, again);

        store.update("2", |m| m.pinned = false).unwrap();
        let after = ids(&vm.project(&store, "", &MessageFilter::All, SortKey::Newest));
        assert_eq!(after, vec!["1", "2"]);
    }

    #[test]
    fn test_invalidate_drops_memo() {
        let store = RecordStore::from_records(invoices());
        let config = ViewConfig {
            page_size: 5,
            ..ViewConfig::default()
        };
        let mut vm: ListViewModel<MessageFilter> = ListViewModel::new(config.clone());
        assert_eq!(vm.config(), &config);
        assert!(!vm.is_memoized());

        let first = ids(&vm.project(&store, "", &MessageFilter::All, SortKey::Newest));
        assert!(vm.is_memoized());
        vm.invalidate();
        assert!(!vm.is_memoized());

        let again = ids(&vm.project(&store, "", &MessageFilter::All, SortKey::Newest));
        assert_eq!(first, again);
        assert!(vm.is_memoized());
    }

    #[test]
    fn test_view_model_recomputes_on_control_change() {
        let store = RecordStore::from_records(invoices());
        let mut vm: ListViewModel<MessageFilter> = ListViewModel::default();
        assert_eq!(vm.project(&store, "", &MessageFilter::All, SortKey::Newest).len(), 2);
        assert_eq!(vm.project(&store, "", &MessageFilter::Unread, SortKey::Newest).len(), 1);
        assert_eq!(vm.project(&store, "#2", &MessageFilter::All, SortKey::Newest).len(), 1);
    }

    #[test]
    fn test_view_model_without_memo() {
        let store = RecordStore::from_records(invoices());
        let config = ViewConfig {
            memoize: false,
            ..ViewConfig::default()
        };
        let mut vm: ListViewModel<MessageFilter> = ListViewModel::new(config);
        assert_eq!(vm.project(&store, "", &MessageFilter::All, SortKey::Newest).len(), 2);
        assert!(!vm.is_memoized());
    }

    #[test]
    fn test_project_controls() {
        let store = RecordStore::from_records(invoices());
        let mut vm = ListViewModel::default();
        let controls = ViewControls::new(MessageFilter::Pinned).with_query("invoice");
        let out = vm.project_controls(&store, &controls);
        assert_eq!(ids(&out), vec!["2"]);
    }
}
