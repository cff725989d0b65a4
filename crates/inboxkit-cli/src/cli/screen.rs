use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use inboxkit_core::models::{
    CannedResponse, CannedResponseFilter, Folder, Message, MessageFilter, Question,
    QuestionFilter,
};
use inboxkit_core::{
    mock, paginate, resolve_control, DateRange, ListFilter, ListViewModel, NamedControl,
    RecordStore, SelectionTracker, SortKey, ViewConfig, ViewControls,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::render::{Listing, Row, RowDisplay};

/// The list screens the CLI can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Inbox,
    Sent,
    Canned,
    Questions,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Canned => "canned",
            Self::Questions => "questions",
        }
    }
}

/// One list request, parsed from arguments
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub query: String,
    /// Filter name; `None` means `all`, or `dateRange` when bounds are given
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// One-based page number
    pub page: usize,
    pub page_size: Option<usize>,
    pub select: Vec<String>,
    pub select_all: bool,
}

/// Run a request against mock data, or the records in `records_path`.
pub fn run_screen(
    screen: Screen,
    request: &ListRequest,
    config: &ViewConfig,
    records_path: Option<&Path>,
) -> Result<Listing> {
    let range = date_range(request)?;
    match screen {
        Screen::Inbox | Screen::Sent => {
            let folder = if screen == Screen::Inbox {
                Folder::Inbox
            } else {
                Folder::Sent
            };
            let mut records = match records_path {
                Some(path) => load_records::<Message>(path)?,
                None if screen == Screen::Inbox => mock::inbox_messages(),
                None => mock::sent_messages(),
            };
            records.retain(|m| m.folder == folder);
            let mut filter: MessageFilter = resolve_filter(request, range.is_some(), config)?;
            if let (MessageFilter::DateRange(bounds), Some(range)) = (&mut filter, range) {
                *bounds = range;
            }
            list(screen, records, filter, request, config)
        }
        Screen::Canned => {
            let records = match records_path {
                Some(path) => load_records::<CannedResponse>(path)?,
                None => mock::canned_responses(),
            };
            let mut filter: CannedResponseFilter =
                resolve_filter(request, range.is_some(), config)?;
            if let (CannedResponseFilter::DateRange(bounds), Some(range)) = (&mut filter, range) {
                *bounds = range;
            }
            list(screen, records, filter, request, config)
        }
        Screen::Questions => {
            if range.is_some() {
                warn!("The question bank has no date filter, ignoring --from/--to");
            }
            let records = match records_path {
                Some(path) => load_records::<Question>(path)?,
                None => mock::questions(),
            };
            for question in &records {
                if let Err(e) = question.validate() {
                    warn!(error = %e, "Loaded an invalid question");
                }
            }
            let filter: QuestionFilter = resolve_filter(request, false, config)?;
            list(screen, records, filter, request, config)
        }
    }
}

fn load_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records file: {}", path.display()))
}

fn parse_timestamp(raw: &str, flag: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .with_context(|| format!("Invalid {} timestamp: {}", flag, raw))
}

fn date_range(request: &ListRequest) -> Result<Option<DateRange>> {
    if request.from.is_none() && request.to.is_none() {
        return Ok(None);
    }
    let from = request
        .from
        .as_deref()
        .map(|raw| parse_timestamp(raw, "--from"))
        .transpose()?;
    let to = request
        .to
        .as_deref()
        .map(|raw| parse_timestamp(raw, "--to"))
        .transpose()?;
    Ok(Some(DateRange::new(from, to)?))
}

fn resolve_filter<F: NamedControl>(
    request: &ListRequest,
    has_range: bool,
    config: &ViewConfig,
) -> Result<F> {
    let name = match request.filter.as_deref() {
        Some(name) => name,
        None if has_range => "dateRange",
        None => return Ok(F::default()),
    };
    Ok(resolve_control(name, config.unknown_control)?)
}

fn list<R, F>(
    screen: Screen,
    records: Vec<R>,
    filter: F,
    request: &ListRequest,
    config: &ViewConfig,
) -> Result<Listing>
where
    R: RowDisplay,
    F: ListFilter<R> + NamedControl + Clone + PartialEq,
{
    let sort_key: SortKey = match request.sort.as_deref() {
        Some(name) => resolve_control(name, config.unknown_control)?,
        None => SortKey::default(),
    };
    let mut controls = ViewControls::new(filter)
        .with_query(request.query.clone())
        .with_sort_key(sort_key);

    let store = RecordStore::from_records(records);
    let mut view = ListViewModel::new(config.clone());
    let projected = view.project_controls(&store, &controls);

    select(&mut controls.selection, request, &store, &projected);

    let page_size = request
        .page_size
        .unwrap_or_else(|| config.effective_page_size());
    let page = paginate(&projected, request.page.saturating_sub(1), page_size);
    debug!(
        screen = screen.name(),
        total = page.total,
        page = page.page,
        "Rendering page"
    );

    let selection = &controls.selection;
    let rows = page
        .items
        .iter()
        .map(|&record| Row::new(record, selection.is_selected(record.id())))
        .collect();

    Ok(Listing {
        screen: screen.name().to_string(),
        query: controls.query.clone(),
        filter: controls.filter.name().to_string(),
        sort_key,
        page: page.page + 1,
        page_count: page.page_count,
        total: page.total,
        checkbox_mode: selection.checkbox_mode(),
        select_all: selection.select_all_state(page.ids()),
        selected: selection.selected_ids().map(str::to_string).collect(),
        rows,
    })
}

/// Apply `--select` / `--select-all`, dropping ids the store does not hold.
fn select<R: RowDisplay>(
    tracker: &mut SelectionTracker,
    request: &ListRequest,
    store: &RecordStore<R>,
    projected: &[&R],
) {
    if request.select_all {
        tracker.select_all(projected.iter().map(|r| r.id()));
    }
    for id in &request.select {
        if !tracker.is_selected(id) {
            tracker.toggle(id);
        }
    }
    let before = tracker.len();
    tracker.retain(|id| store.contains(id));
    if tracker.len() < before {
        warn!(dropped = before - tracker.len(), "Ignoring selected ids not in the list");
    }
}
