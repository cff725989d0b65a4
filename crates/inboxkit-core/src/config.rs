use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ViewError;

pub const DEFAULT_PAGE_SIZE: usize = 25;

/// What a date-range filter with neither bound set matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnsetRangePolicy {
    /// "Filter by date" with no bounds shows nothing.
    #[default]
    MatchNone,
    MatchAll,
}

/// How an unrecognised filter or sort name is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownControlPolicy {
    /// Use the control's default (`all` / `newest`) and log a warning.
    #[default]
    Fallback,
    Reject,
}

/// View-model configuration, loadable from a camelCase JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    pub unset_date_range: UnsetRangePolicy,
    pub unknown_control: UnknownControlPolicy,
    pub page_size: usize,
    pub memoize: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            unset_date_range: UnsetRangePolicy::default(),
            unknown_control: UnknownControlPolicy::default(),
            page_size: DEFAULT_PAGE_SIZE,
            memoize: true,
        }
    }
}

impl ViewConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ViewError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ViewError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ViewError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Page size with zero treated as one.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
