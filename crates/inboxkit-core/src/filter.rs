use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{UnsetRangePolicy, ViewConfig};
use crate::error::ViewError;
use crate::record::Record;

/// One screen's closed set of named predicates, applied before search.
pub trait ListFilter<R: Record> {
    fn matches(&self, record: &R, config: &ViewConfig) -> bool;
}

/// Inclusive date bounds for the "filter by date" control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

/// Wire shape, checked through `DateRange::new` on the way in.
#[derive(Deserialize)]
struct RawDateRange {
    #[serde(default)]
    from: Option<DateTime<Utc>>,
    #[serde(default)]
    to: Option<DateTime<Utc>>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ViewError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

impl DateRange {
    pub fn new(
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Self, ViewError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(ViewError::InvalidDateRange { from, to });
            }
        }
        Ok(Self { from, to })
    }

    /// A range with no bounds picked yet.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn is_unset(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether a record timestamp falls inside the range.
    ///
    /// Records without a timestamp never match a set range.
    pub fn contains(&self, timestamp: Option<DateTime<Utc>>, policy: UnsetRangePolicy) -> bool {
        if self.is_unset() {
            return policy == UnsetRangePolicy::MatchAll;
        }
        let Some(ts) = timestamp else {
            return false;
        };
        self.from.map_or(true, |from| ts >= from) && self.to.map_or(true, |to| ts <= to)
    }
}
