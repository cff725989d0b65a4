pub mod config;
pub mod controls;
pub mod error;
pub mod filter;
pub mod mock;
pub mod models;
pub mod page;
pub mod record;
pub mod search;
pub mod selection;
pub mod sort;
pub mod store;
pub mod view;

pub use config::{UnknownControlPolicy, UnsetRangePolicy, ViewConfig};
pub use controls::{resolve_control, NamedControl, ViewControls};
pub use error::ViewError;
pub use filter::{DateRange, ListFilter};
pub use page::{paginate, Page};
pub use record::Record;
pub use selection::{SelectAllState, SelectionMode, SelectionTracker};
pub use sort::SortKey;
pub use store::RecordStore;
pub use view::{project, project_with, ListViewModel};
