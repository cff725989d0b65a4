pub mod config;
pub mod render;
pub mod screen;
pub mod tracing_setup;

pub use config::CliConfig;
pub use render::{Listing, Row, RowDisplay};
pub use screen::{run_screen, ListRequest, Screen};
pub use tracing_setup::{init_tracing, log_file_path};
