pub mod activity;
pub mod agenda;
pub mod config;
pub mod query;
pub mod window;

pub use activity::ActivityRecord;
pub use agenda::{agenda_file_name, Agenda, AGENDA_FILE_PREFIX};
pub use config::{Config, GithubConfig, LoggingConfig, ReportConfig};
pub use query::{ActivityCategory, DateField, ItemKind, ItemState, SearchQuery};
pub use window::{DateWindow, DATE_FORMAT, DEFAULT_LOOKBACK_DAYS};
