//! Agenda - two-week GitHub activity report
//!
//! Searches one repository for issues and pull requests that were closed or
//! opened in the last two weeks and renders them into a Markdown meeting
//! agenda, `agenda-<YYYY-MM-DD>.md`.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): records, date window, queries and the search port
//! - **Application Layer** (`application`): the generation workflow
//! - **Service Layer** (`services`): collecting the four agenda sections
//! - **Infrastructure Layer** (`infrastructure`): GitHub client, config, logging, templates
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use agenda::{ActivityService, AgendaGenerator, ReportConfig};
//! use agenda::infrastructure::credentials::GithubCredentials;
//! use agenda::infrastructure::github::{GithubClientConfig, GithubSearchClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let credentials = GithubCredentials::from_env()?;
//!     let client = GithubSearchClient::new(GithubClientConfig::new(credentials, &Default::default()))?;
//!     let generator = AgendaGenerator::new(
//!         ActivityService::new(Arc::new(client), "eos/eos"),
//!         ReportConfig::default(),
//!     );
//!     let summary = generator.generate(chrono::Utc::now().date_naive()).await;
//!     println!("{}", summary.path.display());
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{AgendaGenerator, GenerationSummary};
pub use domain::models::{
    ActivityCategory, ActivityRecord, Agenda, Config, DateWindow, GithubConfig, LoggingConfig,
    ReportConfig, SearchQuery,
};
pub use domain::ports::IssueSearch;
pub use domain::{AgendaError, SearchError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ActivityService, CollectedActivity};
