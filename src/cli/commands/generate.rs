//! Implementation of the agenda run.

use chrono::Utc;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

use crate::application::AgendaGenerator;
use crate::cli::types::Cli;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::credentials::GithubCredentials;
use crate::infrastructure::github::{GithubClientConfig, GithubSearchClient};
use crate::infrastructure::logging::LoggerImpl;
use crate::services::ActivityService;

/// Run the whole tool.
///
/// Exits with failure only when the run cannot start: invalid configuration,
/// no access token, or an HTTP client that cannot be built. Everything after
/// that is logged and the exit code stays zero.
pub async fn execute(cli: Cli) -> ExitCode {
    let mut config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply_overrides(&mut config);
    if let Err(err) = ConfigLoader::validate(&config) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let credentials = match GithubCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            error!(error = %err, "cannot query GitHub without an access token");
            return ExitCode::FAILURE;
        }
    };

    let client = match GithubSearchClient::new(GithubClientConfig::new(credentials, &config.github)) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "failed to build GitHub client");
            return ExitCode::FAILURE;
        }
    };

    let activity = ActivityService::new(Arc::new(client), config.github.repository.clone());
    let generator = AgendaGenerator::new(activity, config.report.clone());
    let summary = generator.generate(Utc::now().date_naive()).await;

    info!(
        path = %summary.path.display(),
        written = summary.written,
        items = summary.total,
        failed_sections = summary.failed.len(),
        "agenda run finished"
    );

    ExitCode::SUCCESS
}
