//! Agenda generation workflow.
//!
//! window -> collect the four sections -> render -> write `agenda-<date>.md`.
//! Nothing past the credential check aborts the run: failed searches leave
//! their section empty, and render or write failures are logged and reported
//! in the summary.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::domain::errors::{AgendaError, AgendaResult};
use crate::domain::models::{ActivityCategory, Agenda, DateWindow, ReportConfig};
use crate::domain::ports::IssueSearch;
use crate::infrastructure::templates::AgendaTemplate;
use crate::services::ActivityService;

/// Outcome of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Absolute path of the agenda file
    pub path: PathBuf,
    /// Whether the file was rendered and written
    pub written: bool,
    /// Categories left empty because their search failed
    pub failed: Vec<ActivityCategory>,
    /// Number of records across all sections
    pub total: usize,
}

pub struct AgendaGenerator<S: IssueSearch> {
    activity: ActivityService<S>,
    report: ReportConfig,
}

impl<S: IssueSearch> AgendaGenerator<S> {
    pub fn new(activity: ActivityService<S>, report: ReportConfig) -> Self {
        Self { activity, report }
    }

    /// Generate the agenda for the window ending on `today`.
    pub async fn generate(&self, today: NaiveDate) -> GenerationSummary {
        let window = DateWindow::ending_on(today, self.report.lookback_days);
        info!(
            repository = self.activity.repository(),
            window = %window,
            "collecting activity"
        );

        let collected = self.activity.collect(&window).await;
        let path = self.output_path(&collected.agenda);

        let written = match self.render_and_write(&collected.agenda, &path).await {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "agenda not written");
                false
            }
        };

        if !collected.failed.is_empty() {
            warn!(
                failed = ?collected.failed,
                "agenda generated with empty sections for failed searches"
            );
        }

        GenerationSummary {
            path,
            written,
            total: collected.agenda.total(),
            failed: collected.failed,
        }
    }

    /// Absolute path of the agenda file inside the output directory.
    pub fn output_path(&self, agenda: &Agenda) -> PathBuf {
        let path = self.report.output_dir.join(agenda.file_name());
        std::path::absolute(&path).unwrap_or(path)
    }

    async fn render_and_write(&self, agenda: &Agenda, path: &Path) -> AgendaResult<()> {
        let rendered = AgendaTemplate::render_markdown(agenda)?;

        info!(path = %path.display(), "writing agenda");

        let write_error = |source| AgendaError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
        }
        tokio::fs::write(path, rendered).await.map_err(write_error)
    }
}
