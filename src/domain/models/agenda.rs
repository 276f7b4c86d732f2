//! Agenda aggregate.
//!
//! The agenda is what the template sees: the current date plus one list of
//! activity records per category.

use serde::Serialize;

use super::activity::ActivityRecord;
use super::query::ActivityCategory;

/// Prefix of every generated report file.
pub const AGENDA_FILE_PREFIX: &str = "agenda";

/// Report file name for the given `YYYY-MM-DD` date.
pub fn agenda_file_name(current: &str) -> String {
    format!("{AGENDA_FILE_PREFIX}-{current}.md")
}

/// Data rendered into the agenda template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Agenda {
    pub current: String,
    pub closed_issues: Vec<ActivityRecord>,
    pub closed_pulls: Vec<ActivityRecord>,
    pub opened_issues: Vec<ActivityRecord>,
    pub opened_pulls: Vec<ActivityRecord>,
}

impl Agenda {
    /// Empty agenda for the given date.
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            ..Default::default()
        }
    }

    pub fn records(&self, category: ActivityCategory) -> &[ActivityRecord] {
        match category {
            ActivityCategory::ClosedIssues => &self.closed_issues,
            ActivityCategory::ClosedPulls => &self.closed_pulls,
            ActivityCategory::OpenedIssues => &self.opened_issues,
            ActivityCategory::OpenedPulls => &self.opened_pulls,
        }
    }

    /// Replace the records of one category.
    pub fn set_records(&mut self, category: ActivityCategory, records: Vec<ActivityRecord>) {
        let slot = match category {
            ActivityCategory::ClosedIssues => &mut self.closed_issues,
            ActivityCategory::ClosedPulls => &mut self.closed_pulls,
            ActivityCategory::OpenedIssues => &mut self.opened_issues,
            ActivityCategory::OpenedPulls => &mut self.opened_pulls,
        };
        *slot = records;
    }

    pub fn file_name(&self) -> String {
        agenda_file_name(&self.current)
    }

    /// Total number of records across all categories.
    pub fn total(&self) -> usize {
        ActivityCategory::ALL
            .iter()
            .map(|category| self.records(*category).len())
            .sum()
    }
}
