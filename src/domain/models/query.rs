//! Search query domain model.
//!
//! The agenda is built from four searches that differ only in the kind of
//! item, its state, and which date field bounds the window. `ActivityCategory`
//! names the four combinations; `SearchQuery` renders one of them into the
//! platform's search syntax.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::window::DateWindow;

/// Kind of item a search is restricted to (`is:` qualifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Issue,
    PullRequest,
}

impl ItemKind {
    pub const fn qualifier(&self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::PullRequest => "pr",
        }
    }
}

/// Item state a search is restricted to (`state:` qualifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Open,
    Closed,
}

impl ItemState {
    pub const fn qualifier(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Date field the window is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Created,
    Updated,
}

impl DateField {
    pub const fn qualifier(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// The four sections of the agenda.
///
/// Closed items are matched on `updated`, opened items on `created`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    ClosedIssues,
    ClosedPulls,
    OpenedIssues,
    OpenedPulls,
}

impl ActivityCategory {
    /// All categories in the order they are queried.
    pub const ALL: [Self; 4] = [
        Self::ClosedIssues,
        Self::ClosedPulls,
        Self::OpenedIssues,
        Self::OpenedPulls,
    ];

    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::ClosedIssues | Self::OpenedIssues => ItemKind::Issue,
            Self::ClosedPulls | Self::OpenedPulls => ItemKind::PullRequest,
        }
    }

    pub const fn state(&self) -> ItemState {
        match self {
            Self::ClosedIssues | Self::ClosedPulls => ItemState::Closed,
            Self::OpenedIssues | Self::OpenedPulls => ItemState::Open,
        }
    }

    pub const fn date_field(&self) -> DateField {
        match self {
            Self::ClosedIssues | Self::ClosedPulls => DateField::Updated,
            Self::OpenedIssues | Self::OpenedPulls => DateField::Created,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClosedIssues => "closed_issues",
            Self::ClosedPulls => "closed_pulls",
            Self::OpenedIssues => "opened_issues",
            Self::OpenedPulls => "opened_pulls",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single repository-scoped search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub repository: String,
    pub kind: ItemKind,
    pub state: ItemState,
    pub date_field: DateField,
    pub window: DateWindow,
}

impl SearchQuery {
    pub fn new(repository: impl Into<String>, category: ActivityCategory, window: DateWindow) -> Self {
        Self {
            repository: repository.into(),
            kind: category.kind(),
            state: category.state(),
            date_field: category.date_field(),
            window,
        }
    }

    /// Render as `repo:<org>/<repo> is:<kind> state:<state> <field>:<start>..<end>`.
    pub fn to_query_string(&self) -> String {
        format!(
            "repo:{} is:{} state:{} {}:{}",
            self.repository,
            self.kind.qualifier(),
            self.state.qualifier(),
            self.date_field.qualifier(),
            self.window.range()
        )
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
