//! Markdown agenda template.
//!
//! The template lives in `templates/agenda.md` and is compiled into the
//! binary. Values are HTML-escaped so issue titles cannot inject markup into
//! the rendered document.

use askama::Template;

use crate::domain::errors::{AgendaError, AgendaResult};
use crate::domain::models::{ActivityRecord, Agenda};

#[derive(Template)]
#[template(path = "agenda.md", escape = "html")]
pub struct AgendaTemplate<'a> {
    pub current: &'a str,
    pub closed_issues: &'a [ActivityRecord],
    pub closed_pulls: &'a [ActivityRecord],
    pub opened_issues: &'a [ActivityRecord],
    pub opened_pulls: &'a [ActivityRecord],
}

impl<'a> AgendaTemplate<'a> {
    pub fn from_agenda(agenda: &'a Agenda) -> Self {
        Self {
            current: &agenda.current,
            closed_issues: &agenda.closed_issues,
            closed_pulls: &agenda.closed_pulls,
            opened_issues: &agenda.opened_issues,
            opened_pulls: &agenda.opened_pulls,
        }
    }

    /// Render an agenda to Markdown.
    pub fn render_markdown(agenda: &Agenda) -> AgendaResult<String> {
        AgendaTemplate::from_agenda(agenda)
            .render()
            .map_err(|e| AgendaError::Render(e.to_string()))
    }
}
