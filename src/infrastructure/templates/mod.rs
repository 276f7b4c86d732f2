//! Report templates

pub mod agenda_template;

pub use agenda_template::AgendaTemplate;
