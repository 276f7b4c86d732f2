pub mod agenda_generator;

pub use agenda_generator::{AgendaGenerator, GenerationSummary};
