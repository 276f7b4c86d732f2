//! Domain layer for the agenda generator
//!
//! Pure data and the port the remote search is reached through.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{AgendaError, AgendaResult, SearchError};
