//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - compact, pretty or JSON output on stderr
//! - optional daily-rotated JSON log file
//! - secret scrubbing for logged error text

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{LogFormat, LoggerImpl};
pub use secret_scrubbing::SecretScrubber;
