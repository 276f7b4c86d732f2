//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - GitHub search API client
//! - Configuration management
//! - Credentials management
//! - Logging infrastructure
//! - Report templates
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod github;
pub mod logging;
pub mod templates;
