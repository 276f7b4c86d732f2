//! CLI type definitions
//!
//! The tool is meant to run unattended in CI with no arguments; every flag
//! is optional and only overrides configuration.

use clap::Parser;
use std::path::PathBuf;

use crate::domain::models::Config;

#[derive(Parser, Debug)]
#[command(name = "agenda")]
#[command(
    about = "Generate a Markdown meeting agenda from the last two weeks of GitHub activity",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// YAML config file merged over agenda.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Repository to search, as owner/name
    #[arg(short, long, value_name = "OWNER/NAME")]
    pub repository: Option<String>,

    /// Directory the agenda file is written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref repository) = self.repository {
            config.github.repository.clone_from(repository);
        }
        if let Some(ref output_dir) = self.output_dir {
            config.report.output_dir.clone_from(output_dir);
        }
    }
}
