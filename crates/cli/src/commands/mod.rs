//! Subcommand implementations.
//!
//! Each command takes its data source and output writer as arguments so it
//! can run against the in-memory backend in tests.

pub mod browse;
pub mod contact;
pub mod seed;

use meteen_site::config::ConfigError;
use meteen_site::services::{FetchError, SubmitError, TeamError};
use meteen_site::supabase::DataSourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("backend error: {0}")]
    Backend(#[from] DataSourceError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error("{}", .0.user_message())]
    Submit(#[from] SubmitError),

    #[error("invalid seed file: {0}")]
    Seed(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
