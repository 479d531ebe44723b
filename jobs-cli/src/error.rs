use std::io;
use std::path::PathBuf;

use jobs_lib::error::CatalogError;

/// Errors that stop a command before validation can report anything.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid TOML draft: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON draft: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write draft template: {0}")]
    Template(#[from] toml::ser::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}
