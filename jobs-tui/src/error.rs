//! Application error type.

use jobs_lib::error::CatalogError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("messages: {0}")]
    Catalog(#[from] CatalogError),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
