//! Message catalog error types

/// Errors that can occur while building a message [`Catalog`](crate::i18n::Catalog).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The locale tag could not be parsed.
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// The Fluent resource has syntax errors.
    #[error("Malformed message resource for '{locale}': {count} parse error(s)")]
    Resource { locale: String, count: usize },

    /// The resource defines a message id twice or overrides an existing one.
    #[error("Conflicting message ids in resource for '{0}'")]
    Conflict(String),
}
