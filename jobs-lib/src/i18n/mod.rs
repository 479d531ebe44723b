//! Localized messages
//!
//! Validation messages are looked up by key through the [`Translate`] trait.
//! [`Catalog`] is the Fluent-backed implementation with embedded resources.

mod catalog;

pub use catalog::Catalog;

/// Resolves a message key to a localized string.
///
/// Arguments are substituted by name (`{ $length }` in Fluent syntax).
pub trait Translate {
    fn message(&self, key: &str, args: &[(&str, String)]) -> String;
}

/// Identity lookup that returns the key itself.
///
/// Useful where only the *shape* of validation results matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keys;

impl Translate for Keys {
    fn message(&self, key: &str, _args: &[(&str, String)]) -> String {
        key.to_string()
    }
}
