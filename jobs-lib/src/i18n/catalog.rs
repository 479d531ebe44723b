use std::fmt;

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use log::{debug, warn};
use unic_langid::LanguageIdentifier;

use super::Translate;
use crate::error::CatalogError;

/// Locale used when a requested one has no resource.
pub const DEFAULT_LOCALE: &str = "en";

/// Embedded message resources, keyed by locale tag.
const RESOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.ftl")),
    ("uk", include_str!("../../locales/uk.ftl")),
];

/// A Fluent message bundle for one locale.
pub struct Catalog {
    locale: String,
    bundle: FluentBundle<FluentResource>,
}

impl Catalog {
    /// Builds a catalog from Fluent source text.
    pub fn from_source(locale: &str, source: &str) -> Result<Self, CatalogError> {
        let langid: LanguageIdentifier = locale
            .parse()
            .map_err(|_| CatalogError::InvalidLocale(locale.to_string()))?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            CatalogError::Resource {
                locale: locale.to_string(),
                count: errors.len(),
            }
        })?;

        let mut bundle = FluentBundle::new(vec![langid]);
        // Plain text output: no FSI/PDI marks around placeables.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|_| CatalogError::Conflict(locale.to_string()))?;

        Ok(Self {
            locale: locale.to_string(),
            bundle,
        })
    }

    /// Catalog for a locale, falling back to English when no resource exists.
    pub fn for_locale(locale: &str) -> Result<Self, CatalogError> {
        let wanted = locale.split(['-', '_']).next().unwrap_or(locale).to_ascii_lowercase();
        match RESOURCES.iter().find(|(tag, _)| *tag == wanted) {
            Some((tag, source)) => {
                debug!("Loading message catalog for '{}'", tag);
                Self::from_source(tag, source)
            }
            None => {
                warn!(
                    "No messages for locale '{}', falling back to '{}'",
                    locale, DEFAULT_LOCALE
                );
                Self::english()
            }
        }
    }

    /// The English catalog.
    pub fn english() -> Result<Self, CatalogError> {
        Self::from_source(DEFAULT_LOCALE, RESOURCES[0].1)
    }

    /// Locale tags with embedded resources.
    pub fn available_locales() -> impl Iterator<Item = &'static str> {
        RESOURCES.iter().map(|(tag, _)| *tag)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether the catalog defines a message.
    pub fn has_message(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }
}

impl Translate for Catalog {
    fn message(&self, key: &str, args: &[(&str, String)]) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|m| m.value()) else {
            warn!("Missing message '{}' in '{}' catalog", key, self.locale);
            return key.to_string();
        };

        let fluent_args = (!args.is_empty()).then(|| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, FluentValue::from(value.as_str()));
            }
            fluent_args
        });

        let mut errors = Vec::new();
        let text = self
            .bundle
            .format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if !errors.is_empty() {
            warn!("Formatting '{}' in '{}': {:?}", key, self.locale, errors);
        }
        text.into_owned()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "Position-agreement-unchecked",
        "Frequency-agreement-unchecked",
        "Title-is-required",
        "Location-is-required",
        "Company-is-required",
        "Salary-is-required",
        "Contact-is-required",
        "Description-is-required",
        "Description-max-length",
        "Company-url-invalid",
    ];

    #[test]
    fn test_every_locale_defines_every_key() {
        for locale in Catalog::available_locales() {
            let catalog = Catalog::for_locale(locale).unwrap();
            for key in KEYS {
                assert!(catalog.has_message(key), "{} missing in {}", key, locale);
            }
        }
    }

    #[test]
    fn test_arguments_are_substituted_without_isolation_marks() {
        let catalog = Catalog::english().unwrap();
        let text = catalog.message("Description-max-length", &[("length", "1234".to_string())]);
        assert!(text.contains("1234"));
        assert!(!text.contains('\u{2068}'));
    }

    #[test]
    fn test_missing_key_returns_key() {
        let catalog = Catalog::english().unwrap();
        assert_eq!(catalog.message("No-such-message", &[]), "No-such-message");
    }

    #[test]
    fn test_locale_fallback() {
        assert_eq!(Catalog::for_locale("uk-UA").unwrap().locale(), "uk");
        assert_eq!(Catalog::for_locale("de").unwrap().locale(), "en");
    }

    #[test]
    fn test_malformed_resource() {
        let result = Catalog::from_source("en", "Broken = { $length\n");
        assert!(matches!(result, Err(CatalogError::Resource { .. })));
    }
}
