use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollationError {
    #[error("invalid collation locale '{locale}': {message}")]
    InvalidLocale { locale: String, message: String },
    #[error("collation data unavailable for locale '{locale}': {message}")]
    DataUnavailable { locale: String, message: String },
}

/// Locale-aware title comparison. The catalog is primarily Arabic, and
/// Arabic titles must order under Arabic collation rules; raw code-point
/// comparison misorders hamza and madda variants, so the ICU collator is
/// the normal path and code-point ordering only a last-resort fallback.
pub struct TitleCollator {
    inner: Inner,
}

enum Inner {
    Icu(Collator),
    CodePoint,
}

impl TitleCollator {
    /// Builds a collator for a BCP-47 locale tag such as `ar` or `ar-EG`.
    pub fn new(locale: &str) -> Result<Self, CollationError> {
        let parsed: Locale = locale.parse().map_err(|e| CollationError::InvalidLocale {
            locale: locale.to_string(),
            message: format!("{e:?}"),
        })?;

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator = Collator::try_new(&parsed.into(), options).map_err(|e| {
            CollationError::DataUnavailable {
                locale: locale.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            inner: Inner::Icu(collator),
        })
    }

    /// Plain code-point ordering. Not acceptable for Arabic catalogs; only
    /// used when collator construction fails for a configured locale.
    pub fn code_point() -> Self {
        Self {
            inner: Inner::CodePoint,
        }
    }

    pub fn is_locale_aware(&self) -> bool {
        matches!(self.inner, Inner::Icu(_))
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.inner {
            Inner::Icu(collator) => collator.compare(left, right),
            Inner::CodePoint => left.cmp(right),
        }
    }
}
