//! Locale type: the closed set of languages the site is published in.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported locale.
///
/// Holding a `Locale` value means the tag has already been validated; raw
/// strings from URLs go through [`Locale::from_code`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Every supported locale, in registry order.
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    /// Locale assigned to requests whose path carries no recognized tag.
    pub const DEFAULT: Locale = Locale::Fr;

    /// Set-membership check used as the narrowing guard on raw input.
    pub fn is_supported(candidate: &str) -> bool {
        LocaleRegistry::get().is_supported(candidate)
    }

    /// Create a Locale from a URL tag.
    ///
    /// # Returns
    /// * `Some(Locale)` if the tag is one of the supported locales
    /// * `None` otherwise (tags are case-sensitive, `"FR"` is rejected)
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "fr" => Some(Locale::Fr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Like [`Locale::from_code`] but falls back to the default locale.
    pub fn from_code_or_default(code: &str) -> Locale {
        Self::from_code(code).unwrap_or(Self::DEFAULT)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// The other locale; the site is strictly bilingual.
    pub fn opposite(&self) -> Locale {
        match self {
            Locale::Fr => Locale::En,
            Locale::En => Locale::Fr,
        }
    }

    /// Registry metadata for this locale.
    ///
    /// # Panics
    /// Panics if the registry lacks the tag, which would mean the enum and
    /// the registry table have drifted apart.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code())
            .expect("every Locale variant has a registry entry")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
