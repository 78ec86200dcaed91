//! Internationalization (i18n) module for the bilingual site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `locale`: Closed `Locale` enum used everywhere a tag has been validated
//! - `dictionary`: Per-locale translation bundles behind a load-once cache
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_site::i18n::{dictionary, Locale};
//!
//! let locale = Locale::from_code_or_default("en");
//! let dict = dictionary(locale)?;
//! assert_eq!(dict.text("nav.projects"), "Projects");
//! ```

mod dictionary;
mod locale;
mod registry;

pub use dictionary::{dictionary, Dictionary, DictionaryCache, DictionaryError};
pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
