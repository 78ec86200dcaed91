//! Dictionary loading and lookup.
//!
//! Each locale has exactly one translation bundle, embedded at build time.
//! Bundles are parsed on first use and then shared read-only for the rest of
//! the process through [`DictionaryCache`].

use crate::i18n::Locale;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("dictionary for locale '{locale}' is malformed: {reason}")]
    Malformed { locale: Locale, reason: String },
}

/// Raw bundle source for a locale. Direct lookup, one variant per locale.
fn source(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => include_str!("locales/fr.json"),
        Locale::En => include_str!("locales/en.json"),
    }
}

/// An immutable, nested bundle of localized strings.
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: Locale,
    root: Value,
}

impl Dictionary {
    /// Parse a bundle. The root must be a JSON object.
    pub fn parse(locale: Locale, raw: &str) -> Result<Self, DictionaryError> {
        let root: Value = serde_json::from_str(raw).map_err(|e| DictionaryError::Malformed {
            locale,
            reason: e.to_string(),
        })?;

        if !root.is_object() {
            return Err(DictionaryError::Malformed {
                locale,
                reason: "root is not an object".to_string(),
            });
        }

        Ok(Self { locale, root })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }

    /// Look up a string by dotted path (e.g. `"home.title"`).
    ///
    /// A missing or non-string entry renders as the key itself so a gap in
    /// a bundle shows up on the page instead of failing the request.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        match self.lookup(key).and_then(Value::as_str) {
            Some(text) => text,
            None => {
                warn!(locale = %self.locale, key, "Missing dictionary string");
                key
            }
        }
    }

    /// Look up a list of strings by dotted path. Missing lists are empty.
    pub fn list(&self, key: &str) -> Vec<&str> {
        match self.lookup(key).and_then(Value::as_array) {
            Some(items) => items.iter().filter_map(Value::as_str).collect(),
            None => {
                warn!(locale = %self.locale, key, "Missing dictionary list");
                Vec::new()
            }
        }
    }

    /// Compare the key structure of two bundles.
    ///
    /// Returns one entry per divergence (missing key, kind mismatch or list
    /// length mismatch). Empty means the bundles are structurally identical.
    pub fn structure_diff(&self, other: &Dictionary) -> Vec<String> {
        let mut diffs = Vec::new();
        diff_values("", &self.root, &other.root, &mut diffs);
        diffs
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn diff_values(path: &str, left: &Value, right: &Value, diffs: &mut Vec<String>) {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            for (key, lv) in l {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                match r.get(key) {
                    Some(rv) => diff_values(&child, lv, rv, diffs),
                    None => diffs.push(format!("{}: missing on right", child)),
                }
            }
            for key in r.keys().filter(|k| !l.contains_key(*k)) {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                diffs.push(format!("{}: missing on left", child));
            }
        }
        (Value::Array(l), Value::Array(r)) => {
            if l.len() != r.len() {
                diffs.push(format!("{}: list length {} vs {}", path, l.len(), r.len()));
            }
            for (i, (lv, rv)) in l.iter().zip(r.iter()).enumerate() {
                diff_values(&format!("{}[{}]", path, i), lv, rv, diffs);
            }
        }
        (l, r) if kind(l) != kind(r) => {
            diffs.push(format!("{}: {} vs {}", path, kind(l), kind(r)));
        }
        _ => {}
    }
}

/// Load-once cache of parsed dictionaries, keyed by locale.
///
/// Each slot is initialized at most once; the parse result (success or
/// failure) is kept for the lifetime of the cache.
pub struct DictionaryCache {
    slots: [OnceLock<Result<Dictionary, DictionaryError>>; 2],
    loads: AtomicUsize,
}

impl DictionaryCache {
    pub const fn new() -> Self {
        Self {
            slots: [OnceLock::new(), OnceLock::new()],
            loads: AtomicUsize::new(0),
        }
    }

    fn slot(&self, locale: Locale) -> &OnceLock<Result<Dictionary, DictionaryError>> {
        match locale {
            Locale::Fr => &self.slots[0],
            Locale::En => &self.slots[1],
        }
    }

    /// Get the dictionary for a locale, parsing it on first access.
    pub fn get(&self, locale: Locale) -> Result<&Dictionary, DictionaryError> {
        self.slot(locale)
            .get_or_init(|| {
                self.loads.fetch_add(1, Ordering::Relaxed);
                debug!(%locale, "Loading dictionary");
                Dictionary::parse(locale, source(locale))
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Number of bundles parsed so far.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl Default for DictionaryCache {
    fn default() -> Self {
        Self::new()
    }
}

static DICTIONARIES: DictionaryCache = DictionaryCache::new();

/// Process-wide accessor for a locale's dictionary.
pub fn dictionary(locale: Locale) -> Result<&'static Dictionary, DictionaryError> {
    DICTIONARIES.get(locale)
}
