// SPDX-License-Identifier: MPL-2.0
//! Static registry of bundled translation dictionaries.
//!
//! Each supported locale ships as a JSON file under `assets/lang/`, embedded
//! into the binary at compile time. The registry is built once at startup and
//! never mutated afterwards; declaration order is significant because the
//! resolver's language-prefix tier picks the *first* matching entry.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;

/// A translation dictionary: an opaque nested key-value structure.
pub type Dictionary = serde_json::Value;

#[derive(RustEmbed)]
#[folder = "assets/lang/"]
struct Asset;

/// Locale code of the complete reference dictionary. Every resolved
/// dictionary is backfilled from this one.
pub const BASELINE_LOCALE: &str = "en-US";

/// Supported locales, in declaration order.
pub const DECLARED_LOCALES: [&str; 7] = [
    "en-US", "zh-CN", "zh-HK", "zh-TW", "fr-FR", "tr-TR", "ja-JP",
];

/// Immutable locale-to-dictionary mapping, built once at startup.
#[derive(Debug)]
pub struct LocaleRegistry {
    entries: Vec<(String, Dictionary)>,
}

impl LocaleRegistry {
    /// Builds the registry from the bundled dictionaries, preserving
    /// [`DECLARED_LOCALES`] order.
    ///
    /// Fails when a declared asset is missing or unparseable, or when the
    /// `en-US` baseline is absent.
    pub fn from_embedded() -> Result<Self> {
        let mut entries = Vec::with_capacity(DECLARED_LOCALES.len());
        for code in DECLARED_LOCALES {
            let filename = format!("{code}.json");
            let file = Asset::get(&filename)
                .ok_or_else(|| Error::Registry(format!("missing bundled dictionary: {code}")))?;
            let dictionary: Dictionary = serde_json::from_slice(file.data.as_ref())?;
            entries.push((code.to_string(), dictionary));
        }
        Self::from_entries(entries)
    }

    /// Builds a registry from explicit entries, in the given order.
    ///
    /// Intended for tests and embedders that supply their own dictionaries.
    /// Fails fast when no `en-US` baseline entry is present; resolution is
    /// only a total function when the baseline exists.
    pub fn from_entries(entries: Vec<(String, Dictionary)>) -> Result<Self> {
        if !entries.iter().any(|(code, _)| code == BASELINE_LOCALE) {
            return Err(Error::Registry(format!(
                "no {BASELINE_LOCALE} baseline dictionary registered"
            )));
        }
        Ok(Self { entries })
    }

    /// Looks up the dictionary registered for `code`. Absence is represented,
    /// not an error.
    pub fn lookup(&self, code: &str) -> Option<&Dictionary> {
        self.entries
            .iter()
            .find(|(registered, _)| registered == code)
            .map(|(_, dictionary)| dictionary)
    }

    /// All registered locale codes, in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    /// The baseline `en-US` dictionary.
    pub fn baseline(&self) -> &Dictionary {
        self.lookup(BASELINE_LOCALE)
            .expect("registry invariant: baseline checked at construction")
    }
}
