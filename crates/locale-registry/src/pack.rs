//! Translation packs: one locale's messages for one feature, as data.
//!
//! A pack is the unit that gets registered. Packs load independently, per
//! locale and per feature, from TOML or JSON:
//!
//! ```toml
//! locale = "pl"
//! plural = "polish"   # optional; otherwise picked from the locale code
//!
//! [messages]
//! "Bold" = "Pogrubienie"
//! "%0 words" = ["%0 słowo", "%0 słowa", "%0 słów"]
//! ```
//!
//! ```rust,ignore
//! let pack = TranslationPack::from_toml_file("translations/pl.toml")?;
//! registry.register_pack(pack);
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::dictionary::Dictionary;
use crate::error::PackError;
use crate::plural::PluralRule;

/// One translation module: a locale, its messages, and its plural rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPack {
    /// Locale code the messages belong to.
    pub locale: String,
    /// Plural rule to install for the locale.
    pub plural_rule: PluralRule,
    /// Messages contributed by this pack.
    pub dictionary: Dictionary,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPack {
    locale: String,
    #[serde(default)]
    plural: Option<String>,
    #[serde(default)]
    messages: Dictionary,
}

impl TranslationPack {
    /// Build a pack in code; the plural rule is picked from the locale code.
    #[must_use]
    pub fn new(locale: impl Into<String>, dictionary: Dictionary) -> Self {
        let locale = locale.into();
        let plural_rule = PluralRule::for_locale(&locale);
        Self {
            locale,
            plural_rule,
            dictionary,
        }
    }

    /// Override the plural rule.
    #[must_use]
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.plural_rule = rule;
        self
    }

    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PackError> {
        let raw: RawPack = toml::from_str(s).map_err(PackError::Toml)?;
        Self::from_raw(raw, "toml")
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PackError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PackError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, PackError> {
        let raw: RawPack = serde_json::from_str(s).map_err(PackError::Json)?;
        Self::from_raw(raw, "json")
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PackError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PackError::Io)?;
        Self::from_json_str(&content)
    }

    fn from_raw(raw: RawPack, kind: &'static str) -> Result<Self, PackError> {
        let locale = raw.locale.trim();
        if locale.is_empty() || locale.chars().any(char::is_whitespace) {
            return Err(PackError::InvalidLocale(raw.locale.clone()));
        }

        let plural_rule = match raw.plural.as_deref() {
            Some(name) => {
                PluralRule::from_name(name).ok_or_else(|| PackError::UnknownPluralRule(name.into()))?
            }
            None => PluralRule::for_locale(locale),
        };

        tracing::debug!(
            locale,
            messages = raw.messages.len(),
            rule = %plural_rule,
            kind,
            "loaded translation pack"
        );

        Ok(Self {
            locale: locale.to_owned(),
            plural_rule,
            dictionary: raw.messages,
        })
    }
}
