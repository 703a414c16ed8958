//! Error types for lookups and pack loading.
//!
//! Missing locales and missing keys are not errors: lookups fall back to the
//! key text. Only data inconsistencies and load failures surface here.

use std::fmt;

/// A lookup found the message but could not select a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The locale's plural rule produced an index past the end of the
    /// message's variant list. The rule and the table disagree.
    PluralIndexOutOfRange {
        locale: String,
        key: String,
        index: usize,
        variants: usize,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PluralIndexOutOfRange {
                locale,
                key,
                index,
                variants,
            } => write!(
                f,
                "plural index {index} out of range for '{key}' in locale '{locale}' \
                 ({variants} variants)"
            ),
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors from loading a translation pack.
#[derive(Debug)]
pub enum PackError {
    /// I/O error reading a pack file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// The pack's locale code is empty or contains whitespace.
    InvalidLocale(String),
    /// The pack names a plural rule that does not exist.
    UnknownPluralRule(String),
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::InvalidLocale(l) => write!(f, "invalid locale: '{l}'"),
            Self::UnknownPluralRule(name) => write!(f, "unknown plural rule: '{name}'"),
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidLocale(_) | Self::UnknownPluralRule(_) => None,
        }
    }
}
