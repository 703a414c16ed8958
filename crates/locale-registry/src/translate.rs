//! Resolving messages to display text.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing locale | Locale never registered | Returns the key |
//! | Missing key | Key not in the locale | Returns the key |
//! | Empty value | Not yet translated | Returns `""` |
//! | Plural index out of range | Rule and variant table disagree | [`LookupError`] |
//! | Unmatched `%N` | Fewer values than placeholders | Placeholder left as-is |

use crate::dictionary::Message;
use crate::error::LookupError;
use crate::registry::LocaleRegistry;

/// Count used for plural messages when the caller gives none.
pub const DEFAULT_COUNT: u64 = 1;

impl LocaleRegistry {
    /// Resolve `key` in `locale` to display text.
    ///
    /// Single-string messages ignore `count`. Plural messages pick the
    /// variant at the locale rule's index for `count` (1 when absent).
    /// Unknown locales and keys fall back to `key` itself.
    pub fn translate(
        &self,
        locale: &str,
        key: &str,
        count: Option<u64>,
    ) -> Result<String, LookupError> {
        self.resolve(locale, key, count).map(str::to_owned)
    }

    /// Like [`translate`](Self::translate), then replace `%0`, `%1`, … with
    /// `values[0]`, `values[1]`, … in a single pass.
    pub fn translate_with(
        &self,
        locale: &str,
        key: &str,
        count: Option<u64>,
        values: &[&str],
    ) -> Result<String, LookupError> {
        self.resolve(locale, key, count)
            .map(|template| interpolate(template, values))
    }

    fn resolve<'a>(
        &'a self,
        locale: &str,
        key: &'a str,
        count: Option<u64>,
    ) -> Result<&'a str, LookupError> {
        let Some(entry) = self.get_entry(locale) else {
            tracing::trace!(locale, key, "locale not registered; using key");
            return Ok(key);
        };
        let Some(message) = entry.get(key) else {
            tracing::trace!(locale, key, "key not translated; using key");
            return Ok(key);
        };

        match message {
            Message::Single(text) => Ok(text),
            Message::Plural(variants) => {
                let index = entry.plural_rule().index(count.unwrap_or(DEFAULT_COUNT));
                variants.get(index).map(String::as_str).ok_or_else(|| {
                    tracing::warn!(
                        locale,
                        key,
                        index,
                        variants = variants.len(),
                        rule = %entry.plural_rule(),
                        "plural index out of range"
                    );
                    LookupError::PluralIndexOutOfRange {
                        locale: locale.to_owned(),
                        key: key.to_owned(),
                        index,
                        variants: variants.len(),
                    }
                })
            }
        }
    }
}

/// Single-pass `%N` substitution. Unmatched placeholders are left as-is and
/// substituted text is never rescanned.
pub(crate) fn interpolate(template: &str, values: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let value = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|i| values.get(i));
        match value {
            Some(value) => {
                result.push_str(value);
                rest = &after[digits..];
            }
            None => {
                result.push('%');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}
