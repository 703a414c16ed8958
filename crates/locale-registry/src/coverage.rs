//! Translation coverage and consistency checks.
//!
//! Lookups never fail on missing data, so gaps only show up on screen as
//! untranslated source text. These reports surface them ahead of time:
//! keys a locale lacks, keys stored empty, and plural tables whose length
//! disagrees with the locale's rule (the only case that makes
//! [`translate`](crate::LocaleRegistry::translate) return an error).

use crate::dictionary::Message;
use crate::registry::LocaleRegistry;

/// A plural message whose variant count differs from its rule's form count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMismatch {
    /// Locale whose rule the table is checked against.
    pub locale: String,
    /// Message key of the plural table.
    pub key: String,
    /// Variants stored for the key.
    pub variants: usize,
    /// Forms the locale's rule addresses.
    pub expected: usize,
}

/// Coverage report across every registered locale.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Number of unique keys across all locales.
    pub total_keys: usize,
    /// Per-locale coverage, sorted by locale code.
    pub locales: Vec<LocaleCoverage>,
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    /// Locale code the statistics describe.
    pub locale: String,
    /// Reference keys present in the locale.
    pub present: usize,
    /// Reference keys absent from the locale, sorted.
    pub missing: Vec<String>,
    /// Present keys stored with empty text, sorted.
    pub untranslated: Vec<String>,
    /// `present / total_keys` as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}

impl LocaleRegistry {
    /// Every key across every locale, sorted and deduplicated.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries()
            .flat_map(|(_, entry)| entry.dictionary().keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from `reference` that `locale` does not define, sorted.
    ///
    /// An unregistered locale is missing every reference key.
    #[must_use]
    pub fn missing_keys(&self, locale: &str, reference: &[&str]) -> Vec<String> {
        let entry = self.get_entry(locale);
        let mut missing: Vec<String> = reference
            .iter()
            .filter(|key| entry.is_none_or(|e| e.get(key).is_none()))
            .map(|&key| key.to_owned())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    /// Keys in `locale` stored with empty text, sorted.
    #[must_use]
    pub fn untranslated_keys(&self, locale: &str) -> Vec<String> {
        let Some(entry) = self.get_entry(locale) else {
            return Vec::new();
        };
        let mut keys: Vec<String> = entry
            .dictionary()
            .iter()
            .filter(|(_, message)| message.is_untranslated())
            .map(|(key, _)| key.to_owned())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Plural messages whose variant count differs from the locale rule's
    /// form count, sorted by `(locale, key)`.
    ///
    /// Tables longer than the rule needs never fail a lookup but are still
    /// reported; shorter ones fail for some counts.
    #[must_use]
    pub fn validate(&self) -> Vec<RuleMismatch> {
        let mut mismatches = Vec::new();
        for (locale, entry) in self.entries() {
            let expected = entry.plural_rule().form_count();
            for (key, message) in entry.dictionary().iter() {
                let Message::Plural(variants) = message else {
                    continue;
                };
                if variants.len() != expected {
                    mismatches.push(RuleMismatch {
                        locale: locale.to_owned(),
                        key: key.to_owned(),
                        variants: variants.len(),
                        expected,
                    });
                }
            }
        }
        mismatches.sort_unstable_by(|a, b| (&a.locale, &a.key).cmp(&(&b.locale, &b.key)));
        if !mismatches.is_empty() {
            tracing::warn!(count = mismatches.len(), "plural tables disagree with rules");
        }
        mismatches
    }

    /// Coverage of every locale against the union of all keys.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all = self.all_keys();
        let reference: Vec<&str> = all.iter().map(String::as_str).collect();
        let total = reference.len();

        let locales = self
            .locales()
            .into_iter()
            .map(|locale| {
                let missing = self.missing_keys(locale, &reference);
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale: locale.to_owned(),
                    present,
                    missing,
                    untranslated: self.untranslated_keys(locale),
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}
