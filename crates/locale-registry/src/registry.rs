//! The locale registry: one dictionary and one plural rule per locale.
//!
//! # Invariants
//!
//! 1. **Merge, never replace**: registering a locale again merges the new
//!    dictionary key by key into the existing one; later values win.
//! 2. **Last rule wins**: every registration replaces the locale's plural
//!    rule, and that rule governs every later lookup in the locale.
//! 3. **Monotonic**: entries are never removed. Registering identical data
//!    twice leaves the registry unchanged after the first time.
//!
//! The registry is a plain owned value. Construct it once at startup and
//! hand it (or a [`SharedRegistry`](crate::SharedRegistry)) to whatever
//! renders text.

use im::HashMap;

use crate::dictionary::{Dictionary, MergeStats, Message};
use crate::pack::TranslationPack;
use crate::plural::PluralRule;

/// Locale identifier (e.g. `"fr"`, `"zh-cn"`, `"sr-latn"`).
pub type LocaleCode = String;

/// All loaded data for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    dictionary: Dictionary,
    plural_rule: PluralRule,
}

impl LocaleEntry {
    fn new(plural_rule: PluralRule) -> Self {
        Self {
            dictionary: Dictionary::new(),
            plural_rule,
        }
    }

    /// The merged dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The authoritative plural rule for this locale.
    #[must_use]
    pub fn plural_rule(&self) -> PluralRule {
        self.plural_rule
    }

    /// Look up a message by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Message> {
        self.dictionary.get(key)
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    /// Whether the locale has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}

/// What one registration changed, for logging once it is committed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Registration {
    pub(crate) stats: MergeStats,
    pub(crate) previous_rule: PluralRule,
    pub(crate) rule: PluralRule,
    pub(crate) total: usize,
}

impl Registration {
    pub(crate) fn log(&self, locale: &str) {
        tracing::debug!(
            locale = %locale,
            added = self.stats.added,
            overwritten = self.stats.overwritten,
            rule = %self.rule,
            total = self.total,
            "registered translations"
        );
        if self.previous_rule != self.rule {
            tracing::debug!(
                locale = %locale,
                from = %self.previous_rule,
                to = %self.rule,
                "plural rule replaced"
            );
        }
    }
}

/// Registry of every loaded locale.
///
/// Backed by persistent maps, so `clone()` is O(1) and a registration
/// into the clone copies only the touched locale's path, never the other
/// locales' messages.
/// # Example
///
/// ```
/// use locale_registry::{LocaleRegistry, PluralRule};
///
/// let mut registry = LocaleRegistry::new();
/// registry.register_translations("fr", [("A", "x")].into_iter().collect(), PluralRule::Romance);
/// registry.register_translations("fr", [("B", "y")].into_iter().collect(), PluralRule::Romance);
///
/// let fr = registry.get_entry("fr").unwrap();
/// assert_eq!(fr.len(), 2);
/// assert!(registry.get_entry("de").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleRegistry {
    entries: HashMap<LocaleCode, LocaleEntry>,
}

impl LocaleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one translation module for `locale`.
    ///
    /// Creates the entry on first use, merges `dictionary` into it (later
    /// values win), and makes `plural_rule` the locale's rule. Always
    /// succeeds.
    pub fn register_translations(
        &mut self,
        locale: impl Into<String>,
        dictionary: Dictionary,
        plural_rule: PluralRule,
    ) {
        let locale = locale.into();
        self.merge_translations(&locale, dictionary, plural_rule)
            .log(&locale);
    }

    /// Registration without logging; callers log the returned outcome.
    pub(crate) fn merge_translations(
        &mut self,
        locale: &str,
        dictionary: Dictionary,
        plural_rule: PluralRule,
    ) -> Registration {
        let entry = self
            .entries
            .entry(locale.to_owned())
            .or_insert_with(|| LocaleEntry::new(plural_rule));
        let previous_rule = entry.plural_rule;
        let stats = entry.dictionary.merge(dictionary);
        entry.plural_rule = plural_rule;
        Registration {
            stats,
            previous_rule,
            rule: plural_rule,
            total: entry.dictionary.len(),
        }
    }

    /// Register a loaded translation pack.
    pub fn register_pack(&mut self, pack: TranslationPack) {
        let TranslationPack {
            locale,
            plural_rule,
            dictionary,
        } = pack;
        self.register_translations(locale, dictionary, plural_rule);
    }

    /// Entry for `locale`, or `None` if it was never registered.
    #[must_use]
    pub fn get_entry(&self, locale: &str) -> Option<&LocaleEntry> {
        self.entries.get(locale)
    }

    /// Whether `locale` has been registered.
    #[must_use]
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.entries.contains_key(locale)
    }

    /// All registered locale codes, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Number of registered locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no locale has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &LocaleEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn dict(pairs: &[(&str, &str)]) -> Dictionary {
        pairs.iter().copied().collect()
    }

    #[test]
    fn first_registration_creates_entry() {
        let mut registry = LocaleRegistry::new();
        assert!(registry.is_empty());

        registry.register_translations("fr", dict(&[("Bold", "Gras")]), PluralRule::Romance);

        let entry = registry.get_entry("fr").unwrap();
        assert_eq!(entry.get("Bold"), Some(&Message::from("Gras")));
        assert_eq!(entry.plural_rule(), PluralRule::Romance);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains_locale("fr"));
    }

    #[test]
    fn unknown_locale_is_absent() {
        let registry = LocaleRegistry::new();
        assert!(registry.get_entry("xx").is_none());
    }

    #[test]
    fn registrations_merge_dictionaries() {
        let mut registry = LocaleRegistry::new();
        registry.register_translations("fr", dict(&[("A", "x")]), PluralRule::Romance);
        registry.register_translations("fr", dict(&[("B", "y")]), PluralRule::Romance);

        let entry = registry.get_entry("fr").unwrap();
        assert_eq!(entry.get("A"), Some(&Message::from("x")));
        assert_eq!(entry.get("B"), Some(&Message::from("y")));
        assert_eq!(entry.len(), 2);
    }

    #[test]
    fn later_registration_wins_for_colliding_keys() {
        let mut registry = LocaleRegistry::new();
        registry.register_translations("de", dict(&[("Bold", "Fett")]), PluralRule::NotOne);
        registry.register_translations("de", dict(&[("Bold", "Fettdruck")]), PluralRule::NotOne);

        let entry = registry.get_entry("de").unwrap();
        assert_eq!(entry.get("Bold"), Some(&Message::from("Fettdruck")));
    }

    #[test]
    fn later_registration_replaces_rule() {
        let mut registry = LocaleRegistry::new();
        registry.register_translations("pt", Dictionary::new(), PluralRule::RomanceMillions);
        registry.register_translations("pt", Dictionary::new(), PluralRule::GreaterThanOne);
        assert_eq!(
            registry.get_entry("pt").unwrap().plural_rule(),
            PluralRule::GreaterThanOne
        );
    }

    #[test]
    fn identical_registration_is_idempotent() {
        let data = dict(&[("Bold", "Gras"), ("Italic", "Italique")]);

        let mut once = LocaleRegistry::new();
        once.register_translations("fr", data.clone(), PluralRule::Romance);

        let mut twice = LocaleRegistry::new();
        twice.register_translations("fr", data.clone(), PluralRule::Romance);
        twice.register_translations("fr", data, PluralRule::Romance);

        assert_eq!(once.get_entry("fr"), twice.get_entry("fr"));
        assert_eq!(once, twice);
    }

    #[test]
    fn locales_are_separate_and_sorted() {
        let mut registry = LocaleRegistry::new();
        registry.register_translations("zh-cn", dict(&[("Bold", "加粗")]), PluralRule::Invariant);
        registry.register_translations("ar", dict(&[("Bold", "عريض")]), PluralRule::Arabic);
        registry.register_translations("sr-latn", dict(&[("Bold", "Podebljano")]), PluralRule::SouthSlavic);

        assert_eq!(registry.locales(), vec!["ar", "sr-latn", "zh-cn"]);
        assert_eq!(
            registry.get_entry("ar").unwrap().get("Bold"),
            Some(&Message::from("عريض"))
        );
    }

    #[test]
    fn register_pack_uses_pack_rule() {
        let mut registry = LocaleRegistry::new();
        let pack = TranslationPack::new("pl", dict(&[("Bold", "Pogrubienie")]));
        registry.register_pack(pack);
        assert_eq!(
            registry.get_entry("pl").unwrap().plural_rule(),
            PluralRule::Polish
        );
    }

    #[test]
    fn clone_then_register_leaves_other_locales_shared() {
        let mut registry = LocaleRegistry::new();
        let de: Dictionary = (0..1_000).map(|i| (format!("k{i}"), format!("v{i}"))).collect();
        registry.register_translations("de", de, PluralRule::NotOne);

        let mut next = registry.clone();
        next.register_translations("fr", dict(&[("Bold", "Gras")]), PluralRule::Romance);

        let text_ptr = |r: &LocaleRegistry| match r.get_entry("de").and_then(|e| e.get("k1")) {
            Some(Message::Single(s)) => s.as_ptr(),
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(text_ptr(&registry), text_ptr(&next));
        assert!(registry.get_entry("fr").is_none());
        assert_eq!(next.locales(), vec!["de", "fr"]);
    }

    #[traced_test]
    #[test]
    fn registration_is_logged() {
        let mut registry = LocaleRegistry::new();
        registry.register_translations("fr", dict(&[("A", "x")]), PluralRule::Romance);
        registry.register_translations("fr", dict(&[("A", "y")]), PluralRule::NotOne);

        assert!(logs_contain("registered translations"));
        assert!(logs_contain("locale=fr"));
        assert!(logs_contain("overwritten=1"));
        assert!(logs_contain("plural rule replaced"));
    }
}
