//! Snapshot-swap registry for concurrent readers and writers.
//!
//! Lookups happen every time a label renders; registrations happen a handful
//! of times while features load. [`SharedRegistry`] keeps the current
//! [`LocaleRegistry`] behind an [`arc_swap::ArcSwap`]:
//!
//! - reads take a wait-free snapshot and never see a half-merged dictionary;
//! - writes clone the snapshot, merge into the clone, and swap it in with
//!   `rcu`, retrying if another writer got there first. No merge is lost.
//!
//! The clone is structural: locales a write does not touch stay shared
//! between the old and new snapshot.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::dictionary::Dictionary;
use crate::error::LookupError;
use crate::pack::TranslationPack;
use crate::plural::PluralRule;
use crate::registry::LocaleRegistry;

/// Thread-safe handle to a [`LocaleRegistry`].
///
/// ```
/// use std::sync::Arc;
/// use locale_registry::{PluralRule, SharedRegistry};
///
/// let shared = Arc::new(SharedRegistry::new());
/// shared.register_translations("de", [("Bold", "Fett")].into_iter().collect(), PluralRule::NotOne);
/// assert_eq!(shared.translate("de", "Bold", None).unwrap(), "Fett");
/// ```
pub struct SharedRegistry {
    inner: ArcSwap<LocaleRegistry>,
}

impl SharedRegistry {
    /// Create an empty shared registry.
    #[must_use]
    pub fn new() -> Self {
        Self::from_registry(LocaleRegistry::new())
    }

    /// Wrap an existing registry.
    #[must_use]
    pub fn from_registry(registry: LocaleRegistry) -> Self {
        Self {
            inner: ArcSwap::from_pointee(registry),
        }
    }

    /// Current registry state. Later registrations do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LocaleRegistry> {
        self.inner.load_full()
    }

    /// Merge a translation module into the shared state.
    ///
    /// Same semantics as [`LocaleRegistry::register_translations`].
    pub fn register_translations(
        &self,
        locale: impl Into<String>,
        dictionary: Dictionary,
        plural_rule: PluralRule,
    ) {
        let locale = locale.into();
        let mut outcome = None;
        self.inner.rcu(|current| {
            let mut next = LocaleRegistry::clone(current);
            outcome = Some(next.merge_translations(&locale, dictionary.clone(), plural_rule));
            next
        });
        if let Some(registration) = outcome {
            registration.log(&locale);
        }
    }

    /// Merge a loaded translation pack into the shared state.
    pub fn register_pack(&self, pack: TranslationPack) {
        self.register_translations(pack.locale, pack.dictionary, pack.plural_rule);
    }

    /// See [`LocaleRegistry::translate`].
    pub fn translate(
        &self,
        locale: &str,
        key: &str,
        count: Option<u64>,
    ) -> Result<String, LookupError> {
        self.inner.load().translate(locale, key, count)
    }

    /// See [`LocaleRegistry::translate_with`].
    pub fn translate_with(
        &self,
        locale: &str,
        key: &str,
        count: Option<u64>,
        values: &[&str],
    ) -> Result<String, LookupError> {
        self.inner.load().translate_with(locale, key, count, values)
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRegistry")
            .field("locales", &self.inner.load().locales())
            .finish()
    }
}
