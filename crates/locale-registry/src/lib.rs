#![forbid(unsafe_code)]

//! Locale translation registry with per-locale plural rules.
//!
//! Holds one dictionary and one pluralization rule per locale code, merges
//! dictionaries incrementally as translation packs load, and resolves
//! `(locale, key, count)` to display text.
//!
//! # Role
//! UI code labels its controls through [`LocaleRegistry::translate`]. Each
//! editor feature ships its own translation pack per locale; the registry
//! layers them in load order so later packs win.
//!
//! # How it fits together
//! - [`plural`]: the gettext-style rule table (`count -> form index`).
//! - [`dictionary`]: messages (single string or plural variants).
//! - [`registry`]: the owned, injectable registry and its entries.
//! - [`translate`]: lookup, fallback to the key, `%0` placeholders.
//! - [`pack`]: translation packs loaded from TOML or JSON.
//! - [`shared`]: snapshot-swap wrapper for concurrent readers and writers.
//! - [`coverage`]: missing/untranslated keys and rule/table mismatches.
//!
//! ```
//! use locale_registry::{Dictionary, LocaleRegistry, PluralRule};
//!
//! let mut registry = LocaleRegistry::new();
//! let mut pl = Dictionary::new();
//! pl.insert("Bold", "Pogrubienie");
//! pl.insert_plural("%0 words", ["%0 słowo", "%0 słowa", "%0 słów"]);
//! registry.register_translations("pl", pl, PluralRule::Polish);
//!
//! assert_eq!(registry.translate("pl", "Bold", None).unwrap(), "Pogrubienie");
//! assert_eq!(registry.translate("pl", "%0 words", Some(5)).unwrap(), "%0 słów");
//! assert_eq!(
//!     registry.translate_with("pl", "%0 words", Some(2), &["2"]).unwrap(),
//!     "2 słowa"
//! );
//! assert_eq!(registry.translate("xx", "Bold", None).unwrap(), "Bold");
//! ```

pub mod coverage;
pub mod dictionary;
pub mod error;
pub mod pack;
pub mod plural;
pub mod registry;
pub mod shared;
pub mod translate;

pub use coverage::{CoverageReport, LocaleCoverage, RuleMismatch};
pub use dictionary::{Dictionary, MergeStats, Message};
pub use error::{LookupError, PackError};
pub use pack::TranslationPack;
pub use plural::PluralRule;
pub use registry::{LocaleEntry, LocaleRegistry};
pub use shared::SharedRegistry;
