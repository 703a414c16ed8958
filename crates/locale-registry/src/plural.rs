//! Gettext-style plural rules: `count -> plural form index`.
//!
//! Each translation file carries one plural expression (gettext
//! `Plural-Forms`) that picks an index into a message's variant list. The
//! expressions are grammar data, not heuristics, so every family below is
//! spelled out exactly as the translation files for its locales define it.
//!
//! # Invariants
//!
//! 1. Every rule maps any `u64` to an index `< form_count()`.
//! 2. Rules are pure: the same count always yields the same index.
//! 3. [`PluralRule::for_locale`] is total: unknown codes get [`PluralRule::NotOne`].
//!
//! Some families reserve an index for fractional counts (`cs`, `sk`, `lt`).
//! Counts here are integers, so those indices are never produced, but the
//! form count still includes them so variant tables line up with the
//! translation files.

use core::fmt;

/// A pluralization rule for one locale's grammar.
///
/// Built-in variants cover the plural families shipped by the translation
/// packs; [`PluralRule::Custom`] takes any function pointer together with the
/// number of forms it addresses.
#[derive(Debug, Clone, Copy, Default)]
pub enum PluralRule {
    /// `0`. Languages without plural inflection (ja, zh, ko, vi, …).
    Invariant,
    /// `n != 1`. English, German, Dutch, Scandinavian, …
    #[default]
    NotOne,
    /// `n > 1`. Turkish, Persian, Uzbek.
    GreaterThanOne,
    /// `(n == 0 || n == 1) ? 0 : n != 0 && n % 1000000 == 0 ? 1 : 2`. French, Brazilian Portuguese.
    Romance,
    /// `n == 1 ? 0 : n != 0 && n % 1000000 == 0 ? 1 : 2`. Spanish, Italian, Portuguese.
    RomanceMillions,
    /// Russian and Ukrainian four-form rule.
    EastSlavic,
    /// Belarusian four-form rule. Same indices as [`EastSlavic`](Self::EastSlavic);
    /// kept as its own name so `be` packs can say `plural = "belarusian"`.
    Belarusian,
    /// Bosnian, Croatian, Serbian three-form rule.
    SouthSlavic,
    /// `n == 1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2`.
    Polish,
    /// Czech and Slovak: `1 → 0`, `2..=4 → 1`, otherwise `3`.
    CzechSlovak,
    /// Slovenian, keyed on `n % 100`.
    Slovenian,
    /// Lithuanian, keyed on `n % 10` outside the teens.
    Lithuanian,
    /// Latvian, with a dedicated zero form.
    Latvian,
    /// Romanian three-form rule.
    Romanian,
    /// Arabic six-form rule.
    Arabic,
    /// Hebrew: one, two, other.
    Hebrew,
    /// Irish five-form rule.
    Irish,
    /// Welsh four-form rule.
    Welsh,
    /// `n % 10 != 1 || n % 100 == 11`.
    Icelandic,
    /// `n % 10 == 1 && n % 100 != 11 ? 0 : 1`.
    Macedonian,
    /// Caller-supplied rule and the number of forms it addresses.
    Custom(fn(u64) -> usize, usize),
}

impl PluralRule {
    /// Every built-in rule, in declaration order.
    pub const BUILT_IN: [PluralRule; 20] = [
        Self::Invariant,
        Self::NotOne,
        Self::GreaterThanOne,
        Self::Romance,
        Self::RomanceMillions,
        Self::EastSlavic,
        Self::Belarusian,
        Self::SouthSlavic,
        Self::Polish,
        Self::CzechSlovak,
        Self::Slovenian,
        Self::Lithuanian,
        Self::Latvian,
        Self::Romanian,
        Self::Arabic,
        Self::Hebrew,
        Self::Irish,
        Self::Welsh,
        Self::Icelandic,
        Self::Macedonian,
    ];

    /// Resolve `n` to a plural form index.
    #[must_use]
    pub fn index(&self, n: u64) -> usize {
        let n10 = n % 10;
        let n100 = n % 100;
        match self {
            Self::Invariant => 0,
            Self::NotOne => usize::from(n != 1),
            Self::GreaterThanOne => usize::from(n > 1),
            Self::Romance => {
                if n == 0 || n == 1 {
                    0
                } else if n % 1_000_000 == 0 {
                    1
                } else {
                    2
                }
            }
            Self::RomanceMillions => {
                if n == 1 {
                    0
                } else if n != 0 && n % 1_000_000 == 0 {
                    1
                } else {
                    2
                }
            }
            Self::EastSlavic | Self::Belarusian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else if n10 == 0 || (5..=9).contains(&n10) || (11..=14).contains(&n100) {
                    2
                } else {
                    3
                }
            }
            Self::SouthSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && (n100 < 10 || n100 >= 20) {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && (n100 < 10 || n100 >= 20) {
                    1
                } else {
                    2
                }
            }
            Self::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 3,
            },
            Self::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            Self::Lithuanian => {
                let outside_teens = !(11..=19).contains(&n100);
                if n10 == 1 && outside_teens {
                    0
                } else if (2..=9).contains(&n10) && outside_teens {
                    1
                } else {
                    3
                }
            }
            Self::Latvian => {
                if n10 == 0 || (11..=19).contains(&n100) {
                    0
                } else if n10 == 1 && n100 != 11 {
                    1
                } else {
                    2
                }
            }
            Self::Romanian => {
                if n == 1 {
                    0
                } else if n100 > 19 || (n100 == 0 && n != 0) {
                    2
                } else {
                    1
                }
            }
            Self::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if (11..=99).contains(&n100) => 4,
                _ => 5,
            },
            Self::Hebrew => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            Self::Irish => match n {
                1 => 0,
                2 => 1,
                3..=6 => 2,
                7..=10 => 3,
                _ => 4,
            },
            Self::Welsh => match n {
                1 => 0,
                2 => 1,
                8 | 11 => 3,
                _ => 2,
            },
            Self::Icelandic => usize::from(n10 != 1 || n100 == 11),
            Self::Macedonian => usize::from(!(n10 == 1 && n100 != 11)),
            Self::Custom(f, _) => f(n),
        }
    }

    /// Number of variants a message table needs under this rule.
    #[must_use]
    pub const fn form_count(&self) -> usize {
        match self {
            Self::Invariant => 1,
            Self::NotOne | Self::GreaterThanOne | Self::Icelandic | Self::Macedonian => 2,
            Self::Romance
            | Self::RomanceMillions
            | Self::SouthSlavic
            | Self::Polish
            | Self::Latvian
            | Self::Romanian
            | Self::Hebrew => 3,
            Self::EastSlavic
            | Self::Belarusian
            | Self::CzechSlovak
            | Self::Slovenian
            | Self::Lithuanian
            | Self::Welsh => 4,
            Self::Irish => 5,
            Self::Arabic => 6,
            Self::Custom(_, forms) => *forms,
        }
    }

    /// Snake-case name, as used in translation packs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Invariant => "invariant",
            Self::NotOne => "not_one",
            Self::GreaterThanOne => "greater_than_one",
            Self::Romance => "romance",
            Self::RomanceMillions => "romance_millions",
            Self::EastSlavic => "east_slavic",
            Self::Belarusian => "belarusian",
            Self::SouthSlavic => "south_slavic",
            Self::Polish => "polish",
            Self::CzechSlovak => "czech_slovak",
            Self::Slovenian => "slovenian",
            Self::Lithuanian => "lithuanian",
            Self::Latvian => "latvian",
            Self::Romanian => "romanian",
            Self::Arabic => "arabic",
            Self::Hebrew => "hebrew",
            Self::Irish => "irish",
            Self::Welsh => "welsh",
            Self::Icelandic => "icelandic",
            Self::Macedonian => "macedonian",
            Self::Custom(..) => "custom",
        }
    }

    /// Parse a built-in rule from its [`name`](Self::name).
    ///
    /// `"custom"` is not parseable: a function cannot come from data.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::BUILT_IN
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(name))
    }

    /// Pick the rule for a locale code.
    ///
    /// Matches the full code first (`"pt-br"`), then the primary language
    /// subtag (`"sr-latn"` → `"sr"`). Codes are compared case-insensitively
    /// and `_` is treated as `-`. Unknown languages get [`PluralRule::NotOne`].
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let code = locale.trim().to_ascii_lowercase().replace('_', "-");
        if let Some(rule) = rule_for_code(&code) {
            return rule;
        }
        let primary = code.split('-').next().unwrap_or("");
        rule_for_code(primary).unwrap_or(Self::NotOne)
    }
}

fn rule_for_code(code: &str) -> Option<PluralRule> {
    let rule = match code {
        "pt-br" => PluralRule::Romance,
        "ja" | "ko" | "zh" | "vi" | "id" | "ms" | "th" | "km" | "lo" | "my" => {
            PluralRule::Invariant
        }
        "tr" | "fa" | "uz" => PluralRule::GreaterThanOne,
        "fr" => PluralRule::Romance,
        "es" | "it" | "pt" => PluralRule::RomanceMillions,
        "ru" | "uk" => PluralRule::EastSlavic,
        "be" => PluralRule::Belarusian,
        "bs" | "hr" | "sr" => PluralRule::SouthSlavic,
        "pl" => PluralRule::Polish,
        "cs" | "sk" => PluralRule::CzechSlovak,
        "sl" => PluralRule::Slovenian,
        "lt" => PluralRule::Lithuanian,
        "lv" => PluralRule::Latvian,
        "ro" => PluralRule::Romanian,
        "ar" => PluralRule::Arabic,
        "he" => PluralRule::Hebrew,
        "ga" => PluralRule::Irish,
        "cy" => PluralRule::Welsh,
        "is" => PluralRule::Icelandic,
        "mk" => PluralRule::Macedonian,
        "en" | "de" | "nl" | "sv" | "da" | "nb" | "no" | "fi" | "et" | "el" | "bg" | "hu"
        | "ca" | "gl" | "eu" | "eo" | "sq" | "az" | "af" | "ast" | "tk" | "ku" | "ug" | "ur"
        | "gu" | "hi" | "ne" | "si" => PluralRule::NotOne,
        _ => return None,
    };
    Some(rule)
}

impl PartialEq for PluralRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(f, a), Self::Custom(g, b)) => std::ptr::fn_addr_eq(*f, *g) && a == b,
            (Self::Custom(..), _) | (_, Self::Custom(..)) => false,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Eq for PluralRule {}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(rule: PluralRule, counts: &[u64]) -> Vec<usize> {
        counts.iter().map(|&n| rule.index(n)).collect()
    }

    #[test]
    fn polish_one_few_many() {
        assert_eq!(indices(PluralRule::Polish, &[1, 2, 5]), vec![0, 1, 2]);
        assert_eq!(indices(PluralRule::Polish, &[0, 12, 22, 25, 112, 122]), vec![2, 2, 1, 2, 2, 1]);
        // 21 is "many" in Polish, unlike the South Slavic rule.
        assert_eq!(PluralRule::Polish.index(21), 2);
    }

    #[test]
    fn japanese_is_invariant() {
        let rule = PluralRule::for_locale("ja");
        assert_eq!(rule, PluralRule::Invariant);
        for n in [0, 1, 2, 5, 11, 100, u64::MAX] {
            assert_eq!(rule.index(n), 0);
        }
    }

    #[test]
    fn not_one_and_greater_than_one() {
        assert_eq!(indices(PluralRule::NotOne, &[0, 1, 2]), vec![1, 0, 1]);
        assert_eq!(indices(PluralRule::GreaterThanOne, &[0, 1, 2]), vec![0, 0, 1]);
    }

    #[test]
    fn romance_millions() {
        assert_eq!(indices(PluralRule::Romance, &[0, 1, 2, 1_000_000, 2_000_001]), vec![0, 0, 2, 1, 2]);
        assert_eq!(indices(PluralRule::RomanceMillions, &[0, 1, 2, 1_000_000]), vec![2, 0, 2, 1]);
    }

    #[test]
    fn east_slavic() {
        let rule = PluralRule::EastSlavic;
        assert_eq!(indices(rule, &[1, 21, 101]), vec![0, 0, 0]);
        assert_eq!(indices(rule, &[2, 3, 4, 22, 34]), vec![1, 1, 1, 1, 1]);
        assert_eq!(indices(rule, &[0, 5, 11, 12, 14, 111, 20]), vec![2, 2, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn belarusian() {
        let rule = PluralRule::for_locale("be");
        assert_eq!(rule, PluralRule::Belarusian);
        assert_eq!(
            indices(rule, &[1, 2, 5, 11, 12, 21, 22, 111]),
            vec![0, 1, 2, 2, 2, 0, 1, 2]
        );
        for n in 0..=1_000 {
            assert_eq!(rule.index(n), PluralRule::EastSlavic.index(n), "n = {n}");
        }
    }

    #[test]
    fn hebrew_one_two_other() {
        let rule = PluralRule::for_locale("he");
        assert_eq!(rule, PluralRule::Hebrew);
        assert_eq!(indices(rule, &[0, 1, 2, 3, 10, 20]), vec![2, 0, 1, 2, 2, 2]);
        assert_eq!(rule.form_count(), 3);
    }

    #[test]
    fn south_slavic_differs_from_polish_on_21() {
        assert_eq!(PluralRule::SouthSlavic.index(21), 0);
        assert_eq!(PluralRule::SouthSlavic.index(11), 2);
        assert_eq!(PluralRule::SouthSlavic.index(23), 1);
    }

    #[test]
    fn czech_slovak_skips_fraction_form() {
        assert_eq!(indices(PluralRule::CzechSlovak, &[0, 1, 2, 4, 5, 22]), vec![3, 0, 1, 1, 3, 3]);
    }

    #[test]
    fn slovenian_uses_last_two_digits() {
        assert_eq!(indices(PluralRule::Slovenian, &[1, 101, 2, 102, 3, 4, 5, 0]), vec![0, 0, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn lithuanian() {
        assert_eq!(indices(PluralRule::Lithuanian, &[1, 21, 11, 2, 9, 12, 10, 0]), vec![0, 0, 3, 1, 1, 3, 3, 3]);
    }

    #[test]
    fn latvian_zero_form() {
        assert_eq!(indices(PluralRule::Latvian, &[0, 10, 11, 19, 1, 21, 2, 22]), vec![0, 0, 0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn romanian() {
        assert_eq!(indices(PluralRule::Romanian, &[1, 0, 2, 19, 20, 100, 101, 119, 120]), vec![0, 1, 1, 1, 2, 2, 1, 1, 2]);
    }

    #[test]
    fn arabic_six_forms() {
        assert_eq!(
            indices(PluralRule::Arabic, &[0, 1, 2, 3, 10, 11, 99, 100, 102, 103, 111]),
            vec![0, 1, 2, 3, 3, 4, 4, 5, 5, 3, 4]
        );
    }

    #[test]
    fn irish_and_welsh() {
        assert_eq!(indices(PluralRule::Irish, &[1, 2, 3, 6, 7, 10, 11, 0]), vec![0, 1, 2, 2, 3, 3, 4, 4]);
        assert_eq!(indices(PluralRule::Welsh, &[1, 2, 3, 8, 11, 0]), vec![0, 1, 2, 3, 3, 2]);
    }

    #[test]
    fn icelandic_and_macedonian() {
        assert_eq!(indices(PluralRule::Icelandic, &[1, 21, 11, 2]), vec![0, 0, 1, 1]);
        assert_eq!(indices(PluralRule::Macedonian, &[1, 21, 11, 2]), vec![0, 0, 1, 1]);
    }

    #[test]
    fn for_locale_prefers_full_code() {
        assert_eq!(PluralRule::for_locale("pt-br"), PluralRule::Romance);
        assert_eq!(PluralRule::for_locale("pt_BR"), PluralRule::Romance);
        assert_eq!(PluralRule::for_locale("pt"), PluralRule::RomanceMillions);
        assert_eq!(PluralRule::for_locale("sr-latn"), PluralRule::SouthSlavic);
        assert_eq!(PluralRule::for_locale("zh-cn"), PluralRule::Invariant);
        assert_eq!(PluralRule::for_locale("en-GB"), PluralRule::NotOne);
        assert_eq!(PluralRule::for_locale("xx"), PluralRule::NotOne);
        assert_eq!(PluralRule::for_locale(""), PluralRule::NotOne);
    }

    #[test]
    fn names_round_trip_for_built_ins() {
        for rule in PluralRule::BUILT_IN {
            assert_eq!(PluralRule::from_name(rule.name()), Some(rule));
        }
        assert_eq!(PluralRule::from_name("custom"), None);
        assert_eq!(PluralRule::from_name("klingon"), None);
    }

    #[test]
    fn custom_rule_equality_and_forms() {
        fn two_or_more(n: u64) -> usize {
            usize::from(n >= 2)
        }
        let rule = PluralRule::Custom(two_or_more, 2);
        assert_eq!(rule.index(1), 0);
        assert_eq!(rule.index(2), 1);
        assert_eq!(rule.form_count(), 2);
        assert_eq!(rule, PluralRule::Custom(two_or_more, 2));
        assert_ne!(rule, PluralRule::Custom(two_or_more, 3));
        assert_ne!(rule, PluralRule::NotOne);
        assert_eq!(rule.to_string(), "custom");
    }

    #[test]
    fn built_in_indices_within_form_count() {
        for rule in PluralRule::BUILT_IN {
            for n in (0..=1_250).chain([1_000_000, 2_000_000, u64::MAX]) {
                assert!(
                    rule.index(n) < rule.form_count(),
                    "{rule} gave {} for {n}, form count {}",
                    rule.index(n),
                    rule.form_count()
                );
            }
        }
    }
}
