#![no_main]

use arbitrary::Arbitrary;
use locale_registry::{Dictionary, LocaleRegistry, PluralRule};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    locale: String,
    key: String,
    template: String,
    values: Vec<String>,
    count: Option<u64>,
}

fuzz_target!(|input: Input| {
    let rule = PluralRule::for_locale(&input.locale);
    if let Some(n) = input.count {
        assert!(rule.index(n) < rule.form_count(), "rule {rule} out of range for {n}");
    }

    let mut dict = Dictionary::new();
    dict.insert(input.key.clone(), input.template.clone());
    let mut registry = LocaleRegistry::new();
    registry.register_translations(input.locale.clone(), dict, rule);

    let values: Vec<&str> = input.values.iter().map(String::as_str).collect();
    let resolved = registry
        .translate(&input.locale, &input.key, input.count)
        .expect("single-string lookup never fails");
    assert_eq!(resolved, input.template);

    let filled = registry
        .translate_with(&input.locale, &input.key, input.count, &values)
        .expect("single-string lookup never fails");
    if !input.template.contains('%') {
        assert_eq!(filled, input.template);
    }

    // Unregistered locales echo the key.
    let other = format!("{}-unregistered", input.locale);
    assert_eq!(registry.translate(&other, &input.key, None).unwrap(), input.key);
});
