#![no_main]

use locale_registry::{LocaleRegistry, TranslationPack};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for pack in [
        TranslationPack::from_toml_str(text),
        TranslationPack::from_json_str(text),
    ]
    .into_iter()
    .flatten()
    {
        let locale = pack.locale.clone();
        let keys: Vec<String> = pack.dictionary.keys().map(String::from).collect();

        let mut registry = LocaleRegistry::new();
        registry.register_pack(pack);

        // Post-conditions: every loaded key resolves or reports a rule/table
        // mismatch that validate() also sees.
        let mismatches = registry.validate();
        for key in &keys {
            for count in [0, 1, 2, 5, 11, 21, 101, 1_000_000] {
                if registry.translate(&locale, key, Some(count)).is_err() {
                    assert!(
                        mismatches.iter().any(|m| &m.key == key),
                        "lookup error for '{key}' not reported by validate()"
                    );
                }
            }
        }
    }
});
