// SPDX-License-Identifier: MPL-2.0
//! Three-tier locale resolution.
//!
//! Maps an arbitrary input locale string to the best-matching registered
//! dictionary, merged over the English baseline so the result always has
//! full key coverage:
//!
//! 1. **Exact tier** — `language-REGION` is registered as given.
//! 2. **Language tier** — first registered code (declaration order) that
//!    starts with the language part of the input.
//! 3. **Fallback tier** — first registered code starting with `en`.
//!
//! Tier 2 is a raw string-prefix match, not a language-subtag comparison.
//! That is long-standing behavior the rest of the site depends on (an input
//! of `tr` matches `tr-TR` only because no other code starts with `tr`), so
//! it is kept as-is rather than tightened.

use crate::registry::{Dictionary, LocaleRegistry};
use serde_json::Value;

/// Resolves `input` to an effective dictionary.
///
/// Total over all inputs: a `None`, empty, or unmatchable input falls through
/// to the English baseline. The returned dictionary is the selected overlay
/// deep-merged onto the baseline.
pub fn resolve(registry: &LocaleRegistry, input: Option<&str>) -> Dictionary {
    let (language, region) = match input.filter(|s| !s.is_empty()) {
        Some(s) => {
            let mut parts = s.split(['-', '_']);
            (parts.next(), parts.next())
        }
        None => (None, None),
    };

    let selected = select_code(registry, language, region);

    let mut effective = registry.baseline().clone();
    if let Some(overlay) = selected.and_then(|code| registry.lookup(code)) {
        deep_merge(&mut effective, overlay);
    }
    effective
}

fn select_code<'r>(
    registry: &'r LocaleRegistry,
    language: Option<&str>,
    region: Option<&str>,
) -> Option<&'r str> {
    if let (Some(language), Some(region)) = (language, region) {
        let specific = format!("{language}-{region}");
        if let Some(code) = registry.codes().find(|code| *code == specific) {
            return Some(code);
        }
    }

    if let Some(language) = language {
        if let Some(code) = registry.codes().find(|code| code.starts_with(language)) {
            return Some(code);
        }
    }

    registry.codes().find(|code| code.starts_with("en"))
}

/// Recursively merges `overlay` into `base`. Overlay keys win; keys absent
/// from the overlay keep the base value. Non-object values are replaced
/// wholesale.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) if base_value.is_object() && overlay_value.is_object() => {
                        deep_merge(base_value, overlay_value);
                    }
                    _ => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn embedded() -> LocaleRegistry {
        LocaleRegistry::from_embedded().expect("embedded registry should build")
    }

    /// Every key of `expected` must be present in `actual`, recursively.
    fn assert_covers(actual: &Value, expected: &Value, path: &str) {
        if let Value::Object(expected_map) = expected {
            let actual_map = actual
                .as_object()
                .unwrap_or_else(|| panic!("expected object at {path}"));
            for (key, expected_value) in expected_map {
                let actual_value = actual_map
                    .get(key)
                    .unwrap_or_else(|| panic!("missing key {path}/{key}"));
                assert_covers(actual_value, expected_value, &format!("{path}/{key}"));
            }
        }
    }

    #[test]
    fn every_registered_code_resolves_with_full_baseline_coverage() {
        let registry = embedded();
        let baseline = registry.baseline().clone();
        let codes: Vec<String> = registry.codes().map(str::to_string).collect();
        for code in codes {
            let resolved = resolve(&registry, Some(&code));
            assert_covers(&resolved, &baseline, &code);
        }
    }

    #[test]
    fn exact_tier_selects_full_match() {
        let registry = embedded();
        let resolved = resolve(&registry, Some("zh-CN"));
        assert_eq!(resolved["LOCALE"], "简体中文");
        // Backfilled from the baseline where the overlay is complete too.
        assert_eq!(resolved["NAV"]["INDEX"], "博客");
    }

    #[test]
    fn language_tier_selects_first_prefix_match_in_declaration_order() {
        let registry = embedded();
        // zh-CN is declared before zh-HK and zh-TW.
        let resolved = resolve(&registry, Some("zh"));
        assert_eq!(resolved["LOCALE"], "简体中文");
    }

    #[test]
    fn underscore_separator_is_accepted() {
        let registry = embedded();
        let resolved = resolve(&registry, Some("fr_FR"));
        assert_eq!(resolved["LOCALE"], "Français");
    }

    #[test]
    fn unregistered_code_falls_back_to_english() {
        let registry = embedded();
        let resolved = resolve(&registry, Some("xx-YY"));
        assert_eq!(resolved["LOCALE"], "English");
    }

    #[test]
    fn none_and_empty_input_resolve_to_english() {
        let registry = embedded();
        assert_eq!(resolve(&registry, None)["LOCALE"], "English");
        assert_eq!(resolve(&registry, Some(""))["LOCALE"], "English");
    }

    #[test]
    fn partial_overlay_keeps_english_values_for_missing_keys() {
        let registry = embedded();
        // ja-JP ships without SEARCH or POST sections.
        let resolved = resolve(&registry, Some("ja-JP"));
        assert_eq!(resolved["LOCALE"], "日本語");
        assert_eq!(resolved["SEARCH"]["ARTICLES"], "Search articles");
        assert_eq!(resolved["POST"]["BACK"], "Back");
    }

    #[test]
    fn region_case_is_not_normalized() {
        let registry = embedded();
        // "fr-fr" is not registered and "fr" prefix-matches fr-FR instead.
        let resolved = resolve(&registry, Some("fr-fr"));
        assert_eq!(resolved["LOCALE"], "Français");
        // But an unmatched language part falls through entirely.
        let resolved = resolve(&registry, Some("FR-FR"));
        assert_eq!(resolved["LOCALE"], "English");
    }

    #[test]
    fn deep_merge_overlay_wins_and_recurses() {
        let mut base = json!({
            "A": {"X": "base-x", "Y": "base-y"},
            "B": "base-b"
        });
        let overlay = json!({
            "A": {"X": "overlay-x"},
            "C": "overlay-c"
        });
        deep_merge(&mut base, &overlay);
        assert_eq!(base["A"]["X"], "overlay-x");
        assert_eq!(base["A"]["Y"], "base-y");
        assert_eq!(base["B"], "base-b");
        assert_eq!(base["C"], "overlay-c");
    }

    #[test]
    fn deep_merge_replaces_mismatched_shapes() {
        let mut base = json!({"A": {"X": "base-x"}});
        let overlay = json!({"A": "flat"});
        deep_merge(&mut base, &overlay);
        assert_eq!(base["A"], "flat");
    }

    #[test]
    fn fallback_uses_first_en_prefixed_entry_from_fake_registry() {
        let registry = LocaleRegistry::from_entries(vec![
            ("de-DE".to_string(), json!({"LOCALE": "Deutsch"})),
            ("en-US".to_string(), json!({"LOCALE": "English", "ONLY": "here"})),
        ])
        .expect("registry should build");
        let resolved = resolve(&registry, Some("pt-BR"));
        assert_eq!(resolved["LOCALE"], "English");
        assert_eq!(resolved["ONLY"], "here");
    }
}
