//! Semantic-type notation and registry tests.

use proptest::prelude::*;
use semgram_foundation::{ErrorKind, SemtypeNotation, SemtypeOrigin, SemtypeRegistry};

// =============================================================================
// Notation
// =============================================================================

#[test]
fn components_of_combined_key() {
    let notation = SemtypeNotation::default();
    assert_eq!(
        notation.components("#floskule^#measure").unwrap(),
        vec!["#floskule", "#measure"]
    );
    assert!(notation.is_combined("#a^#b"));
    assert!(!notation.is_combined("#a"));
}

#[test]
fn component_match_is_exact() {
    let notation = SemtypeNotation::default();
    assert!(notation.has_component("#maso^#priloha", "#maso"));
    assert!(!notation.has_component("#masoprodukt", "#maso"));
}

#[test]
fn malformed_keys_rejected() {
    let notation = SemtypeNotation::default();
    for key in ["foo", "#", "#a^b", "#a b", "#a^^#b", "#2x", "#_x", "#a^#9"] {
        let err = notation.components(key).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidSemanticType { .. }), "{key}");
    }
}

#[test]
fn terminal_names_upper_case_the_tag() {
    let notation = SemtypeNotation::default();
    assert_eq!(notation.terminal_name("#prep_s").unwrap(), "PREP_S");
}

// =============================================================================
// Registry closure
// =============================================================================

#[test]
fn closure_adds_components_without_touching_input() {
    let registry: SemtypeRegistry = ["#floskule^#measure"].into_iter().collect();
    let closed = registry.closure(&SemtypeNotation::default()).unwrap();

    assert_eq!(registry.len(), 1);
    let keys: Vec<_> = closed.keys().collect();
    assert_eq!(keys, vec!["#floskule^#measure", "#floskule", "#measure"]);
    assert_eq!(closed.origin("#measure"), Some(SemtypeOrigin::Derived));
    assert_eq!(closed.origin("#floskule^#measure"), Some(SemtypeOrigin::Declared));
}

#[test]
fn keys_containing_sorted() {
    let registry: SemtypeRegistry = ["#measure", "#floskule^#measure", "#big^#measure"]
        .into_iter()
        .collect();
    assert_eq!(
        registry.keys_containing(&SemtypeNotation::default(), "#measure"),
        vec!["#big^#measure", "#floskule^#measure", "#measure"]
    );
}

fn key() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,4}", 1..4).prop_map(|tags| {
        tags.iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join("^")
    })
}

proptest! {
    #[test]
    fn closure_is_idempotent(keys in prop::collection::vec(key(), 0..12)) {
        let notation = SemtypeNotation::default();
        let registry: SemtypeRegistry = keys.into_iter().collect();
        let once = registry.closure(&notation).unwrap();
        let twice = once.closure(&notation).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn closure_covers_every_component(keys in prop::collection::vec(key(), 0..12)) {
        let notation = SemtypeNotation::default();
        let registry: SemtypeRegistry = keys.iter().cloned().collect();
        let closed = registry.closure(&notation).unwrap();
        for key in &keys {
            for component in notation.components(key).unwrap() {
                prop_assert!(closed.contains(component));
            }
        }
    }
}
