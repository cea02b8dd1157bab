//! End-to-end preprocessor scenarios.

use semgram_foundation::{ErrorKind, SemtypeNotation, SemtypeRegistry, SymbolNaming};
use semgram_grammar::{GrammarAssembler, PreprocessorConfig, preprocess};

const TRAILER: [&str; 2] = ["empty:", "%ignore \" \""];

fn lines(source: &str, keys: &[&str]) -> Vec<String> {
    let registry: SemtypeRegistry = keys.iter().copied().collect();
    preprocess(source, &registry)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

fn expected(body: &[&str]) -> Vec<String> {
    body.iter().chain(TRAILER.iter()).map(|s| s.to_string()).collect()
}

// =============================================================================
// Merging
// =============================================================================

#[test]
fn rules_keep_first_appearance_order() {
    assert_eq!(
        lines("sentence: foo\nfoo: bar", &[]),
        expected(&["sentence:(foo)", "foo:(bar)"])
    );
}

#[test]
fn repeated_rule_is_merged() {
    assert_eq!(
        lines("sentence: foo\nsentence: bar", &[]),
        expected(&["sentence:(foo)|(bar)"])
    );
}

#[test]
fn merge_keeps_position_of_first_occurrence() {
    assert_eq!(
        lines("a: x\nb: y\na: z", &[]),
        expected(&["a:(x)|(z)", "b:(y)"])
    );
}

#[test]
fn comments_blank_lines_and_directives() {
    let source = "// heading\n\n%import common.WS\nsentence: foo\n   \n// tail";
    assert_eq!(
        lines(source, &[]),
        expected(&["%import common.WS", "sentence:(foo)"])
    );
}

#[test]
fn only_first_delimiter_splits() {
    assert_eq!(
        lines("sentence: \"a:b\" foo", &[]),
        expected(&["sentence:(\"a:b\" foo)"])
    );
}

// =============================================================================
// Terminals and optional pairs
// =============================================================================

#[test]
fn declared_terminal_gets_optional_pair() {
    assert_eq!(
        lines("TERMINAL: \"foo\"", &[]),
        expected(&[
            "TERMINAL:(\"foo\")",
            "empty_terminal:",
            "eps_terminal: TERMINAL | empty_terminal",
        ])
    );
}

#[test]
fn naive_semantic_type_becomes_terminal() {
    assert_eq!(
        lines("", &["#foo"]),
        expected(&["FOO: \"#foo\"", "empty_foo:", "eps_foo: FOO | empty_foo"])
    );
}

#[test]
fn combined_semantic_type_folds_into_components() {
    assert_eq!(
        lines("", &["#floskule^#measure"]),
        expected(&[
            "FLOSKULE: \"#floskule\" | \"#floskule^#measure\"",
            "MEASURE: \"#floskule^#measure\" | \"#measure\"",
            "empty_floskule:",
            "eps_floskule: FLOSKULE | empty_floskule",
            "empty_measure:",
            "eps_measure: MEASURE | empty_measure",
        ])
    );
}

#[test]
fn generated_literals_merge_into_declared_terminal() {
    let out = lines("MASO: \"#hovezi\"", &["#maso"]);
    assert_eq!(out[0], "MASO:(\"#hovezi\")|(\"#maso\")");
    assert_eq!(out.iter().filter(|l| l.starts_with("MASO")).count(), 1);
}

// =============================================================================
// Coordination and preposition phrases
// =============================================================================

#[test]
fn coordination_rule_generated() {
    assert_eq!(
        lines("t_attr_single: t_quality* ATTR", &[]),
        expected(&[
            "t_attr_single:(t_quality* ATTR)",
            "t_attr: (t_attr_single) | ((t_attr_single \",\")+ t_attr_single) | \
             ((t_attr_single \",\")* t_attr_single \"a\" t_attr_single)",
        ])
    );
}

#[test]
fn coordination_uses_configured_conjunction() {
    let config = PreprocessorConfig::default().with_conjunction("and");
    let text = GrammarAssembler::new(config)
        .compile("x_single: X", &SemtypeRegistry::new())
        .unwrap()
        .text;
    assert!(text.contains("x_single \"and\" x_single"));
}

#[test]
fn preposition_phrase_pair() {
    let out = lines("prep_s_priloha: PREP_S PRILOHA", &["#prep_s", "#priloha"]);
    let tail: Vec<&str> = out.iter().rev().skip(2).take(2).map(String::as_str).collect();
    assert_eq!(
        tail,
        vec![
            "eps_prep_s_priloha: empty_prep_s_priloha | prep_s_priloha",
            "empty_prep_s_priloha: empty_prep_s empty_priloha",
        ]
    );
}

#[test]
fn coordinated_preposition_phrase_gets_both_forms() {
    let out = lines("prep_s_single: PREP_S SINGLE", &["#prep_s", "#single"]);
    assert!(out.iter().any(|l| l.starts_with("prep_s: (prep_s_single) | ")));
    assert!(out.contains(&"empty_prep_s_single: empty_prep_s empty_single".to_string()));
    assert!(out.contains(&"eps_prep_s_single: empty_prep_s_single | prep_s_single".to_string()));
}

#[test]
fn stages_appear_in_fixed_order() {
    let source = "sentence: t_jidlo\nt_jidlo_single: MASO eps_prep_s_priloha\nprep_s_priloha: PREP_S PRILOHA";
    let out = lines(source, &["#maso", "#prep_s", "#priloha"]);
    let position = |prefix: &str| out.iter().position(|l| l.starts_with(prefix)).unwrap();

    assert!(position("sentence:") < position("MASO:"));
    assert!(position("PRILOHA:") < position("empty_maso:"));
    assert!(position("eps_priloha:") < position("t_jidlo:"));
    assert!(position("t_jidlo:") < position("empty_prep_s_priloha:"));
    assert_eq!(out[out.len() - 2], "empty:");
}

// =============================================================================
// Configured notation
// =============================================================================

fn compile_with(config: PreprocessorConfig, source: &str, keys: &[&str]) -> Vec<String> {
    let registry: SemtypeRegistry = keys.iter().copied().collect();
    GrammarAssembler::new(config)
        .compile(source, &registry)
        .unwrap()
        .text
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn configured_delimiter_and_comment_marker() {
    let config = PreprocessorConfig::new()
        .with_rule_delimiter('=')
        .with_comment_marker("#");
    let out = compile_with(config, "# menu\nsentence = A B\nA = \"a\"\nsentence = B", &[]);
    assert_eq!(out[0], "sentence:(A B)|(B)");
    assert_eq!(out[1], "A:(\"a\")");
    assert!(!out.iter().any(|l| l.contains("menu")));
}

#[test]
fn configured_semtype_notation() {
    let config = PreprocessorConfig::new().with_notation(SemtypeNotation {
        marker: '@',
        combinator: '+',
    });
    let out = compile_with(config, "", &["@maso+@priloha"]);
    let maso = out.iter().find(|l| l.starts_with("MASO: ")).unwrap();
    assert!(maso.contains("\"@maso+@priloha\""));
    assert!(out.iter().any(|l| l.starts_with("PRILOHA: ")));
}

#[test]
fn configured_symbol_naming() {
    let naming = SymbolNaming {
        coordination_suffix: "_one".to_string(),
        empty_prefix: "none".to_string(),
        optional_prefix: "opt".to_string(),
        ..SymbolNaming::default()
    };
    let config = PreprocessorConfig::new().with_naming(naming);
    let out = compile_with(config, "x_one: X\nX: \"x\"", &[]);
    assert!(out.iter().any(|l| l.starts_with("x: (x_one) | ")));
    assert!(out.contains(&"none_x:".to_string()));
    assert!(out.contains(&"opt_x: X | none_x".to_string()));
    assert!(!out.iter().any(|l| l.starts_with("eps_")));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn empty_rule_name_fails() {
    let err = preprocess("sentence: a\n : b", &SemtypeRegistry::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyRuleName { line: 2 }));
    assert_eq!(err.context.and_then(|c| c.line), Some(2));
}

#[test]
fn invalid_semantic_type_fails() {
    let registry: SemtypeRegistry = ["maso"].into_iter().collect();
    let err = preprocess("", &registry).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidSemanticType { .. }));
}

#[test]
fn tag_starting_with_digit_fails() {
    let registry: SemtypeRegistry = ["#2x"].into_iter().collect();
    let err = preprocess("", &registry).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidSemanticType { ref key, .. } if key == "#2x"));
}

#[test]
fn preposition_without_terminals_fails() {
    let err = preprocess("prep_s_priloha: PREP_S PRILOHA", &SemtypeRegistry::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingEmptyMarker { .. }));
}

#[test]
fn generated_name_clash_fails() {
    let err = preprocess("eps_foo: x", &["#foo"].into_iter().collect()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::GeneratedNameConflict { ref name } if name == "eps_foo"));
}

#[test]
fn caller_registry_is_not_mutated() {
    let registry: SemtypeRegistry = ["#a^#b"].into_iter().collect();
    let compiled = GrammarAssembler::default().compile("", &registry).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(compiled.registry.len(), 3);
    assert_eq!(compiled.stats.generated_terminals, 2);
    assert_eq!(compiled.stats.optional_pairs, 2);
}
