//! Property tests for the preprocessor.

use proptest::prelude::*;
use semgram_foundation::{SemtypeNotation, SemtypeRegistry};
use semgram_grammar::preprocess;

fn tag() -> impl Strategy<Value = String> {
    "[a-z]{1,5}"
}

fn key() -> impl Strategy<Value = String> {
    prop::collection::vec(tag(), 1..3).prop_map(|tags| {
        SemtypeNotation::default().combine(tags.iter().map(|t| format!("#{t}")))
    })
}

fn registry() -> impl Strategy<Value = SemtypeRegistry> {
    prop::collection::vec(key(), 0..8).prop_map(|keys| keys.into_iter().collect())
}

/// Rule lines over a small alphabet of lower-case names, so names repeat.
fn rule_lines() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("r[a-c]", "[a-z]{1,4}"), 1..12)
}

fn source(rules: &[(String, String)]) -> String {
    rules
        .iter()
        .map(|(name, body)| format!("{name}: {body}"))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn output_is_deterministic(rules in rule_lines(), registry in registry()) {
        let text = source(&rules);
        prop_assert_eq!(preprocess(&text, &registry).unwrap(), preprocess(&text, &registry).unwrap());
    }

    #[test]
    fn merge_preserves_declaration_order(rules in rule_lines()) {
        let out = preprocess(&source(&rules), &SemtypeRegistry::new()).unwrap();
        let merged: Vec<&str> = out.lines().take_while(|l| *l != "empty:").collect();

        let mut names: Vec<&str> = Vec::new();
        for (name, _) in &rules {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        prop_assert_eq!(merged.len(), names.len());

        for (line, name) in merged.iter().zip(&names) {
            let bodies: Vec<String> = rules
                .iter()
                .filter(|(n, _)| n == name)
                .map(|(_, body)| format!("({body})"))
                .collect();
            prop_assert_eq!(*line, format!("{name}:{}", bodies.join("|")));
        }
    }

    #[test]
    fn every_key_reaches_each_component_terminal(registry in registry()) {
        let notation = SemtypeNotation::default();
        let out = preprocess("", &registry).unwrap();
        for key in registry.keys() {
            for component in notation.components(key).unwrap() {
                let terminal = notation.terminal_name(component).unwrap();
                let line = out
                    .lines()
                    .find(|l| l.starts_with(&format!("{terminal}: ")));
                prop_assert!(line.is_some(), "no terminal {}", terminal);
                let literal = format!("\"{key}\"");
                let prefix = format!("{terminal}: ");
                prop_assert!(
                    line.unwrap().split(" | ").any(|alt| alt.trim_start_matches(prefix.as_str()) == literal),
                    "{} does not accept {}",
                    terminal,
                    literal
                );
            }
        }
    }

    #[test]
    fn every_terminal_has_one_optional_pair(registry in registry()) {
        let out = preprocess("", &registry).unwrap();
        let terminals: Vec<&str> = out
            .lines()
            .filter_map(|l| l.split_once(": ").map(|(name, _)| name))
            .filter(|name| !name.chars().any(char::is_lowercase))
            .collect();
        for terminal in terminals {
            let t = terminal.to_lowercase();
            let empty = format!("empty_{t}:");
            let optional = format!("eps_{t}: {terminal} | empty_{t}");
            prop_assert_eq!(out.lines().filter(|l| *l == empty).count(), 1);
            prop_assert_eq!(out.lines().filter(|l| *l == optional).count(), 1);
        }
    }

    #[test]
    fn coordination_has_three_alternatives(stem in "t[a-z]{0,5}") {
        let base = format!("{stem}_single");
        let out = preprocess(&format!("{base}: X"), &SemtypeRegistry::new()).unwrap();
        let prefix = format!("{stem}: ");
        let line = out.lines().find(|l| l.starts_with(&prefix)).unwrap();
        let alternatives: Vec<&str> = line[prefix.len()..].split(" | ").collect();
        prop_assert_eq!(alternatives.len(), 3);
        for alternative in alternatives {
            prop_assert!(alternative.contains(&base));
        }
    }
}
