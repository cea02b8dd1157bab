//! The bundled grammar and vocabulary.

use semgram_grammar::GrammarAssembler;
use semgram_pipeline::{DEFAULT_GRAMMAR, DEFAULT_VOCABULARY, MorphTags, PipelineConfig, Vocabulary};

fn vocabulary() -> Vocabulary {
    Vocabulary::parse(DEFAULT_VOCABULARY).unwrap()
}

#[test]
fn bundled_vocabulary_parses() {
    let vocab = vocabulary();
    assert!(vocab.len() > 20);
    assert!(vocab.types_of("knedlík").unwrap().contains("#priloha"));
}

#[test]
fn bundled_grammar_compiles() {
    let registry = vocabulary().registry(&PipelineConfig::default());
    let compiled = GrammarAssembler::default()
        .compile(DEFAULT_GRAMMAR, &registry)
        .unwrap();

    let text = &compiled.text;
    assert!(text.starts_with("sentence:(t_zelenina)|(t_masoprodukt)|(t_priloha)|(t_polevka)"));
    assert!(!text.contains("t_testoviny)|"));
    for terminal in ["PRILOHA", "MASOPRODUKT", "PREP_S", "COORD_A", "D2MEASURE"] {
        let t = terminal.to_lowercase();
        assert!(text.contains(&format!("eps_{t}: {terminal} | empty_{t}")), "{terminal}");
    }
    assert_eq!(compiled.stats.coordination_rules, 0);
    assert_eq!(compiled.stats.preposition_rules, 0);
}

#[test]
fn bundled_grammar_is_reproducible() {
    let registry = vocabulary().registry(&PipelineConfig::default());
    let first = GrammarAssembler::default().compile(DEFAULT_GRAMMAR, &registry).unwrap();
    let second = GrammarAssembler::default().compile(DEFAULT_GRAMMAR, &registry).unwrap();
    assert_eq!(first.text, second.text);
}

#[test]
fn every_emitted_label_is_a_grammar_literal() {
    let mut vocab = vocabulary();
    vocab.insert("slovo", "#bar");
    vocab.insert("slovo", "#foo");
    vocab.insert("slovo", "#floskule");
    let config = PipelineConfig::default();
    let compiled = GrammarAssembler::default()
        .compile(DEFAULT_GRAMMAR, &vocab.registry(&config))
        .unwrap();

    let words: Vec<String> = vocab.words().map(str::to_string).collect();
    for word in &words {
        for tags in [MorphTags::default(), MorphTags::parse("k2eAd2")] {
            for label in vocab.semtypes_for_lemma(word, &tags, &config) {
                let literal = format!("\"{label}\"");
                assert!(compiled.text.contains(&literal), "{word}: {label}");
            }
        }
    }
}
