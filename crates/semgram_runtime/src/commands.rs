//! Subcommand implementations shared by the binary and the REPL.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use semgram_foundation::{Error, Result};
use semgram_grammar::CompiledGrammar;
use semgram_pipeline::{
    DEFAULT_GRAMMAR, DEFAULT_VOCABULARY, MorphAnalyzer, Pipeline, SentencePlan, SkipReason,
    Vocabulary, WordLemmaTagDictionary,
};
use tracing::info;

/// Reads a vocabulary file, or the bundled one when no path is given.
///
/// # Errors
///
/// Returns I/O and vocabulary format errors.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    match path {
        Some(path) => read_source(path, Vocabulary::parse),
        None => Vocabulary::parse(DEFAULT_VOCABULARY),
    }
}

/// Reads a dictionary file, or starts from an empty dictionary.
///
/// # Errors
///
/// Returns I/O and dictionary format errors.
pub fn load_dictionary(path: Option<&Path>) -> Result<WordLemmaTagDictionary> {
    match path {
        Some(path) => read_source(path, WordLemmaTagDictionary::parse),
        None => Ok(WordLemmaTagDictionary::new()),
    }
}

/// Compiles a grammar file, or the bundled grammar, against the pipeline's
/// vocabulary.
///
/// # Errors
///
/// Returns I/O and preprocessing errors.
pub fn compile<A: MorphAnalyzer>(
    pipeline: &Pipeline<A>,
    grammar: Option<&Path>,
) -> Result<CompiledGrammar> {
    let compiled = match grammar {
        Some(path) => read_source(path, |source| pipeline.compile_grammar(source))?,
        None => pipeline.compile_grammar(DEFAULT_GRAMMAR)?,
    };
    let stats = &compiled.stats;
    info!(
        declared = stats.declared_rules,
        terminals = stats.generated_terminals,
        optional = stats.optional_pairs,
        coordinations = stats.coordination_rules,
        phrases = stats.preposition_rules,
        "compiled grammar"
    );
    Ok(compiled)
}

/// Reads a file and hands its text to `parse`, naming the file in any error.
fn read_source<T>(path: &Path, parse: impl FnOnce(&str) -> Result<T>) -> Result<T> {
    let name = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| Error::io(&e).in_source(name.as_str()))?;
    parse(&text).map_err(|e| e.in_source(name))
}

/// Human-readable skip reason.
#[must_use]
pub fn describe_skip(reason: &SkipReason) -> String {
    match reason {
        SkipReason::Empty => "empty sentence".to_string(),
        SkipReason::UnknownWord(word) => format!("unknown word '{word}'"),
        SkipReason::UntaggedWord(word) => format!("word '{word}' has no morphological tags"),
        SkipReason::ContainsVerb(word) => format!("contains verb '{word}'"),
        SkipReason::Unresolvable(word) => format!("no semantic type for '{word}'"),
    }
}

/// Renders one planned sentence: a header line, then either the skip
/// reason or one engine input per line.
#[must_use]
pub fn format_plan(plan: &SentencePlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{:03}] {}", plan.index, plan.text);
    match &plan.candidates {
        Err(reason) => {
            let _ = writeln!(out, "  skipped: {}", describe_skip(reason));
        }
        Ok(candidates) => {
            for word in &candidates.words {
                let _ = writeln!(out, "  {}: {}", word.word, word.readings.join(" "));
            }
            for combination in &candidates.combinations {
                let _ = writeln!(out, "  > {}", combination.input());
            }
        }
    }
    out
}

/// Plans a document and renders every sentence.
///
/// # Errors
///
/// Returns planning errors.
pub fn candidates<A: MorphAnalyzer>(pipeline: &mut Pipeline<A>, text: &str) -> Result<String> {
    Ok(pipeline
        .candidates(text)?
        .iter()
        .map(format_plan)
        .collect::<Vec<_>>()
        .join(""))
}
