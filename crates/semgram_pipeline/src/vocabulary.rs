//! Domain vocabulary: which semantic types a word can take.
//!
//! Records are `type:word`, one per line. A word listed under several types
//! is ambiguous and gets a combined label such as `#maso^#priloha`.

use std::collections::{BTreeMap, BTreeSet};

use semgram_foundation::{Error, Result, SemtypeRegistry};

use crate::config::PipelineConfig;
use crate::morphology::MorphTags;

/// Word to semantic types mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeMap<String, BTreeSet<String>>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `type:word` records. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyFormat` for a record without exactly one `:` or
    /// with an empty field.
    pub fn parse(text: &str) -> Result<Self> {
        let mut vocabulary = Self::new();
        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once(':') {
                Some((semtype, word))
                    if !semtype.is_empty() && !word.is_empty() && !word.contains(':') =>
                {
                    vocabulary.insert(word, semtype);
                }
                _ => {
                    return Err(Error::vocabulary_format(number + 1, line));
                }
            }
        }
        Ok(vocabulary)
    }

    /// Adds a semantic type to a word.
    pub fn insert(&mut self, word: &str, semtype: &str) {
        self.words
            .entry(word.to_string())
            .or_default()
            .insert(semtype.to_string());
    }

    /// Semantic types of a word, sorted.
    #[must_use]
    pub fn types_of(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.words.get(word)
    }

    /// Known words, sorted.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Semantic labels for a lemma under one analysis.
    ///
    /// - All types of the lemma are joined into one combined label
    /// - A second-degree form of a measure word is labelled with the degree
    ///   measure type alone
    /// - The filler type is kept out of the combined label and returned as
    ///   a second, separate label
    ///
    /// An unknown lemma has no labels.
    #[must_use]
    pub fn semtypes_for_lemma(
        &self,
        lemma: &str,
        tags: &MorphTags,
        config: &PipelineConfig,
    ) -> Vec<String> {
        let mut types: BTreeSet<&str> = self
            .types_of(lemma)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();

        if tags.degree == Some(2) && types.contains(config.measure.as_str()) {
            types = BTreeSet::from([config.degree_measure.as_str()]);
        }

        labels_of(types, config)
    }

    /// Registry of every label the vocabulary can produce.
    ///
    /// Holds the labels of each word, in word order, followed by the
    /// degree measure type.
    #[must_use]
    pub fn registry(&self, config: &PipelineConfig) -> SemtypeRegistry {
        let mut registry: SemtypeRegistry = self
            .words
            .values()
            .flat_map(|types| labels_of(types.iter().map(String::as_str).collect(), config))
            .collect();
        registry.insert(config.degree_measure.clone());
        registry
    }
}

/// Combined label of a type set, with the filler type split off on its own.
fn labels_of(mut types: BTreeSet<&str>, config: &PipelineConfig) -> Vec<String> {
    let has_floskule = types.remove(config.floskule.as_str());
    let mut labels = Vec::new();
    if !types.is_empty() {
        labels.push(config.notation.combine(types));
    }
    if has_floskule {
        labels.push(config.floskule.clone());
    }
    labels
}
