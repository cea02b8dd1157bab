//! Morphological analysis.
//!
//! The analyzer itself is an external collaborator behind [`MorphAnalyzer`].
//! This module provides the tag model, an in-memory word/lemma/tag
//! dictionary, the local override table for tokens analyzers do not know,
//! and the blocklist of analyses that are never right.

use std::collections::{HashMap, HashSet};

use semgram_foundation::{Error, Result};

/// Part of speech, from the `k` attribute of a positional tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// `k1`
    Substantive,
    /// `k2`
    Adjective,
    /// `k3`
    Pronoun,
    /// `k4`
    Numeral,
    /// `k5`
    Verb,
    /// `k6`
    Adverb,
    /// `k7`
    Preposition,
    /// `k8`
    Conjunction,
    /// `k9`
    Particle,
    /// `k0`
    Interjection,
    /// `kA`
    Abbreviation,
    /// `kI`
    Interpunction,
    /// `kP`
    Parentheses,
}

impl PartOfSpeech {
    /// Decodes the value of the `k` attribute.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            '1' => Self::Substantive,
            '2' => Self::Adjective,
            '3' => Self::Pronoun,
            '4' => Self::Numeral,
            '5' => Self::Verb,
            '6' => Self::Adverb,
            '7' => Self::Preposition,
            '8' => Self::Conjunction,
            '9' => Self::Particle,
            '0' => Self::Interjection,
            'A' => Self::Abbreviation,
            'I' => Self::Interpunction,
            'P' => Self::Parentheses,
            _ => return None,
        })
    }
}

/// Morphological tags of one analysis.
///
/// Positional tags are attribute/value character pairs: `k1gFnSc1` is
/// part of speech 1 (substantive), gender F, number S, case 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MorphTags {
    /// Part of speech, if tagged.
    pub pos: Option<PartOfSpeech>,
    /// Degree of comparison (`d` attribute).
    pub degree: Option<u8>,
    /// Every attribute/value pair in tag order.
    pub attributes: Vec<(char, char)>,
}

impl MorphTags {
    /// Parses a positional tag string. Unknown codes are kept as attributes
    /// only; an odd trailing character is ignored.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let chars: Vec<char> = tag.chars().collect();
        let mut tags = Self::default();
        for pair in chars.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            match key {
                'k' => tags.pos = PartOfSpeech::from_code(value),
                'd' => tags.degree = value.to_digit(10).and_then(|d| u8::try_from(d).ok()),
                _ => {}
            }
            tags.attributes.push((key, value));
        }
        tags
    }

    /// Tags carrying only a part of speech.
    #[must_use]
    pub fn with_pos(pos: PartOfSpeech) -> Self {
        Self {
            pos: Some(pos),
            ..Self::default()
        }
    }

    /// Returns true if the analysis carries no tags at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos.is_none() && self.degree.is_none() && self.attributes.is_empty()
    }

    /// Value of an attribute.
    #[must_use]
    pub fn get(&self, key: char) -> Option<char> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

/// One candidate analysis of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// Base form.
    pub lemma: String,
    /// Morphological tags.
    pub tags: MorphTags,
}

impl Analysis {
    /// Creates an analysis.
    #[must_use]
    pub fn new(lemma: impl Into<String>, tags: MorphTags) -> Self {
        Self {
            lemma: lemma.into(),
            tags,
        }
    }

    /// Returns true if the analysis is tagged as a verb.
    #[must_use]
    pub fn is_verb(&self) -> bool {
        self.tags.pos == Some(PartOfSpeech::Verb)
    }
}

/// Returns every candidate analysis of a word.
pub trait MorphAnalyzer {
    /// Analyzes one word; unknown words yield no analyses.
    fn analyze(&self, word: &str) -> Vec<Analysis>;
}

/// Analyzer backed by `word:lemma:tag` records.
#[derive(Clone, Debug, Default)]
pub struct WordLemmaTagDictionary {
    entries: HashMap<String, Vec<Analysis>>,
}

impl WordLemmaTagDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one record per line. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryFormat` for a line without word, lemma and tag
    /// fields.
    pub fn parse(text: &str) -> Result<Self> {
        let mut dictionary = Self::new();
        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.splitn(3, ':');
            let (Some(word), Some(lemma), Some(tag)) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(Error::dictionary_format(number + 1, line));
            };
            if word.is_empty() || lemma.is_empty() {
                return Err(Error::dictionary_format(number + 1, line));
            }
            dictionary.insert(word, Analysis::new(lemma, MorphTags::parse(tag)));
        }
        Ok(dictionary)
    }

    /// Adds an analysis for a word.
    pub fn insert(&mut self, word: &str, analysis: Analysis) {
        self.entries.entry(word.to_string()).or_default().push(analysis);
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no words are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphAnalyzer for WordLemmaTagDictionary {
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .cloned()
            .unwrap_or_default()
    }
}

/// Analyses for tokens the main analyzer does not know.
#[derive(Clone, Debug)]
pub struct LocalOverrides {
    known: HashMap<String, Vec<Analysis>>,
}

impl Default for LocalOverrides {
    fn default() -> Self {
        let mut overrides = Self::empty();
        for mark in [".", "...", "!", ","] {
            overrides.insert(mark, Analysis::new(mark, MorphTags::with_pos(PartOfSpeech::Interpunction)));
        }
        for paren in ["(", ")"] {
            overrides.insert(paren, Analysis::new(paren, MorphTags::with_pos(PartOfSpeech::Parentheses)));
        }
        overrides.insert("ok", Analysis::new("ok", MorphTags::with_pos(PartOfSpeech::Abbreviation)));
        overrides.insert(
            "apka",
            Analysis::new("aplikace", MorphTags::with_pos(PartOfSpeech::Substantive)),
        );
        overrides
    }
}

impl LocalOverrides {
    /// Creates a table with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            known: HashMap::new(),
        }
    }

    /// Adds an override analysis for a token.
    pub fn insert(&mut self, token: &str, analysis: Analysis) {
        self.known.entry(token.to_string()).or_default().push(analysis);
    }
}

impl MorphAnalyzer for LocalOverrides {
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        self.known.get(word).cloned().unwrap_or_default()
    }
}

/// Analyses known to be wrong for the domain.
#[derive(Clone, Debug)]
pub struct Blocklist {
    /// Lemmas that are never used.
    lemmas: HashSet<String>,
    /// Lemmas that are never used as substantives.
    substantive_lemmas: HashSet<String>,
}

impl Default for Blocklist {
    fn default() -> Self {
        Self {
            lemmas: HashSet::from(["dobřit".to_string()]),
            substantive_lemmas: HashSet::from(["malá".to_string()]),
        }
    }
}

impl Blocklist {
    /// Creates a blocklist that keeps everything.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lemmas: HashSet::new(),
            substantive_lemmas: HashSet::new(),
        }
    }

    /// Blocks a lemma entirely.
    #[must_use]
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemmas.insert(lemma.into());
        self
    }

    /// Blocks a lemma when tagged as a substantive.
    #[must_use]
    pub fn with_substantive_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.substantive_lemmas.insert(lemma.into());
        self
    }

    /// Returns true if the analysis should be dropped.
    #[must_use]
    pub fn blocks(&self, analysis: &Analysis) -> bool {
        self.lemmas.contains(&analysis.lemma)
            || (analysis.tags.pos == Some(PartOfSpeech::Substantive)
                && self.substantive_lemmas.contains(&analysis.lemma))
    }

    /// Drops blocked analyses.
    #[must_use]
    pub fn filter(&self, analyses: Vec<Analysis>) -> Vec<Analysis> {
        analyses.into_iter().filter(|a| !self.blocks(a)).collect()
    }
}
