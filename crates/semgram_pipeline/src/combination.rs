//! Enumeration of semantic-type readings of a sentence.
//!
//! Each word may have several readings; every combination of one reading
//! per word is a separate input for the grammar engine.

use itertools::Itertools;
use semgram_foundation::{Error, ErrorKind, Result};
use tracing::debug;

use crate::config::PipelineConfig;

/// The candidate readings of one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordReadings {
    /// The word as written.
    pub word: String,
    /// Distinct readings, sorted.
    pub readings: Vec<String>,
}

impl WordReadings {
    /// Creates readings for a word, sorting and removing duplicates.
    #[must_use]
    pub fn new(word: impl Into<String>, readings: impl IntoIterator<Item = String>) -> Self {
        Self {
            word: word.into(),
            readings: readings.into_iter().sorted().dedup().collect(),
        }
    }
}

/// One reading per word, in sentence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combination {
    /// `(word, reading)` pairs.
    pub readings: Vec<(String, String)>,
}

impl Combination {
    /// The readings alone.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.readings.iter().map(|(_, reading)| reading.as_str())
    }

    /// Engine input: readings joined by single spaces.
    #[must_use]
    pub fn input(&self) -> String {
        self.tokens().join(" ")
    }
}

/// Maps a raw reading to a grammar token.
///
/// Semantic types and allowed literal terminals pass through; anything
/// else becomes an unknown reading.
#[must_use]
pub fn normalize_reading(reading: &str, config: &PipelineConfig) -> String {
    if reading.starts_with(config.notation.marker)
        || config.allowed_terminals.iter().any(|t| t == reading)
    {
        reading.to_string()
    } else {
        format!("{}{reading}", config.unknown_prefix)
    }
}

/// Every combination of readings, filler readings removed.
///
/// Combinations left empty by the removal are dropped.
///
/// # Errors
///
/// Returns `TooManyCombinations` when the product of reading counts exceeds
/// the configured limit.
pub fn combinations(words: &[WordReadings], config: &PipelineConfig) -> Result<Vec<Combination>> {
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let count = words
        .iter()
        .try_fold(1usize, |acc, w| acc.checked_mul(w.readings.len()))
        .unwrap_or(usize::MAX);
    if count > config.max_combinations {
        return Err(Error::new(ErrorKind::TooManyCombinations {
            count,
            limit: config.max_combinations,
        }));
    }

    let result: Vec<Combination> = words
        .iter()
        .map(|w| w.readings.iter().map(move |reading| (w.word.clone(), reading.clone())))
        .multi_cartesian_product()
        .map(|readings| Combination {
            readings: readings
                .into_iter()
                .filter(|(_, reading)| *reading != config.floskule)
                .collect(),
        })
        .filter(|combination| !combination.readings.is_empty())
        .collect();

    debug!(count, kept = result.len(), "enumerated combinations");
    Ok(result)
}
