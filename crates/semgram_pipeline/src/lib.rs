//! Sentence classification pipeline for semgram.
//!
//! Turns free text into sequences of semantic-type tokens and hands them to
//! a grammar engine loaded with a grammar compiled by `semgram_grammar`.
//!
//! # Flow
//!
//! ```text
//! document ──► SentenceTokenizer ──► WordTokenizer ──► MorphAnalyzer
//!                                                         │ (+ overrides, blocklist)
//!                                                         ▼
//!   ParseEngine ◄── combinations ◄── normalize_reading ◄── Vocabulary
//!        │
//!        ▼
//!   ParseTree ──► align_words, TreeExporter
//! ```
//!
//! The morphological analyzer and the grammar engine are external; they are
//! reached through the [`MorphAnalyzer`] and [`ParseEngine`] traits.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combination;
pub mod config;
pub mod engine;
pub mod export;
pub mod morphology;
pub mod pipeline;
pub mod stdlib;
pub mod tokenizer;
pub mod tree;
pub mod vocabulary;

pub use combination::{Combination, WordReadings, combinations, normalize_reading};
pub use config::PipelineConfig;
pub use engine::{ParseEngine, ParseOutcome};
pub use export::{ExportedFiles, TreeExporter};
pub use morphology::{
    Analysis, Blocklist, LocalOverrides, MorphAnalyzer, MorphTags, PartOfSpeech,
    WordLemmaTagDictionary,
};
pub use pipeline::{
    Pipeline, SentenceCandidates, SentenceOutcome, SentencePlan, SentenceReport, SkipReason,
    SuccessfulParse,
};
pub use stdlib::{DEFAULT_GRAMMAR, DEFAULT_VOCABULARY};
pub use tokenizer::{SentenceTokenizer, WordTokenizer, strip_emoticons};
pub use tree::{ParseTree, align_words};
pub use vocabulary::Vocabulary;
