//! semgram - semantic-type sentence classification
//!
//! This crate re-exports all layers of the semgram system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: semgram_runtime     CLI, REPL, logging setup
//! Layer 2: semgram_pipeline    Tokenizer, morphology, vocabulary, parse trees
//! Layer 1: semgram_grammar     Grammar notation preprocessor
//! Layer 0: semgram_foundation  Errors, symbol naming, semantic types
//! ```

pub use semgram_foundation as foundation;
pub use semgram_grammar as grammar;
pub use semgram_pipeline as pipeline;
pub use semgram_runtime as runtime;
