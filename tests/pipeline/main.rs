//! Integration tests for Layer 2: Pipeline
//!
//! Tests for sentence classification:
//! - Tokenization
//! - Vocabulary and the bundled grammar
//! - Full pipeline runs against a scripted engine

mod bundled;
