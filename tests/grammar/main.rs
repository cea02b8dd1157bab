//! Integration tests for Layer 1: Grammar
//!
//! Tests for the grammar preprocessor:
//! - Rule merging and directives
//! - Terminal synthesis from semantic types
//! - Optional pairs, coordinations, preposition phrases
//! - Determinism and structural properties

mod properties;
mod scenarios;
