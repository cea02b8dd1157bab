//! Seam to the external Earley engine.

use crate::tree::ParseTree;

/// Result of parsing one combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every valid parse, in the engine's order.
    Success(Vec<ParseTree>),
    /// The engine rejected the input.
    Failure(String),
}

impl ParseOutcome {
    /// Returns true for a success with at least one tree.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(trees) if !trees.is_empty())
    }
}

/// A grammar engine loaded with a compiled grammar.
///
/// Input is the space-joined token sequence of one combination; the engine
/// treats single spaces as insignificant.
pub trait ParseEngine {
    /// Parses one combination and returns every valid tree.
    fn parse(&self, input: &str) -> ParseOutcome;
}

impl<F> ParseEngine for F
where
    F: Fn(&str) -> ParseOutcome,
{
    fn parse(&self, input: &str) -> ParseOutcome {
        self(input)
    }
}
