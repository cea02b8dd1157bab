//! Preprocessor configuration.
//!
//! The defaults reproduce the canonical notation: `//` comments, `:` rule
//! delimiter, `#`/`^` semantic types and the Czech conjunction `a`.

use semgram_foundation::{SemtypeNotation, SymbolNaming};

/// Notation and naming settings for the grammar preprocessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreprocessorConfig {
    /// Lines starting with this marker are dropped.
    pub comment_marker: String,
    /// Separates a rule name from its right-hand side.
    pub rule_delimiter: char,
    /// Literal joining the last two items of a coordination.
    pub conjunction: String,
    /// Semantic-type spelling.
    pub notation: SemtypeNotation,
    /// Symbol naming conventions.
    pub naming: SymbolNaming,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            comment_marker: "//".to_string(),
            rule_delimiter: ':',
            conjunction: "a".to_string(),
            notation: SemtypeNotation::default(),
            naming: SymbolNaming::default(),
        }
    }
}

impl PreprocessorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment marker.
    #[must_use]
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    /// Sets the rule delimiter.
    #[must_use]
    pub fn with_rule_delimiter(mut self, delimiter: char) -> Self {
        self.rule_delimiter = delimiter;
        self
    }

    /// Sets the coordination conjunction literal.
    #[must_use]
    pub fn with_conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = conjunction.into();
        self
    }

    /// Sets the semantic-type notation.
    #[must_use]
    pub fn with_notation(mut self, notation: SemtypeNotation) -> Self {
        self.notation = notation;
        self
    }

    /// Sets the symbol naming conventions.
    #[must_use]
    pub fn with_naming(mut self, naming: SymbolNaming) -> Self {
        self.naming = naming;
        self
    }
}
