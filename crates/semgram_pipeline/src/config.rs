//! Pipeline configuration.

use semgram_foundation::SemtypeNotation;

/// Settings for turning sentences into semantic-type combinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Tokens passed to the grammar literally instead of as semantic types.
    pub allowed_terminals: Vec<String>,
    /// Upper bound on combinations tried per sentence.
    pub max_combinations: usize,
    /// Filler-word type; never merged and removed before parsing.
    pub floskule: String,
    /// Measure type.
    pub measure: String,
    /// Type replacing `measure` for second-degree forms.
    pub degree_measure: String,
    /// Prefix of readings for words outside the vocabulary.
    pub unknown_prefix: String,
    /// Semantic-type spelling.
    pub notation: SemtypeNotation,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            allowed_terminals: vec![",".to_string()],
            max_combinations: 4096,
            floskule: "#floskule".to_string(),
            measure: "#measure".to_string(),
            degree_measure: "#d2measure".to_string(),
            unknown_prefix: "#unknown_".to_string(),
            notation: SemtypeNotation::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the combination limit.
    #[must_use]
    pub fn with_max_combinations(mut self, limit: usize) -> Self {
        self.max_combinations = limit;
        self
    }

    /// Adds a literal terminal.
    #[must_use]
    pub fn with_allowed_terminal(mut self, terminal: impl Into<String>) -> Self {
        self.allowed_terminals.push(terminal.into());
        self
    }
}
