//! Terminal synthesis from the semantic-type registry.
//!
//! Every naive semantic type becomes a terminal whose literals are all the
//! registered types containing it. A word tagged `#floskule^#measure` is
//! therefore accepted by both `FLOSKULE` and `MEASURE`, and the grammar
//! decides which reading applies.

use semgram_foundation::{Result, SemtypeRegistry, SymbolKind};
use tracing::debug;

use crate::config::PreprocessorConfig;
use crate::rule::{RuleOrigin, RuleTable};

/// Closes a registry and appends its terminals to a rule table.
pub struct SemanticTypeExpander<'a> {
    config: &'a PreprocessorConfig,
}

impl<'a> SemanticTypeExpander<'a> {
    /// Creates an expander using the given notation.
    #[must_use]
    pub fn new(config: &'a PreprocessorConfig) -> Self {
        Self { config }
    }

    /// Appends one terminal per naive type to `table`.
    ///
    /// Returns the closed registry the terminals were built from. A
    /// terminal whose name the author already declared receives the
    /// literals as one more alternative instead of a second entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSemanticType` for malformed keys and
    /// `GeneratedNameConflict` when two naive types map to one terminal.
    pub fn expand(
        &self,
        table: &mut RuleTable,
        registry: &SemtypeRegistry,
    ) -> Result<SemtypeRegistry> {
        let notation = &self.config.notation;
        let closed = registry.closure(notation)?;

        let mut generated = 0usize;
        let mut merged = 0usize;
        for naive in closed.naive_keys(notation) {
            let terminal = notation.terminal_name(naive)?;
            let literals: Vec<String> = closed
                .keys_containing(notation, naive)
                .into_iter()
                .map(|key| format!("\"{key}\""))
                .collect();

            match table.get(&terminal).map(|rule| rule.origin) {
                Some(RuleOrigin::Declared) => {
                    table.add_alternative(
                        &terminal,
                        literals.join(" | "),
                        SymbolKind::Terminal,
                        RuleOrigin::Declared,
                    );
                    merged += 1;
                }
                _ => {
                    table.push_generated(&terminal, literals, SymbolKind::Terminal)?;
                    generated += 1;
                }
            }
        }

        debug!(
            declared = registry.len(),
            closed = closed.len(),
            generated,
            merged,
            "synthesized semantic-type terminals"
        );
        Ok(closed)
    }
}
