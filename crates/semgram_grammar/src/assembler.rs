//! Grammar assembly.
//!
//! Runs every stage in its fixed order and joins the results:
//!
//! 1. merged directives and rules, generated terminals included
//! 2. empty markers and optional symbols for every terminal
//! 3. coordination rules
//! 4. preposition phrase rules
//! 5. the generic `empty:` rule and `%ignore " "`

use std::collections::HashSet;

use semgram_foundation::{Error, Result, SemtypeRegistry};
use tracing::debug;

use crate::config::PreprocessorConfig;
use crate::coordination::coordination_rules;
use crate::epsilon::optional_pairs;
use crate::preposition::preposition_rules;
use crate::rule::{GeneratedRule, RuleTable};
use crate::terminals::SemanticTypeExpander;

/// Name of the generic empty rule.
pub const NOTHING_RULE: &str = "empty";

/// Directive making a single space insignificant between tokens.
pub const IGNORE_SPACE_DIRECTIVE: &str = "%ignore \" \"";

/// Counts of what each stage produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrammarStats {
    /// Rule entries written by the author, after merging.
    pub declared_rules: usize,
    /// Terminals synthesized from the registry.
    pub generated_terminals: usize,
    /// Empty marker / optional symbol pairs.
    pub optional_pairs: usize,
    /// Coordination rules.
    pub coordination_rules: usize,
    /// Preposition phrase rules (two per phrase).
    pub preposition_rules: usize,
}

/// The output of one preprocessor run.
#[derive(Clone, Debug)]
pub struct CompiledGrammar {
    /// Final grammar text.
    pub text: String,
    /// The registry after closure.
    pub registry: SemtypeRegistry,
    /// Stage counts.
    pub stats: GrammarStats,
}

/// Compiles the compact notation into explicit grammar text.
#[derive(Clone, Debug, Default)]
pub struct GrammarAssembler {
    config: PreprocessorConfig,
}

impl GrammarAssembler {
    /// Creates an assembler with the given configuration.
    #[must_use]
    pub fn new(config: PreprocessorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    /// Runs all stages. Nothing is returned unless every stage succeeds.
    ///
    /// # Errors
    ///
    /// Propagates the first error of any stage, and returns
    /// `GeneratedNameConflict` if a generated rule reuses a taken name.
    pub fn compile(&self, source: &str, registry: &SemtypeRegistry) -> Result<CompiledGrammar> {
        let naming = &self.config.naming;

        let mut table = RuleTable::parse(source, &self.config)?;
        let declared_rules = table.rule_count();

        let closed = SemanticTypeExpander::new(&self.config).expand(&mut table, registry)?;
        let generated_terminals = table.rule_count() - declared_rules;

        let pairs = optional_pairs(&table, naming);
        let coordinations = coordination_rules(&table, naming, &self.config.conjunction);
        let phrases = preposition_rules(&table, &pairs, naming)?;

        let generated: Vec<&GeneratedRule> = pairs
            .iter()
            .flat_map(|pair| pair.rules())
            .chain(&coordinations)
            .chain(&phrases)
            .collect();
        check_names(&table, &generated)?;

        let mut lines: Vec<String> = table.lines().iter().map(ToString::to_string).collect();
        lines.extend(generated.iter().map(ToString::to_string));
        lines.push(GeneratedRule::empty(NOTHING_RULE).to_string());
        lines.push(IGNORE_SPACE_DIRECTIVE.to_string());

        let stats = GrammarStats {
            declared_rules,
            generated_terminals,
            optional_pairs: pairs.len(),
            coordination_rules: coordinations.len(),
            preposition_rules: phrases.len(),
        };
        debug!(?stats, "assembled grammar");

        Ok(CompiledGrammar {
            text: lines.join("\n"),
            registry: closed,
            stats,
        })
    }
}

/// Every generated name, and the trailer's empty rule, must be unused.
fn check_names(table: &RuleTable, generated: &[&GeneratedRule]) -> Result<()> {
    let mut taken: HashSet<&str> = table.names().collect();
    let names = generated
        .iter()
        .map(|rule| rule.name.as_str())
        .chain(std::iter::once(NOTHING_RULE));
    for name in names {
        if !taken.insert(name) {
            return Err(Error::generated_name_conflict(name));
        }
    }
    Ok(())
}

/// Compiles `source` with the default configuration and returns the text.
///
/// # Errors
///
/// See [`GrammarAssembler::compile`].
pub fn preprocess(source: &str, registry: &SemtypeRegistry) -> Result<String> {
    GrammarAssembler::default()
        .compile(source, registry)
        .map(|grammar| grammar.text)
}
