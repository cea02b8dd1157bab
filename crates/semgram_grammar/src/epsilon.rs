//! Empty markers and optional symbols for terminals.
//!
//! For a terminal `T` this produces
//!
//! ```text
//! empty_t:
//! eps_t: T | empty_t
//! ```
//!
//! so an absent slot shows up in the parse tree as a named `empty_t` node
//! instead of vanishing.

use semgram_foundation::SymbolNaming;
use tracing::debug;

use crate::rule::{GeneratedRule, RuleTable};

/// The generated pair for one terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionalPair {
    /// The terminal both rules refer to.
    pub terminal: String,
    /// `empty_<t>:`
    pub empty: GeneratedRule,
    /// `eps_<t>: T | empty_<t>`
    pub optional: GeneratedRule,
}

impl OptionalPair {
    /// Both rules, empty marker first.
    pub fn rules(&self) -> impl Iterator<Item = &GeneratedRule> {
        [&self.empty, &self.optional].into_iter()
    }
}

/// Generates optional pairs in terminal declaration order.
#[must_use]
pub fn optional_pairs(table: &RuleTable, naming: &SymbolNaming) -> Vec<OptionalPair> {
    let pairs: Vec<OptionalPair> = table
        .rules()
        .filter(|rule| rule.kind.is_terminal())
        .map(|rule| {
            let empty = naming.empty_marker(&rule.name);
            let optional = GeneratedRule::new(
                naming.optional_symbol(&rule.name),
                format!("{} | {empty}", rule.name),
            );
            OptionalPair {
                terminal: rule.name.clone(),
                empty: GeneratedRule::empty(empty),
                optional,
            }
        })
        .collect();

    debug!(pairs = pairs.len(), "generated optional pairs");
    pairs
}

/// Finds the empty marker generated for `terminal`.
#[must_use]
pub fn empty_marker_for<'a>(pairs: &'a [OptionalPair], terminal: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|pair| pair.terminal == terminal)
        .map(|pair| pair.empty.name.as_str())
}
