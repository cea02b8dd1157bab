//! Coordination rules for `*_single` nonterminals.
//!
//! `X_single` yields a rule `X` accepting `A`, `A, B, C` and `A, B a C`.

use tracing::debug;

use semgram_foundation::SymbolNaming;

use crate::rule::{GeneratedRule, RuleTable};

/// Generates one coordination rule per coordination base.
#[must_use]
pub fn coordination_rules(
    table: &RuleTable,
    naming: &SymbolNaming,
    conjunction: &str,
) -> Vec<GeneratedRule> {
    let rules: Vec<GeneratedRule> = table
        .rules()
        .filter(|rule| rule.kind.is_coordination_base())
        .filter_map(|rule| {
            let name = naming.coordinated_name(&rule.name)?;
            let single = &rule.name;
            Some(GeneratedRule::new(
                name,
                format!(
                    "({single}) | (({single} \",\")+ {single}) | \
                     (({single} \",\")* {single} \"{conjunction}\" {single})"
                ),
            ))
        })
        .collect();

    debug!(rules = rules.len(), "generated coordination rules");
    rules
}
