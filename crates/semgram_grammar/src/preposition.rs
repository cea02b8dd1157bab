//! Optional forms of preposition phrases.
//!
//! A rule `prep_s_maso` (preposition `PREP_S`, complement `MASO`) gets
//!
//! ```text
//! empty_prep_s_maso: empty_prep_s empty_maso
//! eps_prep_s_maso: empty_prep_s_maso | prep_s_maso
//! ```
//!
//! The composite empty marker keeps both missing slots visible in the tree.

use semgram_foundation::{Error, Result, SymbolNaming};
use tracing::debug;

use crate::epsilon::{OptionalPair, empty_marker_for};
use crate::rule::{GeneratedRule, RuleTable};

/// Generates the empty marker and optional symbol of every
/// `prep_<P>_<S>` rule.
///
/// # Errors
///
/// Returns `MissingEmptyMarker` if the preposition or complement terminal
/// has no optional pair.
pub fn preposition_rules(
    table: &RuleTable,
    pairs: &[OptionalPair],
    naming: &SymbolNaming,
) -> Result<Vec<GeneratedRule>> {
    let mut rules = Vec::new();

    for rule in table
        .rules()
        .filter(|rule| rule.kind.is_preposition_phrase())
    {
        let Some((prep, complement)) = naming.preposition_parts(&rule.name) else {
            continue;
        };

        let marker = |terminal: String| {
            empty_marker_for(pairs, &terminal)
                .map(str::to_string)
                .ok_or_else(|| Error::missing_empty_marker(&rule.name, terminal))
        };
        let prep_empty = marker(naming.preposition_terminal(prep))?;
        let complement_empty = marker(complement.to_uppercase())?;

        let empty = naming.empty_marker(&rule.name);
        rules.push(GeneratedRule::new(
            empty.clone(),
            format!("{prep_empty} {complement_empty}"),
        ));
        rules.push(GeneratedRule::new(
            naming.optional_symbol(&rule.name),
            format!("{empty} | {}", rule.name),
        ));
    }

    debug!(rules = rules.len(), "generated preposition phrase rules");
    Ok(rules)
}
