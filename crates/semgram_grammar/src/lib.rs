//! Grammar preprocessor for semgram.
//!
//! Compiles the compact, author-facing grammar notation into explicit
//! context-free grammar text for an Earley engine running in explicit
//! ambiguity mode.
//!
//! # Pipeline
//!
//! ```text
//! grammar source ──► RuleTable::parse ──► SemanticTypeExpander
//!                    (merge by name)      (registry closure, terminals)
//!                                                │
//!             ┌──────────────────────────────────┤
//!             ▼                 ▼                ▼
//!      optional_pairs   coordination_rules   preposition_rules
//!      (empty_t, eps_t)  (X from X_single)   (prep_<P>_<S>)
//!             │                 │                │
//!             └────────► GrammarAssembler ◄──────┘
//! ```
//!
//! # Notation
//!
//! - `// ...` lines are comments; lines without `:` are directives kept
//!   verbatim; `LEFT: RIGHT` declares or extends a rule.
//! - All-uppercase names are terminals, `*_single` names are coordination
//!   bases, `prep_<P>_<S>` names are preposition phrases.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assembler;
pub mod config;
pub mod coordination;
pub mod epsilon;
pub mod preposition;
pub mod rule;
pub mod terminals;

pub use assembler::{CompiledGrammar, GrammarAssembler, GrammarStats, preprocess};
pub use config::PreprocessorConfig;
pub use epsilon::OptionalPair;
pub use rule::{GeneratedRule, GrammarLine, RuleLine, RuleOrigin, RuleTable};
pub use terminals::SemanticTypeExpander;
