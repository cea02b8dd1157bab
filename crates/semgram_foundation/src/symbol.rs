//! Grammar symbol classification.
//!
//! Rule names carry their role in their spelling: upper-case names are
//! terminals, `*_single` names are coordination bases and `prep_<P>_<S>`
//! names are preposition phrases. [`SymbolNaming`] reads that convention
//! once so later passes can work on [`SymbolKind`] instead of raw names.

use std::fmt;

/// The role of a declared grammar symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Matched directly against input tokens.
    Terminal,
    /// An ordinary rule.
    Nonterminal,
    /// A rule whose coordinated form is generated.
    CoordinationBase,
    /// A `prep_<P>_<S>` rule whose optional form is generated.
    PrepositionPhraseBase,
    /// A `prep_<P>_single` rule, which gets both generated forms.
    CoordinatedPrepositionPhrase,
}

impl SymbolKind {
    /// Returns true for terminals.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }

    /// Returns true if a coordinated form is generated for the rule.
    #[must_use]
    pub const fn is_coordination_base(self) -> bool {
        matches!(self, Self::CoordinationBase | Self::CoordinatedPrepositionPhrase)
    }

    /// Returns true if an optional phrase form is generated for the rule.
    #[must_use]
    pub const fn is_preposition_phrase(self) -> bool {
        matches!(self, Self::PrepositionPhraseBase | Self::CoordinatedPrepositionPhrase)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => write!(f, "terminal"),
            Self::Nonterminal => write!(f, "nonterminal"),
            Self::CoordinationBase => write!(f, "coordination base"),
            Self::PrepositionPhraseBase => write!(f, "preposition phrase"),
            Self::CoordinatedPrepositionPhrase => write!(f, "coordinated preposition phrase"),
        }
    }
}

/// Naming conventions for declared and generated symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolNaming {
    /// Suffix marking the non-coordinated singular form.
    pub coordination_suffix: String,
    /// First segment of preposition phrase names.
    pub preposition_prefix: String,
    /// Prefix of generated empty markers.
    pub empty_prefix: String,
    /// Prefix of generated optional symbols.
    pub optional_prefix: String,
}

impl Default for SymbolNaming {
    fn default() -> Self {
        Self {
            coordination_suffix: "_single".to_string(),
            preposition_prefix: "prep".to_string(),
            empty_prefix: "empty".to_string(),
            optional_prefix: "eps".to_string(),
        }
    }
}

impl SymbolNaming {
    /// Classifies a declared rule name.
    ///
    /// A name without any lower-case character is a terminal.
    #[must_use]
    pub fn classify(&self, name: &str) -> SymbolKind {
        if !name.chars().any(char::is_lowercase) {
            SymbolKind::Terminal
        } else {
            match (
                self.coordinated_name(name).is_some(),
                self.preposition_parts(name).is_some(),
            ) {
                (true, true) => SymbolKind::CoordinatedPrepositionPhrase,
                (true, false) => SymbolKind::CoordinationBase,
                (false, true) => SymbolKind::PrepositionPhraseBase,
                (false, false) => SymbolKind::Nonterminal,
            }
        }
    }

    /// Returns the coordinated rule name for a `*_single` base.
    #[must_use]
    pub fn coordinated_name<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_suffix(self.coordination_suffix.as_str())
            .filter(|stem| !stem.is_empty())
    }

    /// Splits `prep_<P>_<S>` into `(P, S)`.
    ///
    /// The name must have exactly three non-empty `_`-separated segments.
    #[must_use]
    pub fn preposition_parts<'a>(&self, name: &'a str) -> Option<(&'a str, &'a str)> {
        let mut segments = name.split('_');
        let (Some(prefix), Some(prep), Some(complement), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return None;
        };
        if prefix != self.preposition_prefix || prep.is_empty() || complement.is_empty() {
            return None;
        }
        Some((prep, complement))
    }

    /// Name of the empty marker for `symbol`, e.g. `empty_foo` for `FOO`.
    #[must_use]
    pub fn empty_marker(&self, symbol: &str) -> String {
        format!("{}_{}", self.empty_prefix, symbol.to_lowercase())
    }

    /// Name of the optional symbol for `symbol`, e.g. `eps_foo` for `FOO`.
    #[must_use]
    pub fn optional_symbol(&self, symbol: &str) -> String {
        format!("{}_{}", self.optional_prefix, symbol.to_lowercase())
    }

    /// Terminal name of the preposition in a `prep_<P>_<S>` phrase.
    #[must_use]
    pub fn preposition_terminal(&self, prep: &str) -> String {
        format!("{}_{}", self.preposition_prefix, prep).to_uppercase()
    }
}
