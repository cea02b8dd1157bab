//! Rule parsing and merging.
//!
//! Turns grammar source into an ordered [`RuleTable`]: directives stay where
//! they were written, and every rule name owns exactly one entry placed at
//! its first declaration. Later declarations of the same name add
//! alternatives to that entry in source order.

use std::fmt;

use indexmap::IndexMap;
use semgram_foundation::{Error, Result, SymbolKind};
use tracing::debug;

use crate::config::PreprocessorConfig;

/// Where a rule entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleOrigin {
    /// Written by the grammar author.
    Declared,
    /// Synthesized from the semantic-type registry.
    Generated,
}

/// One merged rule: a name and its alternatives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleLine {
    /// Left-hand side.
    pub name: String,
    /// Right-hand sides in declaration order.
    pub alternatives: Vec<String>,
    /// Role of the name, classified once at ingestion.
    pub kind: SymbolKind,
    /// Declared or generated.
    pub origin: RuleOrigin,
    /// Position among rule entries, fixed at first sight.
    pub order: usize,
}

impl fmt::Display for RuleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            RuleOrigin::Declared => {
                write!(f, "{}:", self.name)?;
                for (i, alternative) in self.alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "({alternative})")?;
                }
                Ok(())
            }
            RuleOrigin::Generated => {
                write!(f, "{}: {}", self.name, self.alternatives.join(" | "))
            }
        }
    }
}

/// A line of the merged grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrammarLine {
    /// A line without the rule delimiter, copied verbatim.
    Directive(String),
    /// A merged rule entry.
    Rule(RuleLine),
}

impl fmt::Display for GrammarLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directive(text) => write!(f, "{text}"),
            Self::Rule(rule) => write!(f, "{rule}"),
        }
    }
}

/// A rule synthesized after merging, emitted as `name: body`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedRule {
    /// Left-hand side.
    pub name: String,
    /// Right-hand side; empty for an epsilon production.
    pub body: String,
}

impl GeneratedRule {
    /// Creates a generated rule.
    #[must_use]
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Creates a rule producing nothing.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }
}

impl fmt::Display for GeneratedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            write!(f, "{}:", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.body)
        }
    }
}

/// Ordered directives and rules with a name index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    lines: Vec<GrammarLine>,
    /// Rule name -> index into `lines`, in first-seen order.
    index: IndexMap<String, usize>,
}

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses grammar source, merging repeated rule names.
    ///
    /// # Errors
    ///
    /// Returns `EmptyRuleName` when a rule line has nothing before the
    /// delimiter and `InvalidRuleName` when the name contains whitespace.
    pub fn parse(source: &str, config: &PreprocessorConfig) -> Result<Self> {
        let mut table = Self::new();
        let mut directives = 0usize;

        for (number, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(config.comment_marker.as_str()) {
                continue;
            }

            let Some((left, right)) = line.split_once(config.rule_delimiter) else {
                table.lines.push(GrammarLine::Directive(line.to_string()));
                directives += 1;
                continue;
            };

            let name = left.trim();
            if name.is_empty() {
                return Err(Error::empty_rule_name(number + 1));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(Error::invalid_rule_name(name, number + 1));
            }

            let kind = config.naming.classify(name);
            table.add_alternative(name, right.trim().to_string(), kind, RuleOrigin::Declared);
        }

        debug!(
            rules = table.index.len(),
            directives, "parsed grammar source"
        );
        Ok(table)
    }

    /// Appends an alternative to `name`, creating the entry at the end if
    /// the name is new.
    pub fn add_alternative(
        &mut self,
        name: &str,
        alternative: String,
        kind: SymbolKind,
        origin: RuleOrigin,
    ) {
        if let Some(rule) = self.get_mut(name) {
            rule.alternatives.push(alternative);
            return;
        }
        let order = self.index.len();
        self.index.insert(name.to_string(), self.lines.len());
        self.lines.push(GrammarLine::Rule(RuleLine {
            name: name.to_string(),
            alternatives: vec![alternative],
            kind,
            origin,
            order,
        }));
    }

    /// Appends a whole generated rule entry.
    ///
    /// # Errors
    ///
    /// Returns `GeneratedNameConflict` if the name already exists.
    pub fn push_generated(
        &mut self,
        name: &str,
        alternatives: Vec<String>,
        kind: SymbolKind,
    ) -> Result<()> {
        if self.contains(name) {
            return Err(Error::generated_name_conflict(name));
        }
        let order = self.index.len();
        self.index.insert(name.to_string(), self.lines.len());
        self.lines.push(GrammarLine::Rule(RuleLine {
            name: name.to_string(),
            alternatives,
            kind,
            origin: RuleOrigin::Generated,
            order,
        }));
        Ok(())
    }

    /// Returns true if a rule with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleLine> {
        match self.lines.get(*self.index.get(name)?) {
            Some(GrammarLine::Rule(rule)) => Some(rule),
            _ => None,
        }
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut RuleLine> {
        let position = *self.index.get(name)?;
        match self.lines.get_mut(position) {
            Some(GrammarLine::Rule(rule)) => Some(rule),
            _ => None,
        }
    }

    /// Rule entries in first-seen order.
    pub fn rules(&self) -> impl Iterator<Item = &RuleLine> {
        self.index
            .values()
            .filter_map(|&position| match &self.lines[position] {
                GrammarLine::Rule(rule) => Some(rule),
                GrammarLine::Directive(_) => None,
            })
    }

    /// Rule names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// All lines, directives included.
    #[must_use]
    pub fn lines(&self) -> &[GrammarLine] {
        &self.lines
    }

    /// Number of rule entries.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.index.len()
    }
}
