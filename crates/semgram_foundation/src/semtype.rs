//! Semantic types and the semantic-type registry.
//!
//! A naive semantic type is a single marker-prefixed tag such as `#measure`.
//! A combined type joins several naive tags with the combinator, e.g.
//! `#floskule^#measure`, and stands for a word that is ambiguous between
//! them.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Characters that spell semantic types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SemtypeNotation {
    /// Prefix of every naive tag.
    pub marker: char,
    /// Separator between the naive tags of a combined type.
    pub combinator: char,
}

impl Default for SemtypeNotation {
    fn default() -> Self {
        Self {
            marker: '#',
            combinator: '^',
        }
    }
}

impl SemtypeNotation {
    /// Splits a key into its naive components, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSemanticType` if a component is empty, lacks the
    /// marker, or contains characters that cannot form a terminal name.
    pub fn components<'a>(&self, key: &'a str) -> Result<Vec<&'a str>> {
        key.split(self.combinator)
            .map(|component| self.validate_naive(key, component).map(|()| component))
            .collect()
    }

    fn validate_naive(&self, key: &str, component: &str) -> Result<()> {
        let Some(tag) = component.strip_prefix(self.marker) else {
            return Err(Error::invalid_semantic_type(
                key,
                format!("component {component:?} does not start with {:?}", self.marker),
            ));
        };
        if tag.is_empty() {
            return Err(Error::invalid_semantic_type(
                key,
                format!("component {component:?} has no tag after the marker"),
            ));
        }
        if !tag.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(Error::invalid_semantic_type(
                key,
                format!("component {component:?} must start with a letter after the marker"),
            ));
        }
        if let Some(bad) = tag.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(Error::invalid_semantic_type(
                key,
                format!("component {component:?} contains {bad:?}"),
            ));
        }
        Ok(())
    }

    /// Returns true if the key joins more than one naive tag.
    #[must_use]
    pub fn is_combined(&self, key: &str) -> bool {
        key.contains(self.combinator)
    }

    /// Returns true if `key` has `naive` as one of its components.
    #[must_use]
    pub fn has_component(&self, key: &str, naive: &str) -> bool {
        key.split(self.combinator).any(|component| component == naive)
    }

    /// Terminal name for a naive tag: `#measure` becomes `MEASURE`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSemanticType` if `naive` is not a valid naive tag.
    pub fn terminal_name(&self, naive: &str) -> Result<String> {
        self.validate_naive(naive, naive)?;
        Ok(naive[self.marker.len_utf8()..].to_uppercase())
    }

    /// Joins naive tags into one combined key, sorted for determinism.
    #[must_use]
    pub fn combine<I, S>(&self, tags: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<String> = tags.into_iter().map(|t| t.as_ref().to_string()).collect();
        tags.sort();
        tags.dedup();
        tags.join(&self.combinator.to_string())
    }
}

/// How a key entered the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SemtypeOrigin {
    /// Supplied by the caller.
    Declared,
    /// Added by closure as a naive component of a combined key.
    Derived,
}

/// Insertion-ordered set of semantic-type keys.
///
/// Iteration order is insertion order, which makes every grammar generated
/// from a registry reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SemtypeRegistry {
    entries: IndexMap<String, SemtypeOrigin>,
}

impl SemtypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declared key. Returns false if it was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.insert_with_origin(key.into(), SemtypeOrigin::Declared)
    }

    fn insert_with_origin(&mut self, key: String, origin: SemtypeOrigin) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, origin);
        true
    }

    /// Returns true if the key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns how the key entered the registry.
    #[must_use]
    pub fn origin(&self, key: &str) -> Option<SemtypeOrigin> {
        self.entries.get(key).copied()
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns a registry that also holds every naive component of every
    /// combined key.
    ///
    /// Missing components are appended in the order they are first met.
    /// `self` is left untouched; closing a closed registry changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSemanticType` for any malformed key.
    pub fn closure(&self, notation: &SemtypeNotation) -> Result<Self> {
        let mut closed = self.clone();
        for key in self.keys() {
            for component in notation.components(key)? {
                closed.insert_with_origin(component.to_string(), SemtypeOrigin::Derived);
            }
        }
        Ok(closed)
    }

    /// Naive keys in registry order.
    pub fn naive_keys<'a>(&'a self, notation: &'a SemtypeNotation) -> impl Iterator<Item = &'a str> {
        self.keys().filter(|key| !notation.is_combined(key))
    }

    /// Every key having `naive` as a component, sorted lexicographically.
    #[must_use]
    pub fn keys_containing(&self, notation: &SemtypeNotation, naive: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .keys()
            .filter(|key| notation.has_component(key, naive))
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl<S: Into<String>> FromIterator<S> for SemtypeRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for key in iter {
            registry.insert(key);
        }
        registry
    }
}
