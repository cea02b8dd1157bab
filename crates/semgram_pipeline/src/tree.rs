//! Parse trees returned by the grammar engine.
//!
//! A tree has three kinds of nodes:
//! - a token leaf, holding the matched input token
//! - a named-empty node, a childless `empty_*` node marking a missing slot
//! - a composite node with children

use std::fmt::Write as _;

/// Prefix of named-empty nodes.
pub const EMPTY_PREFIX: &str = "empty_";

/// A parse tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseTree {
    /// A matched input token.
    Token(String),
    /// A rule application.
    Node {
        /// Rule name.
        name: String,
        /// Sub-trees in order.
        children: Vec<ParseTree>,
    },
}

impl ParseTree {
    /// Creates a token leaf.
    #[must_use]
    pub fn token(value: impl Into<String>) -> Self {
        Self::Token(value.into())
    }

    /// Creates a rule node.
    #[must_use]
    pub fn node(name: impl Into<String>, children: Vec<ParseTree>) -> Self {
        Self::Node {
            name: name.into(),
            children,
        }
    }

    /// Returns true for a childless `empty_*` node.
    #[must_use]
    pub fn is_named_empty(&self) -> bool {
        matches!(self, Self::Node { name, children } if children.is_empty() && name.starts_with(EMPTY_PREFIX))
    }

    /// Tokens and named-empty nodes, left to right.
    #[must_use]
    pub fn leaf_tokens(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Token(value) => out.push(value),
            Self::Node { name, children } => {
                if self.is_named_empty() {
                    out.push(name);
                }
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Indented text rendering, two spaces per level.
    ///
    /// A node whose only child is a token is printed on one line, the
    /// token separated by a tab.
    #[must_use]
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.write_pretty(0, &mut out);
        out
    }

    fn write_pretty(&self, level: usize, out: &mut String) {
        let indent = "  ".repeat(level);
        match self {
            Self::Token(value) => {
                let _ = writeln!(out, "{indent}{value}");
            }
            Self::Node { name, children } => {
                if let [Self::Token(value)] = children.as_slice() {
                    let _ = writeln!(out, "{indent}{name}\t{value}");
                    return;
                }
                let _ = writeln!(out, "{indent}{name}");
                for child in children {
                    child.write_pretty(level + 1, out);
                }
            }
        }
    }

    /// Graphviz rendering of the tree with a graph label.
    #[must_use]
    pub fn to_dot(&self, label: &str) -> String {
        let mut out = String::from("digraph tree {\n");
        let _ = writeln!(out, "  label=\"{}\";", escape_dot(label));
        let mut next_id = 0usize;
        self.write_dot(&mut out, &mut next_id);
        out.push_str("}\n");
        out
    }

    fn write_dot(&self, out: &mut String, next_id: &mut usize) -> usize {
        let id = *next_id;
        *next_id += 1;
        match self {
            Self::Token(value) => {
                let _ = writeln!(out, "  n{id} [label=\"{}\", shape=box];", escape_dot(value));
            }
            Self::Node { name, children } => {
                let _ = writeln!(out, "  n{id} [label=\"{}\"];", escape_dot(name));
                for child in children {
                    let child_id = child.write_dot(out, next_id);
                    let _ = writeln!(out, "  n{id} -> n{child_id};");
                }
            }
        }
        id
    }
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Pairs every tree leaf with the sentence word it came from.
///
/// `readings` lists `(word, reading)` in sentence order. A token leaf takes
/// the next word whose reading equals it; named-empty leaves pair with an
/// empty word.
#[must_use]
pub fn align_words(tree: &ParseTree, readings: &[(String, String)]) -> Vec<(String, String)> {
    let mut cursor = 0usize;
    tree.leaf_tokens()
        .into_iter()
        .map(|leaf| {
            if leaf.starts_with(EMPTY_PREFIX) {
                return (String::new(), leaf.to_string());
            }
            let found = readings[cursor..]
                .iter()
                .position(|(_, reading)| reading == leaf);
            let word = match found {
                Some(offset) => {
                    let word = readings[cursor + offset].0.clone();
                    cursor += offset + 1;
                    word
                }
                None => String::new(),
            };
            (word, leaf.to_string())
        })
        .collect()
}
