//! Error types for the semgram system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for semgram operations.
#[derive(Debug, Error)]
#[error("{kind}{}", located(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the input the error came from, keeping any line already set.
    #[must_use]
    pub fn in_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates an empty rule name error.
    #[must_use]
    pub fn empty_rule_name(line: usize) -> Self {
        Self::new(ErrorKind::EmptyRuleName { line }).at_line(line)
    }

    /// Creates an invalid rule name error.
    #[must_use]
    pub fn invalid_rule_name(name: impl Into<String>, line: usize) -> Self {
        Self::new(ErrorKind::InvalidRuleName {
            name: name.into(),
            line,
        })
        .at_line(line)
    }

    /// Creates a vocabulary record error.
    #[must_use]
    pub fn vocabulary_format(line: usize, content: impl Into<String>) -> Self {
        Self::new(ErrorKind::VocabularyFormat {
            line,
            content: content.into(),
        })
        .at_line(line)
    }

    /// Creates a dictionary record error.
    #[must_use]
    pub fn dictionary_format(line: usize, content: impl Into<String>) -> Self {
        Self::new(ErrorKind::DictionaryFormat {
            line,
            content: content.into(),
        })
        .at_line(line)
    }

    fn at_line(self, line: usize) -> Self {
        self.with_context(ErrorContext::new().with_line(line))
    }

    /// Creates an invalid semantic type error.
    #[must_use]
    pub fn invalid_semantic_type(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSemanticType {
            key: key.into(),
            reason: reason.into(),
        })
    }

    /// Creates a missing empty marker error.
    #[must_use]
    pub fn missing_empty_marker(phrase: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingEmptyMarker {
            phrase: phrase.into(),
            symbol: symbol.into(),
        })
    }

    /// Creates a generated name conflict error.
    #[must_use]
    pub fn generated_name_conflict(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneratedNameConflict { name: name.into() })
    }

    /// Wraps an I/O error, keeping only its message.
    #[must_use]
    pub fn io(err: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(&err)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A grammar line has the rule delimiter but nothing before it.
    #[error("empty rule name on line {line}")]
    EmptyRuleName {
        /// Line number (1-indexed).
        line: usize,
    },

    /// A grammar rule name that cannot be emitted as a symbol.
    #[error("invalid rule name {name:?} on line {line}")]
    InvalidRuleName {
        /// The offending left-hand side.
        name: String,
        /// Line number (1-indexed).
        line: usize,
    },

    /// A semantic-type registry key is malformed.
    #[error("invalid semantic type {key:?}: {reason}")]
    InvalidSemanticType {
        /// The offending registry key.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },

    /// A preposition phrase refers to a symbol that has no empty marker.
    #[error("preposition phrase {phrase} needs an empty marker for {symbol}")]
    MissingEmptyMarker {
        /// The `prep_<P>_<S>` rule name.
        phrase: String,
        /// The terminal whose empty marker is missing.
        symbol: String,
    },

    /// A generated rule name is already taken.
    #[error("generated rule {name} conflicts with an existing rule")]
    GeneratedNameConflict {
        /// The conflicting rule name.
        name: String,
    },

    /// A vocabulary record is not of the form `type:word`.
    #[error("malformed vocabulary record on line {line}: {content:?}")]
    VocabularyFormat {
        /// Line number (1-indexed).
        line: usize,
        /// The raw record.
        content: String,
    },

    /// A dictionary record is not of the form `word:lemma:tag`.
    #[error("malformed dictionary record on line {line}: {content:?}")]
    DictionaryFormat {
        /// Line number (1-indexed).
        line: usize,
        /// The raw record.
        content: String,
    },

    /// A sentence has more semantic-type combinations than allowed.
    #[error("sentence has {count} combinations (limit {limit})")]
    TooManyCombinations {
        /// Number of combinations the sentence would produce.
        count: usize,
        /// The configured limit.
        limit: usize,
    },

    /// I/O failure while reading inputs or writing exports.
    #[error("i/o error: {0}")]
    Io(String),

    /// Invalid configuration or command-line usage.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or input name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}

fn located(context: &Option<ErrorContext>) -> String {
    match context {
        Some(context @ ErrorContext { source: Some(_), .. }) => format!(" ({context})"),
        _ => String::new(),
    }
}

/// Result alias used throughout semgram.
pub type Result<T> = std::result::Result<T, Error>;
