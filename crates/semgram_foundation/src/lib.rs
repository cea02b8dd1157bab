//! Core types shared by every semgram layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`SymbolKind`] and [`SymbolNaming`] - Grammar symbol classification
//! - [`SemtypeRegistry`] and [`SemtypeNotation`] - Semantic types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod semtype;
pub mod symbol;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use semtype::{SemtypeNotation, SemtypeOrigin, SemtypeRegistry};
pub use symbol::{SymbolKind, SymbolNaming};
