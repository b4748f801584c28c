//! Core language definition for Bilisp
//!
//! This crate contains the value model, the syntax tree and grammar that
//! produce it, and the reader that turns a syntax tree into values. It does
//! not evaluate anything - the evaluator and builtins live in the
//! `bilisp-runtime` crate.

pub mod error;
pub mod grammar;
pub mod reader;
pub mod syntax;
pub mod value;

// Re-export commonly used items for convenience
pub use error::{LispError, ParseError};
pub use grammar::parse;
pub use reader::read;
pub use syntax::{SyntaxNode, SyntaxTree, Tag};
pub use value::{Value, render};
