//! Markup recognizer for localized templates

pub mod lexer;
mod matcher;

pub use lexer::Span;
pub use matcher::{scan, Markup, MarkupForm};
