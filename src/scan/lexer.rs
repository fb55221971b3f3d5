//! Lexer for template markup candidates using logos
//!
//! Tokenizes a template into candidate markers (`<name>`, `</name>`,
//! `{{name}}`) and literal runs. Whether a marker is actually markup is
//! decided by the pairing pass in [`super::matcher`]; a lone `<` or `{` that
//! opens nothing is still covered by the `Lt`/`Brace` tokens so that every
//! byte of the input carries a span.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Opening tag marker: `<name>`
    #[regex(r"<[0-9A-Za-z_]+>", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    OpenTag(String),

    /// Closing tag marker: `</name>`
    #[regex(r"</[0-9A-Za-z_]+>", |lex| {
        let s = lex.slice();
        s[2..s.len() - 1].to_string()
    })]
    CloseTag(String),

    /// Bare placeholder: `{{name}}`
    #[regex(r"\{\{[0-9A-Za-z_]+\}\}", |lex| {
        let s = lex.slice();
        s[2..s.len() - 2].to_string()
    })]
    Placeholder(String),

    /// Run of ordinary text (anything that cannot start a marker)
    #[regex(r"[^<{]+")]
    Text,

    /// A `<` that did not open a well-formed marker
    #[token("<")]
    Lt,

    /// A `{` that did not open a well-formed placeholder
    #[token("{")]
    Brace,
}

/// Lex a template into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
