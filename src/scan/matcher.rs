//! Pairing pass: turns lexed marker candidates into resolved markup matches
//!
//! The grammar requires a closing tag to carry the *same* name as its opening
//! tag, which a single regular expression cannot express without
//! back-references. Instead, this pass walks the token stream once and pairs
//! each opening marker with the nearest closing marker of the same name.
//! Nearest-close pairing reproduces non-greedy back-reference matching: the
//! inner text of a pair is whatever lies between the markers, opaque and
//! never re-scanned. Markers that pair with nothing are not markup and fall
//! through as ordinary literal text.

use super::lexer::{lex, Span, Token};

/// One recognized markup occurrence in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    /// Name captured from the marker
    pub name: String,
    /// Full byte range of the match, delimiters included
    pub span: Span,
    /// Syntactic form the name appeared in
    pub form: MarkupForm,
}

/// Which grammar form a markup match used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupForm {
    /// Paired tag `<name>…</name>`; `inner` is the byte range between the
    /// markers (possibly empty)
    Tag { inner: Span },
    /// Bare placeholder `{{name}}`
    Bare,
}

impl Markup {
    /// Inner text range for the paired-tag form, if any
    pub fn inner(&self) -> Option<&Span> {
        match &self.form {
            MarkupForm::Tag { inner } => Some(inner),
            MarkupForm::Bare => None,
        }
    }
}

/// Scan a template and collect every top-level markup match in source order
///
/// Matches never overlap. Everything between consecutive match spans (and
/// before the first / after the last) is literal text, including unpaired
/// markers and anything that merely resembles markup.
pub fn scan(template: &str) -> Vec<Markup> {
    let tokens: Vec<(Token, Span)> = lex(template).collect();
    let mut found = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i].0 {
            Token::Placeholder(name) => {
                found.push(Markup {
                    name: name.clone(),
                    span: tokens[i].1.clone(),
                    form: MarkupForm::Bare,
                });
                i += 1;
            }
            Token::OpenTag(name) => {
                let close = tokens[i + 1..]
                    .iter()
                    .position(|(tok, _)| matches!(tok, Token::CloseTag(n) if n == name));
                match close {
                    Some(offset) => {
                        let j = i + 1 + offset;
                        found.push(Markup {
                            name: name.clone(),
                            span: tokens[i].1.start..tokens[j].1.end,
                            form: MarkupForm::Tag {
                                inner: tokens[i].1.end..tokens[j].1.start,
                            },
                        });
                        // Everything up to the close marker was consumed as
                        // inner text
                        i = j + 1;
                    }
                    None => i += 1,
                }
            }
            _ => i += 1,
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markup() {
        assert!(scan("plain text, nothing else").is_empty());
    }

    #[test]
    fn test_simple_pair() {
        let found = scan("a<b>X</b>c");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "b");
        assert_eq!(found[0].span, 1..9);
        assert_eq!(found[0].form, MarkupForm::Tag { inner: 4..5 });
    }

    #[test]
    fn test_bare_placeholder() {
        let found = scan("hello {{name}}!");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "name");
        assert_eq!(found[0].span, 6..14);
        assert_eq!(found[0].form, MarkupForm::Bare);
    }

    #[test]
    fn test_mismatched_close_is_not_a_match() {
        assert!(scan("<b>X</c>").is_empty());
    }

    #[test]
    fn test_unterminated_open_is_not_a_match() {
        assert!(scan("<b>X").is_empty());
        assert!(scan("before <b>").is_empty());
    }

    #[test]
    fn test_stray_close_is_not_a_match() {
        assert!(scan("</b> trailing").is_empty());
    }

    #[test]
    fn test_nearest_close_wins() {
        // Mirrors non-greedy matching: the pair ends at the first </b>, the
        // second </b> is left over as literal text
        let found = scan("<b><b>x</b></b>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, 0..11);
        assert_eq!(found[0].form, MarkupForm::Tag { inner: 3..7 });
    }

    #[test]
    fn test_inner_markup_is_opaque() {
        // The placeholder inside the pair is consumed as inner text, not
        // matched on its own
        let found = scan("<b>a {{x}} c</b>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "b");
        assert_eq!(found[0].form, MarkupForm::Tag { inner: 3..12 });
    }

    #[test]
    fn test_broken_pair_exposes_inner_placeholder() {
        // With no matching close for <b>, the scan moves on and finds the
        // placeholder that the pair would otherwise have swallowed
        let found = scan("<b>a {{x}} c</q>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "x");
        assert_eq!(found[0].form, MarkupForm::Bare);
    }

    #[test]
    fn test_mismatched_close_skipped_for_later_close() {
        // <b> pairs with the </b> at the end; the </c> in between is part of
        // the inner text
        let found = scan("<b>x</c>y</b>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].form, MarkupForm::Tag { inner: 3..9 });
    }

    #[test]
    fn test_adjacent_matches() {
        let found = scan("<b>x</b>{{y}}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "b");
        assert_eq!(found[1].name, "y");
        assert_eq!(found[0].span.end, found[1].span.start);
    }

    #[test]
    fn test_close_before_open_is_ignored() {
        let found = scan("</b><b>x</b>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, 4..12);
    }

    #[test]
    fn test_empty_inner_text() {
        let found = scan("<b></b>");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].form, MarkupForm::Tag { inner: 3..3 });
    }

    #[test]
    fn test_matches_are_ordered_and_disjoint() {
        let found = scan("{{a}} mid <b>x</b> end {{c}}");
        assert_eq!(found.len(), 3);
        for pair in found.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn test_empty_template() {
        assert!(scan("").is_empty());
    }
}
