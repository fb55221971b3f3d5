//! Diagnostics and the sink they are reported through
//!
//! Interpolation never fails: problems degrade to omitted segments and are
//! surfaced through a [`Reporter`] supplied by the host. The library ships a
//! default that forwards to the `log` facade and a collector for callers that
//! want to inspect diagnostics afterwards.

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::scan::Span;

/// Non-fatal problems found while interpolating a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A matched name had no entry in the substitution map; the match was
    /// dropped from the output
    #[error("no replacement bound for '{name}'")]
    UnboundName { name: String, span: Span },
}

impl Diagnostic {
    /// Byte range of the template text this diagnostic refers to
    pub fn span(&self) -> &Span {
        match self {
            Diagnostic::UnboundName { span, .. } => span,
        }
    }

    /// Format the diagnostic with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            Diagnostic::UnboundName { name, span } => {
                Report::build(ReportKind::Warning, filename, span.start)
                    .with_message(self.to_string())
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("'{}' is not in the substitution map", name))
                            .with_color(Color::Yellow),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}

/// Sink for diagnostics produced during interpolation
pub trait Reporter {
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade at warn level
///
/// This is the sink used by [`crate::interpolate`]; hosts with their own
/// logging facility can implement [`Reporter`] directly instead.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, diagnostic: &Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Accumulates diagnostics for later inspection
#[derive(Debug, Default)]
pub struct Collector {
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far, in report order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Reporter for Collector {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}
