//! Rich Interp - rich-content interpolation for localized templates
//!
//! Translated strings often need structured content spliced into them: a
//! bold span here, a link or icon there. This library takes a resolved
//! template containing paired tags (`<name>…</name>`) and bare placeholders
//! (`{{name}}`) plus a substitution map, and produces an ordered sequence of
//! plain-text and rich segments for a rendering layer to lay out.
//!
//! The engine is deliberately small: no conditionals, no loops, no
//! expression evaluation, no sanitization. Tag pairs only match when the
//! closing name is identical to the opening name; anything that merely looks
//! like markup falls through as literal text, so malformed translations can
//! never crash rendering.
//!
//! # Example
//!
//! ```rust
//! use rich_interp::{interpolate, Bindings, Segment};
//!
//! let bindings = Bindings::new()
//!     .wrapper("strong", |text: &str| format!("**{text}**"))
//!     .value("name", "Ada".to_string());
//!
//! let segments = interpolate("Hi <strong>there</strong>, {{name}}!", &bindings);
//! assert_eq!(segments, vec![
//!     Segment::Text("Hi ".to_string()),
//!     Segment::Node("**there**".to_string()),
//!     Segment::Text(", ".to_string()),
//!     Segment::Node("Ada".to_string()),
//!     Segment::Text("!".to_string()),
//! ]);
//! ```

pub mod binding;
pub mod report;
pub mod scan;
pub mod segment;
pub mod voidset;

pub use binding::{Binding, Bindings, WrapperFn};
pub use report::{Collector, Diagnostic, LogReporter, Reporter};
pub use scan::{scan, Markup, MarkupForm, Span};
pub use segment::Segment;
pub use voidset::{VoidSet, VoidSetError};

/// Configuration for an interpolation pass
#[derive(Debug, Clone)]
pub struct InterpolateConfig {
    /// Names whose enclosed text is never forwarded to their binding
    pub voids: VoidSet,
}

impl Default for InterpolateConfig {
    fn default() -> Self {
        Self {
            voids: VoidSet::default(),
        }
    }
}

impl InterpolateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the void-name set
    pub fn with_voids(mut self, voids: VoidSet) -> Self {
        self.voids = voids;
        self
    }
}

/// Interpolate a template with default configuration
///
/// Unbound names are reported through the `log` facade at warn level and
/// dropped from the output. Void names come from the built-in HTML list; use
/// [`interpolate_with`] to supply a different set or a different diagnostic
/// sink.
///
/// # Example
///
/// ```rust
/// use rich_interp::{interpolate, Bindings, Segment};
///
/// let bindings = Bindings::new().value("sep", "•".to_string());
/// let segments = interpolate("a{{sep}}b", &bindings);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[1], Segment::Node("•".to_string()));
/// ```
pub fn interpolate<N: Clone>(template: &str, bindings: &Bindings<N>) -> Vec<Segment<N>> {
    interpolate_with(
        template,
        bindings,
        &InterpolateConfig::default(),
        &mut LogReporter,
    )
}

/// Interpolate a template with custom configuration and diagnostic sink
///
/// This is the full pipeline: scan the template for markup matches, then
/// walk them in source order with a cursor, emitting the literal text
/// between matches and the resolved substitution for each match. The call
/// always returns a segment list; unresolved names degrade to omissions
/// reported through `reporter`.
///
/// # Example
///
/// ```rust
/// use rich_interp::{interpolate_with, Bindings, Collector, InterpolateConfig, Segment};
///
/// let bindings = Bindings::<String>::new();
/// let mut collector = Collector::new();
/// let segments = interpolate_with(
///     "before<x>Y</x>after",
///     &bindings,
///     &InterpolateConfig::default(),
///     &mut collector,
/// );
///
/// // The unbound match is dropped, not leaked
/// assert_eq!(segments, vec![
///     Segment::Text("before".to_string()),
///     Segment::Text("after".to_string()),
/// ]);
/// assert_eq!(collector.diagnostics().len(), 1);
/// ```
pub fn interpolate_with<N: Clone>(
    template: &str,
    bindings: &Bindings<N>,
    config: &InterpolateConfig,
    reporter: &mut dyn Reporter,
) -> Vec<Segment<N>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for markup in scan(template) {
        if markup.span.start > cursor {
            segments.push(Segment::Text(template[cursor..markup.span.start].to_string()));
        }

        match bindings.get(&markup.name) {
            Some(Binding::Wrapper(wrap)) => {
                // Bare placeholders and void names have no enclosed text to
                // forward; the wrapper still runs, with an empty string
                let inner = match &markup.form {
                    MarkupForm::Tag { inner } if !config.voids.contains(&markup.name) => {
                        &template[inner.clone()]
                    }
                    _ => "",
                };
                segments.push(Segment::Node(wrap(inner)));
            }
            Some(Binding::Value(node)) => {
                segments.push(Segment::Node(node.clone()));
            }
            None => {
                reporter.report(&Diagnostic::UnboundName {
                    name: markup.name.clone(),
                    span: markup.span.clone(),
                });
            }
        }

        cursor = markup.span.end;
    }

    if cursor < template.len() {
        segments.push(Segment::Text(template[cursor..].to_string()));
    }

    segments
}
