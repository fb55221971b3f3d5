//! Name-to-substitution bindings
//!
//! A binding is an explicit tagged union, not a duck-typed callback-or-node
//! argument: either a wrapper function applied to the text a tag pair
//! encloses, or a pre-built node substituted wholesale.

use std::collections::HashMap;
use std::fmt;

/// Content-wrapping substitution function
pub type WrapperFn<N> = Box<dyn Fn(&str) -> N>;

/// One named substitution
pub enum Binding<N> {
    /// Invoked with the literal text enclosed by a matching tag pair (or the
    /// empty string when no enclosed text exists)
    Wrapper(WrapperFn<N>),
    /// Substituted as-is wherever the name appears; any enclosed text is
    /// discarded
    Value(N),
}

impl<N: fmt::Debug> fmt::Debug for Binding<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Wrapper(_) => f.write_str("Wrapper(..)"),
            Binding::Value(node) => f.debug_tuple("Value").field(node).finish(),
        }
    }
}

/// Substitution map supplied by the caller for a single interpolation
///
/// One binding per name; inserting a name again replaces the earlier entry.
pub struct Bindings<N> {
    entries: HashMap<String, Binding<N>>,
}

impl<N> Bindings<N> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Bind `name` to a wrapper function
    pub fn wrapper(mut self, name: impl Into<String>, f: impl Fn(&str) -> N + 'static) -> Self {
        self.entries.insert(name.into(), Binding::Wrapper(Box::new(f)));
        self
    }

    /// Bind `name` to a pre-built node
    pub fn value(mut self, name: impl Into<String>, node: N) -> Self {
        self.entries.insert(name.into(), Binding::Value(node));
        self
    }

    /// Look up the binding for `name`
    pub fn get(&self, name: &str) -> Option<&Binding<N>> {
        self.entries.get(name)
    }

    /// Number of bound names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names are bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N> Default for Bindings<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: fmt::Debug> fmt::Debug for Bindings<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookup() {
        let bindings = Bindings::new()
            .wrapper("strong", |text: &str| format!("<{text}>"))
            .value("name", "Ada".to_string());

        assert_eq!(bindings.len(), 2);
        assert!(matches!(bindings.get("strong"), Some(Binding::Wrapper(_))));
        assert!(matches!(bindings.get("name"), Some(Binding::Value(v)) if v == "Ada"));
        assert!(bindings.get("missing").is_none());
    }

    #[test]
    fn test_rebinding_replaces() {
        let bindings = Bindings::new()
            .value("x", "first".to_string())
            .value("x", "second".to_string());

        assert_eq!(bindings.len(), 1);
        assert!(matches!(bindings.get("x"), Some(Binding::Value(v)) if v == "second"));
    }

    #[test]
    fn test_wrapper_invocation() {
        let bindings = Bindings::new().wrapper("upper", |text: &str| text.to_uppercase());
        match bindings.get("upper") {
            Some(Binding::Wrapper(f)) => assert_eq!(f("loud"), "LOUD"),
            other => panic!("Expected Wrapper, got {other:?}"),
        }
    }
}
