//! Output units produced by an interpolation pass

/// One ordered output unit: literal template text or substituted rich content
///
/// `N` is the consumer's node type. The engine never inspects it; it only
/// places nodes into the sequence where their markup appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<N> {
    /// Literal text between (or around) markup matches
    Text(String),
    /// Rich content produced by a binding
    Node(N),
}

impl<N> Segment<N> {
    /// Literal text of this segment, if it is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(text) => Some(text),
            Segment::Node(_) => None,
        }
    }

    /// Rich node of this segment, if it is one
    pub fn as_node(&self) -> Option<&N> {
        match self {
            Segment::Text(_) => None,
            Segment::Node(node) => Some(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let text: Segment<u32> = Segment::Text("hi".to_string());
        assert_eq!(text.as_text(), Some("hi"));
        assert_eq!(text.as_node(), None);

        let node: Segment<u32> = Segment::Node(7);
        assert_eq!(node.as_text(), None);
        assert_eq!(node.as_node(), Some(&7));
    }
}
