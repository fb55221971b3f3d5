//! Void-name configuration
//!
//! Some element-like names can never carry meaningful textual content even
//! when a template authors them as a pair (`<br>oops</br>`). Names flagged
//! void have their enclosed text discarded instead of forwarded to the
//! binding. The built-in set covers the HTML void elements; hosts with other
//! element vocabularies can load their own set from a TOML file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a void-name file
#[derive(Error, Debug)]
pub enum VoidSetError {
    #[error("Failed to read void-name file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse void-name TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Set of tag names whose inner text is never forwarded to a binding
#[derive(Debug, Clone)]
pub struct VoidSet {
    names: HashSet<String>,
}

/// TOML structure for deserializing void-name files
#[derive(Deserialize)]
struct TomlVoidSet {
    voids: Vec<String>,
}

/// Default void names - the HTML void elements
const DEFAULT_VOIDS: &str = r#"
voids = [
  "area", "base", "br", "col", "embed", "hr", "img", "input",
  "link", "meta", "source", "track", "wbr",
]
"#;

impl VoidSet {
    /// An empty set: every name forwards its enclosed text
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Load a void-name set from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, VoidSetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a void-name set from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, VoidSetError> {
        let parsed: TomlVoidSet = toml::from_str(content)?;
        Ok(Self {
            names: parsed.voids.into_iter().collect(),
        })
    }

    /// Whether `name` is flagged void
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Flag an additional name as void
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }
}

impl Default for VoidSet {
    fn default() -> Self {
        Self::from_toml(DEFAULT_VOIDS).expect("Default void list should be valid TOML")
    }
}
