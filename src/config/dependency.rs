//! DependencyEntry for bundle configuration
//!
//! A dependency is either a bare module name or an object with a `name`
//! and any loader configuration the bundler understands.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::merge::Named;

/// A dependency declared in a bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyEntry {
    /// Bare module name, e.g. `"aurelia-binding"`
    Name(String),

    /// Named entry with extra configuration, e.g. `{"name": "jquery", "path": "..."}`
    Config {
        name: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl DependencyEntry {
    /// Create a bare-name dependency
    pub fn named(name: impl Into<String>) -> Self {
        DependencyEntry::Name(name.into())
    }

    /// Create a configured dependency from its extra fields
    pub fn configured(name: impl Into<String>, extra: Map<String, Value>) -> Self {
        DependencyEntry::Config {
            name: name.into(),
            extra,
        }
    }

    /// Resolved name used for identity comparisons
    pub fn name(&self) -> &str {
        match self {
            DependencyEntry::Name(name) | DependencyEntry::Config { name, .. } => name,
        }
    }
}

impl Named for DependencyEntry {
    fn identity(&self) -> &str {
        self.name()
    }
}

impl From<&str> for DependencyEntry {
    fn from(name: &str) -> Self {
        DependencyEntry::named(name)
    }
}
