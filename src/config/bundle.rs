//! BundleSpec: one named bundle in the project manifest

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DependencyEntry;
use crate::merge::Named;

/// A bundle definition under `build.bundles`
///
/// Only `name` and `dependencies` are interpreted; every other key
/// (`source`, `prepend`, `options`, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleSpec {
    /// Bundle file name, unique within the manifest
    pub name: String,

    /// Dependencies; absent until the first one is registered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<DependencyEntry>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BundleSpec {
    /// Create an empty bundle
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: None,
            extra: Map::new(),
        }
    }

    /// Builder-style helper to set dependencies
    #[must_use]
    pub fn with_dependencies<I, D>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DependencyEntry>,
    {
        self.dependencies = Some(dependencies.into_iter().map(Into::into).collect());
        self
    }

    /// Dependencies, creating the list on first use
    pub fn dependencies_mut(&mut self) -> &mut Vec<DependencyEntry> {
        self.dependencies.get_or_insert_with(Vec::new)
    }

    /// Names of the declared dependencies in order
    pub fn dependency_names(&self) -> Vec<&str> {
        self.dependencies
            .iter()
            .flatten()
            .map(DependencyEntry::name)
            .collect()
    }
}

impl Named for BundleSpec {
    fn identity(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_dependencies_stay_absent() {
        let bundle: BundleSpec = serde_json::from_value(json!({
            "name": "app-bundle.js",
            "source": ["[**/*.js]"]
        }))
        .unwrap();

        assert!(bundle.dependencies.is_none());
        let back = serde_json::to_value(&bundle).unwrap();
        assert!(back.get("dependencies").is_none());
        assert_eq!(back["source"], json!(["[**/*.js]"]));
    }

    #[test]
    fn test_dependencies_created_lazily() {
        let mut bundle = BundleSpec::new("vendor-bundle.js");
        bundle.dependencies_mut().push("jquery".into());
        assert_eq!(bundle.dependency_names(), vec!["jquery"]);
    }
}
