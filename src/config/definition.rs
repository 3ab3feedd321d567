//! Import definition: what a package needs from the host project

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{Action, BundleSpec, DependencyEntry};
use crate::error::Result;

/// Declared requirements of the package being installed or removed
///
/// Every section is optional; a missing section means "nothing to do" for
/// the corresponding pipeline step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportDefinition {
    /// RFC 6902 operations applied to the manifest on install
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patches: Vec<Value>,

    /// Entries merged into the target bundle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyEntry>,

    /// Whole bundles merged into `build.bundles`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<BundleSpec>,

    /// Custom task names to copy into the project's task directory
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<String>,

    /// Shell commands per action (`install`, `uninstall`)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub scripts: Map<String, Value>,
}

impl ImportDefinition {
    /// Parse a definition from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Commands declared for an action, in order
    ///
    /// Non-string entries are ignored.
    pub fn scripts_for(&self, action: Action) -> Vec<&str> {
        match self.scripts.get(action.as_str()) {
            Some(Value::Array(commands)) => commands.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(command)) => vec![command.as_str()],
            _ => Vec::new(),
        }
    }

    /// Whether the definition asks for nothing at all
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
            && self.dependencies.is_empty()
            && self.bundles.is_empty()
            && self.tasks.is_empty()
            && self.scripts.is_empty()
    }
}
