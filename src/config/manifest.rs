//! Project manifest (e.g. `aurelia_project/aurelia.json`)
//!
//! The manifest is modelled as a typed view over the whole JSON document:
//! the parts the pipeline edits are typed, everything else is kept verbatim
//! so that saving never drops settings the tool does not understand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::BundleSpec;
use crate::error::{ImportError, Result};

/// File extension used for tasks when the manifest has no transpiler section
pub const DEFAULT_SOURCE_EXTENSION: &str = ".js";

/// The host project's build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// `build` section with the bundle list
    #[serde(default)]
    pub build: BuildConfig,

    /// `transpiler` section, used for the task file extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transpiler: Option<TranspilerConfig>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `build` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub bundles: Vec<BundleSpec>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `transpiler` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranspilerConfig {
    #[serde(rename = "fileExtension", default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectManifest {
    /// Build a manifest from bundles only
    pub fn with_bundles(bundles: Vec<BundleSpec>) -> Self {
        Self {
            build: BuildConfig {
                bundles,
                extra: Map::new(),
            },
            transpiler: None,
            extra: Map::new(),
        }
    }

    /// Parse a manifest from a JSON document
    ///
    /// A `null` or empty document is a fatal configuration error.
    pub fn from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Object(map) if !map.is_empty() => {}
            Value::Object(_) | Value::Null => {
                return Err(ImportError::ConfigInvalid {
                    message: "Project configuration isn't given or empty".to_string(),
                });
            }
            other => {
                return Err(ImportError::ConfigInvalid {
                    message: format!("Project configuration must be an object, got {other}"),
                });
            }
        }

        serde_json::from_value(value).map_err(|e| ImportError::ConfigParseFailed {
            path: "project manifest".to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse a manifest from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// The whole manifest as a JSON document
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Pretty-printed JSON, as written back to disk
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn bundles(&self) -> &[BundleSpec] {
        &self.build.bundles
    }

    pub fn bundles_mut(&mut self) -> &mut Vec<BundleSpec> {
        &mut self.build.bundles
    }

    /// Index of the bundle with the given name
    pub fn find_bundle(&self, name: &str) -> Option<usize> {
        self.build.bundles.iter().position(|b| b.name == name)
    }

    /// Extension for source files (`transpiler.fileExtension`), e.g. `.ts`
    pub fn source_extension(&self) -> &str {
        self.transpiler
            .as_ref()
            .and_then(|t| t.file_extension.as_deref())
            .unwrap_or(DEFAULT_SOURCE_EXTENSION)
    }
}
