//! Tool settings (`bundlepac.yaml`)
//!
//! The file is optional; every field has a default that matches a standard
//! Aurelia CLI project layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};

/// Settings filename, looked up in the project root
pub const SETTINGS_FILE: &str = "bundlepac.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Project manifest, relative to the project root
    pub project_file: PathBuf,

    /// Where custom tasks are installed
    pub tasks_dir: PathBuf,

    /// Bundle targeted when `--bundle` is not given
    pub default_bundle: String,

    /// Directory of pre-defined import definitions (`<pkg>.json`)
    pub registry_dir: PathBuf,

    /// Shared task sources used when a package ships none
    pub builtin_tasks_dir: PathBuf,

    /// Installed packages
    pub modules_dir: PathBuf,

    /// Extension of task source files
    pub task_source_extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_file: PathBuf::from("aurelia_project/aurelia.json"),
            tasks_dir: PathBuf::from("aurelia_project/tasks"),
            default_bundle: "vendor-bundle.js".to_string(),
            registry_dir: PathBuf::from("node_modules/bundlepac/registry"),
            builtin_tasks_dir: PathBuf::from("node_modules/bundlepac/tasks"),
            modules_dir: PathBuf::from("node_modules"),
            task_source_extension: ".js".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load `bundlepac.yaml` from a project root, falling back to defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(SETTINGS_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ImportError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ImportError::ConfigParseFailed { reason, .. } => ImportError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Resolve a settings path against the project root
    pub fn resolve(&self, project_root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }
}
