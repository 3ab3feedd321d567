//! Options for a single pipeline run

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ImportError;

/// What the pipeline is doing to the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Install,
    Uninstall,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Install => "install",
            Action::Uninstall => "uninstall",
        }
    }

    pub fn is_install(self) -> bool {
        self == Action::Install
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "install" | "i" => Ok(Action::Install),
            "uninstall" | "u" => Ok(Action::Uninstall),
            other => Err(ImportError::ConfigInvalid {
                message: format!("Unknown action '{other}', expected install or uninstall"),
            }),
        }
    }
}

/// Immutable options for one run; `action` and `force` drive every merge decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub action: Action,

    /// Package name as given, possibly with an `@version` suffix
    pub pkg: String,

    /// Target bundle override
    pub bundle: Option<String>,

    /// Replace entries that are already configured
    pub force: bool,

    /// Suppress status output
    pub quiet: bool,
}

impl PipelineOptions {
    pub fn new(action: Action, pkg: impl Into<String>) -> Self {
        Self {
            action,
            pkg: pkg.into(),
            bundle: None,
            force: false,
            quiet: false,
        }
    }

    pub fn install(pkg: impl Into<String>) -> Self {
        Self::new(Action::Install, pkg)
    }

    pub fn uninstall(pkg: impl Into<String>) -> Self {
        Self::new(Action::Uninstall, pkg)
    }

    #[must_use]
    pub fn with_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = Some(bundle.into());
        self
    }

    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}
