//! Locating import definitions and extra contributions for a package
//!
//! This module handles:
//! - Package name helpers (`pkg@1.2.3` → `pkg`)
//! - Resolving a package's [`ImportDefinition`] from the registry or the package itself
//! - Discovering optional contributions shipped with a package

pub mod discovery;

pub use discovery::{ContributionDiscovery, HOOKS_FILE, HookDiscovery};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ImportDefinition;
use crate::error::{ImportError, Result};

/// Definition file a package may ship in its `install/` directory
pub const PACKAGE_DEFINITION_FILE: &str = "import-definition.json";

/// Strip a trailing `@version` from a package name
///
/// A leading `@` marks an npm scope, not a version.
pub fn base_name(pkg: &str) -> &str {
    let scoped = usize::from(pkg.starts_with('@'));
    match pkg[scoped..].find('@') {
        Some(index) => &pkg[..scoped + index],
        None => pkg,
    }
}

/// Whether the package name carries a version suffix
pub fn is_versioned(pkg: &str) -> bool {
    base_name(pkg) != pkg
}

/// Looks up the definition for a package
///
/// `Ok(None)` means no definition exists anywhere; that is not an error.
pub trait DefinitionResolver {
    fn resolve(&self, pkg: &str) -> Result<Option<ImportDefinition>>;
}

/// Resolves definitions from a registry directory and installed packages
///
/// For each candidate name (the exact name, then the base name when the
/// exact name is versioned) the lookup order is:
/// 1. `<registry_dir>/<name>.json`
/// 2. `<modules_dir>/<name>/install/import-definition.json`
#[derive(Debug, Clone)]
pub struct RegistryResolver {
    registry_dir: PathBuf,
    modules_dir: PathBuf,
}

impl RegistryResolver {
    pub fn new(registry_dir: impl Into<PathBuf>, modules_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry_dir: registry_dir.into(),
            modules_dir: modules_dir.into(),
        }
    }

    fn candidates(&self, name: &str) -> [PathBuf; 2] {
        [
            self.registry_dir.join(format!("{name}.json")),
            self.modules_dir
                .join(name)
                .join("install")
                .join(PACKAGE_DEFINITION_FILE),
        ]
    }

    fn load(path: &Path) -> Result<ImportDefinition> {
        let content = fs::read_to_string(path).map_err(|e| ImportError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ImportError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl DefinitionResolver for RegistryResolver {
    fn resolve(&self, pkg: &str) -> Result<Option<ImportDefinition>> {
        let mut names = vec![pkg];
        if is_versioned(pkg) {
            names.push(base_name(pkg));
        }

        for name in names {
            for path in self.candidates(name) {
                if path.is_file() {
                    debug!(pkg, path = %path.display(), "found import definition");
                    return Self::load(&path).map(Some);
                }
            }
        }

        debug!(pkg, "no import definition found");
        Ok(None)
    }
}
