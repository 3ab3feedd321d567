//! Discovery of optional contributions shipped with a package
//!
//! Failing to find or load a contribution is never fatal: discovery yields
//! `None` and the pipeline runs with the baseline importer only.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::base_name;
use crate::engine::Contribution;
use crate::importer::{HookFile, HookImporter};
use crate::scripts::ShellScriptRunner;

/// Hooks file looked up in a package's `install/` directory
pub const HOOKS_FILE: &str = "import-hooks.yaml";

/// Finds an extra contribution for a package
pub trait ContributionDiscovery {
    fn discover(&self, pkg: &str) -> Option<Box<dyn Contribution>>;
}

/// Loads `<modules_dir>/<pkg>/install/import-hooks.yaml` as a [`HookImporter`]
#[derive(Debug, Clone)]
pub struct HookDiscovery {
    modules_dir: PathBuf,
    working_dir: PathBuf,
}

impl HookDiscovery {
    /// `working_dir` is where hook commands run, usually the project root
    pub fn new(modules_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            modules_dir: modules_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    fn hooks_path(&self, pkg: &str) -> PathBuf {
        self.modules_dir
            .join(base_name(pkg))
            .join("install")
            .join(HOOKS_FILE)
    }

    /// Parse the hooks file for a package, if there is a usable one
    pub fn load(&self, pkg: &str) -> Option<HookFile> {
        let path = self.hooks_path(pkg);
        if !path.is_file() {
            debug!(pkg, path = %path.display(), "no import hooks");
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(pkg, path = %path.display(), "failed to read import hooks: {e}");
                return None;
            }
        };

        match HookFile::from_yaml(&content) {
            Ok(hooks) => Some(hooks),
            Err(e) => {
                warn!(pkg, path = %path.display(), "ignoring invalid import hooks: {e}");
                None
            }
        }
    }
}

impl ContributionDiscovery for HookDiscovery {
    fn discover(&self, pkg: &str) -> Option<Box<dyn Contribution>> {
        let hooks = self.load(pkg)?;
        let runner = ShellScriptRunner::new(&self.working_dir);
        Some(Box::new(HookImporter::new(
            base_name(pkg),
            hooks,
            Box::new(runner),
        )))
    }
}
