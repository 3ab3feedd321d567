//! Shared runner for install and uninstall
//!
//! The process:
//! 1. Locate the project root and load `bundlepac.yaml`
//! 2. Read the project manifest
//! 3. Resolve the package's import definition (none is fine)
//! 4. Discover an optional hook contribution shipped with the package
//! 5. Execute the pipeline with the baseline importer first

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{PipelineOptions, Settings};
use crate::engine::{Contribution, ImportEngine, ProjectInfo, Step};
use crate::error::Result;
use crate::importer::BaseImporter;
use crate::project::{JsonProjectStore, ProjectReader};
use crate::resolver::{ContributionDiscovery, DefinitionResolver, HookDiscovery, RegistryResolver};
use crate::ui::Reporter;

/// Project root from `--project`, else the current directory
pub fn project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

/// Load settings and describe the project
pub fn project_info(root: &Path) -> Result<ProjectInfo> {
    let settings = Settings::load(root)?;
    Ok(ProjectInfo::new(root, settings))
}

/// Run the import pipeline for one package
pub fn run(project: Option<PathBuf>, options: &PipelineOptions, steps: &[Step]) -> Result<()> {
    let root = project_root(project)?;
    let project = project_info(&root)?;
    let settings = &project.settings;
    let reporter = Reporter::new(options.quiet);

    let store = JsonProjectStore::new(project.path(&settings.project_file));
    let manifest = store.read()?;

    let resolver = RegistryResolver::new(
        project.path(&settings.registry_dir),
        project.path(&settings.modules_dir),
    );
    let definition = resolver.resolve(&options.pkg)?;
    if definition.is_none() {
        reporter.info(format!(
            "No import definition found for {}. Nothing to configure.",
            options.pkg
        ));
    }

    let discovery = HookDiscovery::new(project.path(&settings.modules_dir), &root);
    let hooks = discovery.discover(&options.pkg);
    debug!(
        pkg = %options.pkg,
        action = %options.action,
        hooks = hooks.is_some(),
        "starting import pipeline"
    );

    let base: Box<dyn Contribution> = Box::new(BaseImporter::for_project(&project));
    let mut engine = ImportEngine::new(manifest, definition, vec![base]).with_project(project);
    engine.push_contribution(hooks);

    let active = (!steps.is_empty()).then_some(steps);
    engine.execute(options, active)
}
