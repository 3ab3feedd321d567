//! Baseline importer

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{Action, PipelineOptions, ProjectManifest};
use crate::engine::{Contribution, ImportContext, ProjectInfo, Registration, Step, StepResult};
use crate::error::{self, ImportError, Result};
use crate::merge::{MergeOutcome, merge_entry, resolve_target_bundle};
use crate::patch;
use crate::project::{JsonProjectStore, ProjectWriter};
use crate::resolver::base_name;
use crate::scripts::{ScriptRunner, ShellScriptRunner};
use crate::tasks::{FsTaskFiles, TaskFileProvider};
use crate::ui::{Reporter, Tag};

/// State captured at registration
#[derive(Debug, Clone)]
struct Registered {
    options: PipelineOptions,
    reporter: Reporter,
    bundle_name: String,
    project: ProjectInfo,
}

impl Registered {
    /// File name of the manifest for messages, e.g. `aurelia.json`
    fn manifest_name(&self) -> String {
        let file = &self.project.settings.project_file;
        file.file_name()
            .map_or_else(|| file.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Implements every canonical step against the shared context
pub struct BaseImporter {
    writer: Box<dyn ProjectWriter>,
    task_files: Box<dyn TaskFileProvider>,
    scripts: Box<dyn ScriptRunner>,
    state: Option<Registered>,
}

impl BaseImporter {
    pub fn new(
        writer: Box<dyn ProjectWriter>,
        task_files: Box<dyn TaskFileProvider>,
        scripts: Box<dyn ScriptRunner>,
    ) -> Self {
        Self {
            writer,
            task_files,
            scripts,
            state: None,
        }
    }

    /// Importer backed by the filesystem and the platform shell
    pub fn for_project(project: &ProjectInfo) -> Self {
        let manifest_path = project.path(&project.settings.project_file);
        Self::new(
            Box::new(JsonProjectStore::new(manifest_path)),
            Box::new(FsTaskFiles),
            Box::new(ShellScriptRunner::new(&project.project_root)),
        )
    }

    fn registered(&self) -> Result<&Registered> {
        self.state.as_ref().ok_or_else(|| {
            error::config_invalid("BaseImporter ran a step before it was registered")
        })
    }

    fn apply_patches(&self, context: &mut ImportContext) -> Result<StepResult> {
        let state = self.registered()?;
        if !state.options.action.is_install() || context.definition.patches.is_empty() {
            return Ok(StepResult::Ok);
        }

        let mut document = context.manifest.to_value()?;
        patch::apply(&mut document, &context.definition.patches)?;
        context.manifest = ProjectManifest::from_value(document)?;

        state.reporter.info(format!(
            "Custom project settings have been applied to {}.",
            state.manifest_name()
        ));
        Ok(StepResult::Ok)
    }

    fn register_dependencies(&self, context: &mut ImportContext) -> Result<StepResult> {
        let state = self.registered()?;
        let reporter = &state.reporter;
        let (action, force) = (state.options.action, state.options.force);

        let bundles = context.manifest.bundles_mut();
        let (index, fallback) = resolve_target_bundle(bundles, &state.bundle_name)?;
        if fallback {
            reporter.info(format!(
                "Bundle '{}' could not be found. Looking for default bundles...",
                state.bundle_name
            ));
        }

        let bundle = &mut bundles[index];
        if bundle.dependencies.is_none() && action == Action::Uninstall {
            reporter.info(format!("No dependencies found in {}.", bundle.name));
            return Ok(StepResult::Ok);
        }

        let incoming = &context.definition.dependencies;
        if incoming.is_empty() {
            return Ok(StepResult::Ok);
        }

        reporter.info(format!(
            "Bundle found: {}. Configuring new dependencies in {}...",
            bundle.name,
            state.manifest_name()
        ));

        let existing = bundle.dependencies_mut();
        for dependency in incoming {
            let name = dependency.name().to_string();
            match merge_entry(existing, dependency.clone(), action, force) {
                MergeOutcome::Added => {
                    reporter.line(Tag::New, format!("'{name}' has been configured."));
                }
                MergeOutcome::Replaced => {
                    reporter.line(Tag::Mod, format!("'{name}' has been modified."));
                }
                MergeOutcome::Skipped => {
                    reporter.line(Tag::Skip, format!("'{name}' has already been configured."));
                }
                MergeOutcome::Removed => {
                    reporter.line(Tag::Del, format!("'{name}' has been removed."));
                }
                MergeOutcome::Absent => debug!(dependency = %name, "not configured, nothing to remove"),
            }
        }

        reporter.ok(format!("{} has been configured.", bundle.name));
        Ok(StepResult::Ok)
    }

    fn register_bundles(&self, context: &mut ImportContext) -> Result<StepResult> {
        let state = self.registered()?;
        let reporter = &state.reporter;
        let incoming = &context.definition.bundles;
        if incoming.is_empty() {
            return Ok(StepResult::Ok);
        }

        reporter.info(format!(
            "Additional bundles found. Configuring new bundles in {}...",
            state.manifest_name()
        ));

        let existing = context.manifest.bundles_mut();
        for bundle in incoming {
            let name = bundle.name.clone();
            match merge_entry(existing, bundle.clone(), state.options.action, state.options.force) {
                MergeOutcome::Added => {
                    reporter.line(Tag::New, format!("Bundle '{name}' has been added."));
                }
                MergeOutcome::Replaced => {
                    reporter.line(Tag::Mod, format!("Bundle '{name}' has been modified."));
                }
                MergeOutcome::Skipped => reporter.line(
                    Tag::Skip,
                    format!(
                        "Bundle '{name}' has already been configured, no action taken. \
                         Use --force/-f to override entire bundles."
                    ),
                ),
                MergeOutcome::Removed => {
                    reporter.line(Tag::Del, format!("Bundle '{name}' has been removed."));
                }
                MergeOutcome::Absent => debug!(bundle = %name, "not configured, nothing to remove"),
            }
        }

        Ok(StepResult::Ok)
    }

    fn save_project(&self, context: &mut ImportContext) -> Result<StepResult> {
        let state = self.registered()?;
        let manifest_name = state.manifest_name();

        state
            .reporter
            .info(format!("Saving changes to {manifest_name} file..."));
        let backup = self.writer.backup()?;
        state.reporter.info(format!(
            "Backup of {manifest_name} has been created: {}",
            backup.display()
        ));

        self.writer.write(&context.manifest)?;
        state.reporter.ok(format!(
            "{} has been updated.",
            state.project.settings.project_file.display()
        ));
        Ok(StepResult::Ok)
    }

    /// Directories searched for a task's source, in order
    fn task_search_dirs(state: &Registered) -> [PathBuf; 2] {
        let settings = &state.project.settings;
        [
            state
                .project
                .path(&settings.modules_dir)
                .join(base_name(&state.options.pkg))
                .join("install"),
            state.project.path(&settings.builtin_tasks_dir),
        ]
    }

    fn install_tasks(&self, context: &mut ImportContext) -> Result<StepResult> {
        let state = self.registered()?;
        let reporter = &state.reporter;
        let tasks = &context.definition.tasks;
        if tasks.is_empty() {
            return Ok(StepResult::Ok);
        }

        let settings = &state.project.settings;
        let tasks_dir = state.project.path(&settings.tasks_dir);
        reporter.info(format!(
            "{} custom task(s) found. Copying to {}...",
            tasks.len(),
            settings.tasks_dir.display()
        ));

        let extension = context.manifest.source_extension();
        for task in tasks {
            let dest = tasks_dir.join(format!("{task}{extension}"));
            let source_dir = self.copy_task_source(state, task, &dest)?;

            let metadata = source_dir.join(format!("{task}.json"));
            match self
                .task_files
                .copy(&metadata, &tasks_dir.join(format!("{task}.json")))
            {
                Ok(()) | Err(ImportError::FileNotFound { .. }) => {}
                Err(e) => reporter.error(format!("{}: {e}", metadata.display())),
            }

            reporter.info(format!("Custom task: {task} has been installed."));
        }

        reporter.ok("Custom tasks have been installed successfully.");
        Ok(StepResult::Ok)
    }

    /// Copy the first task source found; returns the directory it came from
    fn copy_task_source(&self, state: &Registered, task: &str, dest: &Path) -> Result<PathBuf> {
        let file_name = format!("{task}{}", state.project.settings.task_source_extension);
        let mut searched = Vec::new();

        for dir in Self::task_search_dirs(state) {
            let source = dir.join(&file_name);
            match self.task_files.copy(&source, dest) {
                Ok(()) => {
                    debug!(task, source = %source.display(), dest = %dest.display(), "task installed");
                    return Ok(dir);
                }
                Err(ImportError::FileNotFound { .. }) => {
                    searched.push(source.display().to_string());
                }
                Err(e) => return Err(e),
            }
        }

        Err(error::task_not_found(task, searched))
    }

    fn execute_scripts(&self, context: &mut ImportContext) -> Result<StepResult> {
        let state = self.registered()?;
        let reporter = &state.reporter;
        let commands = context.definition.scripts_for(state.options.action);

        if !commands.is_empty() {
            reporter.info("Additional scripts found. Executing...");
            for command in commands {
                reporter.line(Tag::Exe, format!("Executing: {command}"));
                if let Err(e) = self.scripts.run(command) {
                    warn!(command, "script failed: {e}");
                    reporter.error(format!("An error occurred during script execution. {e}"));
                    return Ok(StepResult::Error);
                }
            }
            reporter.ok("Additional scripts finished successfully.");
        }

        reporter.ok(format!(
            "{} has been configured successfully.",
            state.options.pkg
        ));
        Ok(StepResult::Ok)
    }
}

impl Contribution for BaseImporter {
    fn name(&self) -> &str {
        "BaseImporter"
    }

    fn register(&mut self, registration: &mut Registration<'_>) -> Result<()> {
        if registration.manifest().bundles().is_empty() {
            return Err(error::bundles_missing());
        }

        let options = registration.options().clone();
        let project = registration.project().clone();
        let bundle_name = options
            .bundle
            .clone()
            .unwrap_or_else(|| project.settings.default_bundle.clone());

        debug!(pkg = %options.pkg, bundle = %bundle_name, "base importer registered");
        self.state = Some(Registered {
            reporter: Reporter::new(options.quiet),
            options,
            bundle_name,
            project,
        });
        Ok(())
    }

    fn provides(&self, step: &Step) -> bool {
        !matches!(step, Step::Custom(_))
    }

    fn run(&mut self, step: &Step, context: &mut ImportContext) -> Result<StepResult> {
        match step {
            Step::ApplyPatches => self.apply_patches(context),
            Step::RegisterDependencies => self.register_dependencies(context),
            Step::RegisterBundles => self.register_bundles(context),
            Step::SaveProject => self.save_project(context),
            Step::InstallTasks => self.install_tasks(context),
            Step::ExecuteScripts => self.execute_scripts(context),
            Step::Custom(_) => Ok(StepResult::Ok),
        }
    }
}
