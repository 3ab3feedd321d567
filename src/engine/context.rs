//! Shared state threaded through every step invocation

use std::path::PathBuf;

use crate::config::{ImportDefinition, PipelineOptions, ProjectManifest, Settings};
use crate::engine::step::{Step, insert_step, replace_steps};

/// The project model and the definition, mutated in place by contributions
///
/// Steps run strictly one after another, so a plain `&mut` is the only
/// access discipline needed.
#[derive(Debug, Clone)]
pub struct ImportContext {
    pub manifest: ProjectManifest,
    pub definition: ImportDefinition,
}

impl ImportContext {
    pub fn new(manifest: ProjectManifest, definition: ImportDefinition) -> Self {
        Self {
            manifest,
            definition,
        }
    }
}

/// Where the project lives and how it is laid out
#[derive(Debug, Clone, Default)]
pub struct ProjectInfo {
    pub project_root: PathBuf,
    pub settings: Settings,
}

impl ProjectInfo {
    pub fn new(project_root: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            project_root: project_root.into(),
            settings,
        }
    }

    /// Resolve a settings path against the project root
    pub fn path(&self, relative: &std::path::Path) -> PathBuf {
        self.settings.resolve(&self.project_root, relative)
    }
}

/// What a contribution sees while registering, before any step runs
pub struct Registration<'a> {
    pub(crate) steps: &'a mut Vec<Step>,
    pub(crate) options: &'a PipelineOptions,
    pub(crate) project: &'a ProjectInfo,
    pub(crate) context: &'a ImportContext,
}

impl Registration<'_> {
    pub fn options(&self) -> &PipelineOptions {
        self.options
    }

    pub fn project(&self) -> &ProjectInfo {
        self.project
    }

    pub fn manifest(&self) -> &ProjectManifest {
        &self.context.manifest
    }

    pub fn definition(&self) -> &ImportDefinition {
        &self.context.definition
    }

    /// Current step order
    pub fn steps(&self) -> &[Step] {
        &self.steps[..]
    }

    /// Insert a step at `position`, or append it
    pub fn add_step(&mut self, step: Step, position: Option<usize>) -> &mut Self {
        insert_step(self.steps, step, position);
        self
    }

    /// Replace the step order; an empty list is ignored
    pub fn set_steps(&mut self, steps: Vec<Step>) -> &mut Self {
        replace_steps(self.steps, steps);
        self
    }
}
