//! Import pipeline engine
//!
//! The engine holds no configuration logic of its own. It owns the step
//! order, the shared [`ImportContext`] and a list of [`Contribution`]s, and
//! runs them step-major, contribution-minor:
//!
//! ```text
//! steps:         [applyPatches, registerDependencies]
//! contributions: [BaseImporter, Hooks]
//!
//! applyPatches:          BaseImporter.applyPatches, Hooks (not provided, skipped)
//! registerDependencies:  BaseImporter.registerDependencies, Hooks.registerDependencies
//! ```
//!
//! Every call completes before the next one starts. A step returning
//! [`StepResult::Cancelled`] stops the run with [`crate::error::ImportError::Cancelled`];
//! a step returning `Err` stops it with that error.

pub mod context;
pub mod contribution;
pub mod step;


pub use context::{ImportContext, ProjectInfo, Registration};
pub use contribution::{Contribution, FnContribution};
pub use step::{DEFAULT_STEPS, Step, StepResult};

use tracing::{debug, warn};

use crate::config::{ImportDefinition, PipelineOptions, ProjectManifest};
use crate::error::{Result, cancelled};
use step::{insert_step, replace_steps};

pub struct ImportEngine {
    context: ImportContext,
    steps: Vec<Step>,
    contributions: Vec<Box<dyn Contribution>>,
    project: ProjectInfo,
}

impl ImportEngine {
    /// Create an engine over a project manifest
    ///
    /// A missing definition is treated as an empty one.
    pub fn new(
        manifest: ProjectManifest,
        definition: Option<ImportDefinition>,
        contributions: Vec<Box<dyn Contribution>>,
    ) -> Self {
        Self {
            context: ImportContext::new(manifest, definition.unwrap_or_default()),
            steps: Step::defaults(),
            contributions,
            project: ProjectInfo::default(),
        }
    }

    /// Set the project location and settings handed to contributions
    #[must_use]
    pub fn with_project(mut self, project: ProjectInfo) -> Self {
        self.project = project;
        self
    }

    /// Append a contribution; `None` is ignored
    pub fn push_contribution(&mut self, contribution: Option<Box<dyn Contribution>>) -> &mut Self {
        if let Some(contribution) = contribution {
            self.contributions.push(contribution);
        }
        self
    }

    /// Replace the step order wholesale; an empty list is ignored
    pub fn set_steps(&mut self, steps: Vec<Step>) -> &mut Self {
        replace_steps(&mut self.steps, steps);
        self
    }

    /// Insert a step at `position`, or append it when no position is given
    pub fn add_step(&mut self, step: Step, position: Option<usize>) -> &mut Self {
        insert_step(&mut self.steps, step, position);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn context(&self) -> &ImportContext {
        &self.context
    }

    pub fn manifest(&self) -> &ProjectManifest {
        &self.context.manifest
    }

    /// Take the (possibly modified) manifest back
    pub fn into_manifest(self) -> ProjectManifest {
        self.context.manifest
    }

    /// Run the pipeline
    ///
    /// `active_steps` selects a subset of the step order; the order itself is
    /// never changed. An empty or non-matching selection runs every step.
    pub fn execute(
        &mut self,
        options: &PipelineOptions,
        active_steps: Option<&[Step]>,
    ) -> Result<()> {
        self.register_contributions(options)?;

        let steps = self.resolve_steps(active_steps);
        debug!(
            steps = ?steps.iter().map(Step::as_str).collect::<Vec<_>>(),
            contributions = self.contributions.len(),
            "executing import pipeline"
        );

        for step in &steps {
            for contribution in &mut self.contributions {
                if !contribution.provides(step) {
                    debug!(step = %step, contribution = contribution.name(), "step not provided, skipping");
                    continue;
                }

                debug!(step = %step, contribution = contribution.name(), "running step");
                match contribution.run(step, &mut self.context)? {
                    StepResult::Ok => {}
                    StepResult::Error => {
                        warn!(step = %step, contribution = contribution.name(), "step reported an error, continuing");
                    }
                    StepResult::Cancelled => {
                        debug!(step = %step, contribution = contribution.name(), "pipeline cancelled");
                        return Err(cancelled(step.to_string()));
                    }
                }
            }
        }

        Ok(())
    }

    /// Let every contribution capture state before any step runs
    fn register_contributions(&mut self, options: &PipelineOptions) -> Result<()> {
        for contribution in &mut self.contributions {
            debug!(contribution = contribution.name(), "registering contribution");
            let mut registration = Registration {
                steps: &mut self.steps,
                options,
                project: &self.project,
                context: &self.context,
            };
            contribution.register(&mut registration)?;
        }
        Ok(())
    }

    fn resolve_steps(&self, active_steps: Option<&[Step]>) -> Vec<Step> {
        let selected: Vec<Step> = match active_steps {
            Some(active) if !active.is_empty() => self
                .steps
                .iter()
                .filter(|step| active.contains(step))
                .cloned()
                .collect(),
            _ => Vec::new(),
        };

        if selected.is_empty() {
            if let Some(active) = active_steps.filter(|active| !active.is_empty()) {
                warn!(
                    requested = ?active.iter().map(Step::as_str).collect::<Vec<_>>(),
                    "no requested step matches the pipeline, running every step"
                );
            }
            self.steps.clone()
        } else {
            selected
        }
    }
}
