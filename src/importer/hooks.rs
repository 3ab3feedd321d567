//! Declarative hooks a package ships in `install/import-hooks.yaml`
//!
//! ```yaml
//! steps:
//!   - name: prepareAssets
//!     position: 3
//! run:
//!   prepareAssets: ["gulp prepare-assets"]
//!   registerBundles: ["echo bundles done"]
//! ```
//!
//! A hook command that fails cancels the whole import.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{Contribution, ImportContext, Registration, Step, StepResult};
use crate::error::{self, Result};
use crate::scripts::ScriptRunner;
use crate::ui::{Reporter, Tag};

/// Parsed hooks file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookFile {
    /// Custom steps inserted into the pipeline at registration
    #[serde(default)]
    pub steps: Vec<HookStep>,

    /// Commands per step name
    #[serde(default)]
    pub run: BTreeMap<String, Vec<String>>,
}

/// A custom step and where it goes in the step order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookStep {
    pub name: String,

    /// Insert position; appended when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl HookFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Runs hook commands for the steps listed in a [`HookFile`]
pub struct HookImporter {
    name: String,
    hooks: HookFile,
    runner: Box<dyn ScriptRunner>,
    reporter: Reporter,
}

impl HookImporter {
    pub fn new(name: impl Into<String>, hooks: HookFile, runner: Box<dyn ScriptRunner>) -> Self {
        Self {
            name: name.into(),
            hooks,
            runner,
            reporter: Reporter::default(),
        }
    }
}

impl Contribution for HookImporter {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&mut self, registration: &mut Registration<'_>) -> Result<()> {
        self.reporter = Reporter::new(registration.options().quiet);

        for hook_step in &self.hooks.steps {
            let step = Step::from(hook_step.name.as_str());
            if registration.steps().contains(&step) {
                debug!(hook = %self.name, step = %step, "step already scheduled");
                continue;
            }
            registration.add_step(step, hook_step.position);
        }
        Ok(())
    }

    fn provides(&self, step: &Step) -> bool {
        self.hooks.run.contains_key(step.as_str())
    }

    fn run(&mut self, step: &Step, _context: &mut ImportContext) -> Result<StepResult> {
        let Some(commands) = self.hooks.run.get(step.as_str()) else {
            return Ok(StepResult::Ok);
        };

        for command in commands {
            self.reporter
                .line(Tag::Exe, format!("Executing {} hook: {command}", self.name));
            if let Err(e) = self.runner.run(command) {
                let failure = error::hook_failed(step.as_str(), command, e.to_string());
                self.reporter.error(failure.to_string());
                return Ok(StepResult::Cancelled);
            }
        }
        Ok(StepResult::Ok)
    }
}
