//! Contributions: pluggable implementations of pipeline steps
//!
//! A contribution implements any subset of the steps. The engine asks
//! [`Contribution::provides`] before each call, so a missing step is simply
//! skipped for that contribution.

use std::fmt;

use crate::engine::context::{ImportContext, Registration};
use crate::engine::step::{Step, StepResult};
use crate::error::Result;

pub trait Contribution {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Capture shared state before any step runs
    ///
    /// May extend or replace the engine's step order.
    fn register(&mut self, _registration: &mut Registration<'_>) -> Result<()> {
        Ok(())
    }

    /// Whether this contribution has an implementation for `step`
    fn provides(&self, step: &Step) -> bool;

    /// Run `step`; only called when [`Contribution::provides`] is true
    fn run(&mut self, step: &Step, context: &mut ImportContext) -> Result<StepResult>;
}

type StepFn = Box<dyn FnMut(&mut ImportContext) -> Result<StepResult>>;

/// A contribution assembled from named function slots
///
/// ```ignore
/// let custom = FnContribution::new("materialize")
///     .on(Step::RegisterBundles, |ctx| {
///         ctx.manifest.bundles_mut().retain(|b| b.name != "legacy.js");
///         Ok(StepResult::Ok)
///     });
/// ```
pub struct FnContribution {
    name: String,
    slots: Vec<(Step, StepFn)>,
}

impl FnContribution {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
        }
    }

    /// Fill the slot for `step`, replacing any previous function
    #[must_use]
    pub fn on<F>(mut self, step: Step, f: F) -> Self
    where
        F: FnMut(&mut ImportContext) -> Result<StepResult> + 'static,
    {
        self.slots.retain(|(existing, _)| *existing != step);
        self.slots.push((step, Box::new(f)));
        self
    }
}

impl fmt::Debug for FnContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnContribution")
            .field("name", &self.name)
            .field(
                "slots",
                &self.slots.iter().map(|(s, _)| s.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Contribution for FnContribution {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self, step: &Step) -> bool {
        self.slots.iter().any(|(slot, _)| slot == step)
    }

    fn run(&mut self, step: &Step, context: &mut ImportContext) -> Result<StepResult> {
        match self.slots.iter_mut().find(|(slot, _)| slot == step) {
            Some((_, f)) => f(context),
            None => Ok(StepResult::Ok),
        }
    }
}
