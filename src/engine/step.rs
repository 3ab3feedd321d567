//! Pipeline steps and their outcomes

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One named unit of pipeline work
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    ApplyPatches,
    RegisterDependencies,
    RegisterBundles,
    SaveProject,
    InstallTasks,
    ExecuteScripts,
    /// Step contributed by an importer, e.g. from an import hooks file
    Custom(String),
}

/// Canonical step order
pub const DEFAULT_STEPS: [Step; 6] = [
    Step::ApplyPatches,
    Step::RegisterDependencies,
    Step::RegisterBundles,
    Step::SaveProject,
    Step::InstallTasks,
    Step::ExecuteScripts,
];

impl Step {
    pub fn as_str(&self) -> &str {
        match self {
            Step::ApplyPatches => "applyPatches",
            Step::RegisterDependencies => "registerDependencies",
            Step::RegisterBundles => "registerBundles",
            Step::SaveProject => "saveProject",
            Step::InstallTasks => "installTasks",
            Step::ExecuteScripts => "executeScripts",
            Step::Custom(name) => name,
        }
    }

    /// The canonical order as an owned list
    pub fn defaults() -> Vec<Step> {
        DEFAULT_STEPS.to_vec()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let step = DEFAULT_STEPS
            .iter()
            .find(|step| step.as_str() == s)
            .cloned()
            .unwrap_or_else(|| Step::Custom(s.to_string()));
        Ok(step)
    }
}

impl From<&str> for Step {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(step) => step,
            Err(never) => match never {},
        }
    }
}

/// Outcome signalled by a step
///
/// Only [`StepResult::Cancelled`] stops the pipeline. `Error` is a soft
/// signal: it is logged and the run continues. Hard failures are returned
/// as `Err(ImportError)` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepResult {
    #[default]
    Ok,
    Error,
    Cancelled,
}

/// Insert a step at `position` (clamped to the end), or append it
pub(crate) fn insert_step(steps: &mut Vec<Step>, step: Step, position: Option<usize>) {
    match position {
        Some(index) => steps.insert(index.min(steps.len()), step),
        None => steps.push(step),
    }
}

/// Replace the order wholesale; an empty override is ignored
pub(crate) fn replace_steps(steps: &mut Vec<Step>, override_steps: Vec<Step>) {
    if !override_steps.is_empty() {
        *steps = override_steps;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_custom_steps() {
        assert_eq!(Step::from("saveProject"), Step::SaveProject);
        assert_eq!(
            Step::from("prepareAssets"),
            Step::Custom("prepareAssets".to_string())
        );
        assert_eq!(Step::Custom("x".to_string()).to_string(), "x");
    }

    #[test]
    fn test_default_order() {
        let names: Vec<String> = Step::defaults().iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec![
                "applyPatches",
                "registerDependencies",
                "registerBundles",
                "saveProject",
                "installTasks",
                "executeScripts"
            ]
        );
    }

    #[test]
    fn test_insert_step_clamps_position() {
        let mut steps = vec![Step::ApplyPatches, Step::SaveProject];
        insert_step(&mut steps, Step::from("a"), Some(1));
        insert_step(&mut steps, Step::from("b"), Some(99));
        insert_step(&mut steps, Step::from("c"), None);
        insert_step(&mut steps, Step::from("d"), Some(0));
        let names: Vec<&str> = steps.iter().map(Step::as_str).collect();
        assert_eq!(names, vec!["d", "applyPatches", "a", "saveProject", "b", "c"]);
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let mut steps = Step::defaults();
        replace_steps(&mut steps, Vec::new());
        assert_eq!(steps, Step::defaults());

        replace_steps(&mut steps, vec![Step::SaveProject]);
        assert_eq!(steps, vec![Step::SaveProject]);
    }
}
