//! Pipeline errors: patches, tasks, scripts, hooks and cancellation

use super::ImportError;

/// Creates a patch failure carrying every per-operation message
pub fn patch_failed<I, S>(errors: I) -> ImportError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ImportError::PatchFailed {
        errors: errors.into_iter().map(Into::into).collect(),
    }
}

/// Creates a task not found error
pub fn task_not_found<I, S>(task: impl Into<String>, searched: I) -> ImportError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ImportError::TaskNotFound {
        task: task.into(),
        searched: searched.into_iter().map(Into::into).collect(),
    }
}

/// Creates a script failure
pub fn script_failed(command: impl Into<String>, reason: impl Into<String>) -> ImportError {
    ImportError::ScriptFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates a hook failure
pub fn hook_failed(
    step: impl Into<String>,
    command: impl Into<String>,
    reason: impl Into<String>,
) -> ImportError {
    ImportError::HookFailed {
        step: step.into(),
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates the cancellation error for the step that requested it
pub fn cancelled(step: impl Into<String>) -> ImportError {
    ImportError::Cancelled { step: step.into() }
}
