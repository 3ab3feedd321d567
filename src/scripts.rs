//! Script runner for post-install and post-uninstall commands

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, script_failed};

/// Runs one shell command to completion
pub trait ScriptRunner {
    fn run(&self, command: &str) -> Result<()>;
}

/// Runs commands through the platform shell in a working directory
#[derive(Debug, Clone, Default)]
pub struct ShellScriptRunner {
    working_dir: Option<PathBuf>,
}

impl ShellScriptRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(working_dir.into()),
        }
    }

    fn shell(command: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        }
    }
}

impl ScriptRunner for ShellScriptRunner {
    fn run(&self, command: &str) -> Result<()> {
        let mut cmd = Self::shell(command);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        debug!(command, "running script");
        let status = cmd
            .status()
            .map_err(|e| script_failed(command, e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(script_failed(command, status.to_string()))
        }
    }
}
