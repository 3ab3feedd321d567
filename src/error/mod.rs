//! Error types and handling for bundlepac
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Project manifest and settings errors
//! - [`fs`]: File system errors
//! - [`pipeline`]: Patch, task, script, hook and cancellation errors

pub mod config;
pub mod fs;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use config::{
    bundles_missing, invalid as config_invalid, not_found as config_not_found,
    parse_failed as config_parse_failed, read_failed as config_read_failed,
};
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
pub use pipeline::{cancelled, hook_failed, patch_failed, script_failed, task_not_found};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for import pipeline operations
#[derive(Error, Diagnostic, Debug)]
pub enum ImportError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(bundlepac::config::not_found),
        help("Run bundlepac from the project root or pass --project <dir>")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(bundlepac::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(bundlepac::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(bundlepac::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Project manifest: bundles section is missing")]
    #[diagnostic(
        code(bundlepac::config::bundles_missing),
        help("Declare at least one bundle under build.bundles")
    )]
    BundlesMissing,

    #[error("Default bundle could not be found either")]
    #[diagnostic(
        code(bundlepac::config::default_bundle_missing),
        help("Check the build.bundles section of the project manifest")
    )]
    DefaultBundleMissing,

    // Pipeline errors
    #[error("An error occurred while applying custom settings: {}", errors.join(", "))]
    #[diagnostic(
        code(bundlepac::pipeline::patch_failed),
        help("The project manifest was left untouched")
    )]
    PatchFailed { errors: Vec<String> },

    #[error("Custom task '{task}' could not be found (searched: {})", searched.join(", "))]
    #[diagnostic(code(bundlepac::pipeline::task_not_found))]
    TaskNotFound { task: String, searched: Vec<String> },

    #[error("Script failed: {command}: {reason}")]
    #[diagnostic(code(bundlepac::pipeline::script_failed))]
    ScriptFailed { command: String, reason: String },

    #[error("Import hook failed at {step}: {command}: {reason}")]
    #[diagnostic(code(bundlepac::pipeline::hook_failed))]
    HookFailed {
        step: String,
        command: String,
        reason: String,
    },

    #[error("Cancelled at {step}")]
    #[diagnostic(
        code(bundlepac::pipeline::cancelled),
        help("A contribution stopped the import intentionally; nothing after this step ran")
    )]
    Cancelled { step: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(bundlepac::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(bundlepac::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(bundlepac::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundlepac::fs::io_error))]
    IoError { message: String },
}

impl ImportError {
    /// Whether this error is an intentional stop rather than a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ImportError::Cancelled { .. })
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ImportError {
    fn from(err: serde_yaml::Error) -> Self {
        ImportError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ImportError>;
