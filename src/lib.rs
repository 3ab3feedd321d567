//! bundlepac - package-driven bundle configuration
//!
//! Applies a package's import definition (dependencies, bundles, manifest
//! patches, custom tasks and scripts) to a project's bundle manifest through
//! an ordered pipeline of pluggable contributions.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod importer;
pub mod merge;
pub mod patch;
pub mod project;
pub mod resolver;
pub mod scripts;
pub mod tasks;
pub mod ui;

pub use config::{Action, ImportDefinition, PipelineOptions, ProjectManifest};
pub use engine::{Contribution, FnContribution, ImportEngine, Step, StepResult};
pub use error::{ImportError, Result};
