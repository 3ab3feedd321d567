//! Importers: the contributions that actually configure a project
//!
//! This module provides:
//! - [`BaseImporter`]: the six canonical steps (patches, dependencies,
//!   bundles, saving, tasks, scripts)
//! - [`HookImporter`]: shell commands a package attaches to steps through
//!   its `install/import-hooks.yaml`

pub mod base;
pub mod hooks;


pub use base::BaseImporter;
pub use hooks::{HookFile, HookImporter, HookStep};
