//! Configuration data handled by bundlepac
//!
//! This module contains data structures for:
//! - the project manifest (e.g. `aurelia_project/aurelia.json`) and its bundles
//! - import definitions shipped with or registered for a package
//! - pipeline options for a single install/uninstall run
//! - `bundlepac.yaml` - tool settings

pub mod bundle;
pub mod definition;
pub mod dependency;
pub mod manifest;
pub mod options;
pub mod settings;

// Re-export commonly used types
pub use bundle::BundleSpec;
pub use definition::ImportDefinition;
pub use dependency::DependencyEntry;
pub use manifest::{BuildConfig, ProjectManifest, TranspilerConfig};
pub use options::{Action, PipelineOptions};
pub use settings::Settings;
