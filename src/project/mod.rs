//! Reading and persisting the project manifest
//!
//! The pipeline only talks to the manifest file through [`ProjectReader`]
//! and [`ProjectWriter`]; [`JsonProjectStore`] is the filesystem-backed
//! implementation used by the CLI.

mod store;

pub use store::JsonProjectStore;

use std::path::PathBuf;

use crate::config::ProjectManifest;
use crate::error::Result;

/// Loads the manifest from wherever it is stored
pub trait ProjectReader {
    fn read(&self) -> Result<ProjectManifest>;
}

/// Persists the manifest
///
/// Callers must call [`ProjectWriter::backup`] before [`ProjectWriter::write`].
pub trait ProjectWriter {
    /// Copy the current manifest aside; returns the backup location
    fn backup(&self) -> Result<PathBuf>;

    /// Overwrite the stored manifest
    fn write(&self, manifest: &ProjectManifest) -> Result<()>;
}
