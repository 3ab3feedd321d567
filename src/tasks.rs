//! Task file provider: copies custom task sources into the project

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ImportError, Result};

/// Places task files; a missing source is reported as `FileNotFound`
pub trait TaskFileProvider {
    fn copy(&self, source: &Path, dest: &Path) -> Result<()>;
}

/// Plain filesystem copy, creating the destination directory
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTaskFiles;

impl TaskFileProvider for FsTaskFiles {
    fn copy(&self, source: &Path, dest: &Path) -> Result<()> {
        if !source.is_file() {
            return Err(ImportError::FileNotFound {
                path: source.display().to_string(),
            });
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| ImportError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        fs::copy(source, dest).map(|_| ()).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ImportError::FileNotFound {
                path: source.display().to_string(),
            },
            _ => ImportError::FileWriteFailed {
                path: dest.display().to_string(),
                reason: e.to_string(),
            },
        })
    }
}
