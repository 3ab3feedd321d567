//! Uninstall command implementation
//!
//! Uses the same pipeline as install; the merge policy removes matching
//! entries instead of adding them and patches are not applied.

use std::path::PathBuf;

use crate::cli::UninstallArgs;
use crate::commands::configure;
use crate::config::PipelineOptions;
use crate::error::Result;

pub fn run(project: Option<PathBuf>, args: UninstallArgs) -> Result<()> {
    let mut options = PipelineOptions::uninstall(args.pkg).with_quiet(args.quiet);
    if let Some(bundle) = args.bundle {
        options = options.with_bundle(bundle);
    }

    configure::run(project, &options, &args.steps)
}
