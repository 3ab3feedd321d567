//! Install command implementation

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::commands::configure;
use crate::config::PipelineOptions;
use crate::error::Result;

pub fn run(project: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let mut options = PipelineOptions::install(args.pkg)
        .with_force(args.force)
        .with_quiet(args.quiet);
    if let Some(bundle) = args.bundle {
        options = options.with_bundle(bundle);
    }

    configure::run(project, &options, &args.steps)
}
