use std::path::PathBuf;

use crate::cli::CleanBackupsArgs;
use crate::commands::configure::{project_info, project_root};
use crate::error::Result;
use crate::project::JsonProjectStore;
use crate::ui::{Reporter, Tag};

pub fn run(project: Option<PathBuf>, args: CleanBackupsArgs) -> Result<()> {
    let root = project_root(project)?;
    let project = project_info(&root)?;
    let store = JsonProjectStore::new(project.path(&project.settings.project_file));
    let reporter = Reporter::new(args.quiet);

    let removed = store.clean_backups()?;
    if removed.is_empty() {
        reporter.info("No backups found.");
        return Ok(());
    }

    for path in &removed {
        reporter.line(Tag::Del, path.display().to_string());
    }
    reporter.ok(format!("{} backup(s) removed.", removed.len()));
    Ok(())
}
