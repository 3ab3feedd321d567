//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - clean_backups: Clean-backups command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod clean_backups;
pub mod completions;
pub mod install;
pub mod uninstall;

pub use clean_backups::CleanBackupsArgs;
pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use uninstall::UninstallArgs;

use crate::engine::Step;

/// bundlepac - package-driven bundle configuration
///
/// Let an installed package reconfigure the project's bundle manifest.
#[derive(Parser, Debug)]
#[command(
    name = "bundlepac",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Configure project bundles from a package's import definition",
    long_about = "bundlepac reads a package's import definition (dependencies, bundles, patches, \
                  custom tasks and scripts) and applies it to the project's bundle manifest \
                  when the package is installed or removed.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundlepac install materialize-css          \x1b[90m# Configure into vendor-bundle.js\x1b[0m\n   \
                  bundlepac i jquery@3 -b app-bundle.js      \x1b[90m# Target a specific bundle\x1b[0m\n   \
                  bundlepac install jquery --force           \x1b[90m# Replace existing entries\x1b[0m\n   \
                  bundlepac uninstall materialize-css        \x1b[90m# Remove configuration\x1b[0m\n   \
                  bundlepac clean-backups                    \x1b[90m# Delete manifest backups\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "BUNDLEPAC_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose diagnostics
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the project for a package
    #[command(visible_alias = "i")]
    Install(InstallArgs),

    /// Remove a package's configuration from the project
    #[command(visible_alias = "u")]
    Uninstall(UninstallArgs),

    /// Delete timestamped manifest backups
    CleanBackups(CleanBackupsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Parse a `--steps` item; unknown names become custom steps
pub(crate) fn parse_step(value: &str) -> Result<Step, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("step name cannot be empty".to_string());
    }
    Ok(Step::from(value))
}
