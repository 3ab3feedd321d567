//! Command implementations for the bundlepac CLI

pub mod clean_backups;
pub mod completions;
pub mod configure;
pub mod install;
pub mod uninstall;
