use clap::Parser;

/// Arguments for the clean-backups command
#[derive(Parser, Debug)]
pub struct CleanBackupsArgs {
    /// Suppress status output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
