//! bundlepac - package-driven bundle configuration

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bundlepac::cli::{Cli, Commands};
use bundlepac::commands;
use bundlepac::ui::{Reporter, Tag};

/// Diagnostics go to stderr; `BUNDLEPAC_LOG` overrides the default filter
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "bundlepac=debug"
    } else {
        "bundlepac=warn"
    };
    let filter = EnvFilter::try_from_env("BUNDLEPAC_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    // Keep paths in error messages on one line
    let _ = miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().wrap_lines(false).build())
    }));

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.project, args),
        Commands::Uninstall(args) => commands::uninstall::run(cli.project, args),
        Commands::CleanBackups(args) => commands::clean_backups::run(cli.project, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_cancelled() => {
            eprintln!("{}", Reporter::format(Tag::Info, &format!("{e}. Import stopped.")));
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}
