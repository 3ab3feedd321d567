use clap::Parser;

use crate::engine::Step;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a package's configuration:\n    bundlepac uninstall materialize-css\n\n\
                  Remove it from a specific bundle:\n    bundlepac u jquery --bundle app-bundle.js")]
pub struct UninstallArgs {
    /// Package name, optionally with an @version suffix
    pub pkg: String,

    /// Bundle to remove dependencies from
    #[arg(long, short = 'b', value_name = "NAME")]
    pub bundle: Option<String>,

    /// Suppress status output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Only run these steps (comma separated, canonical order is kept)
    #[arg(long, value_delimiter = ',', value_name = "STEP", value_parser = super::parse_step)]
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_uninstall() {
        let cli = Cli::try_parse_from(["bundlepac", "u", "materialize-css", "-q"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => {
                assert_eq!(args.pkg, "materialize-css");
                assert!(args.quiet);
                assert_eq!(args.bundle, None);
            }
            _ => panic!("Expected Uninstall command"),
        }
    }

    #[test]
    fn test_uninstall_has_no_force_flag() {
        assert!(Cli::try_parse_from(["bundlepac", "uninstall", "jquery", "--force"]).is_err());
    }
}
