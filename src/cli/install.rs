use clap::Parser;

use crate::engine::Step;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Configure a package:\n    bundlepac install materialize-css\n\n\
                   Configure a specific version's definition:\n    bundlepac install materialize-css@0.98.0\n\n\
                   Target another bundle:\n    bundlepac install jquery --bundle app-bundle.js\n\n\
                   Only register dependencies and save:\n    bundlepac install jquery --steps registerDependencies,saveProject")]
pub struct InstallArgs {
    /// Package name, optionally with an @version suffix
    pub pkg: String,

    /// Bundle to configure (defaults to the configured default bundle)
    #[arg(long, short = 'b', value_name = "NAME")]
    pub bundle: Option<String>,

    /// Replace dependencies and bundles that are already configured
    #[arg(long, short = 'f')]
    pub force: bool,

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
    use super::*;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["bundlepac", "install", "materialize-css"])
            .unwrap_or_else(|e| {
                panic!("Failed to parse CLI arguments: {}", e);
            });
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.pkg, "materialize-css");
                assert_eq!(args.bundle, None);
                assert!(!args.force);
                assert!(args.steps.is_empty());
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_alias_with_options() {
        let cli = Cli::try_parse_from([
            "bundlepac",
            "i",
            "jquery@3.1.0",
            "-b",
            "app-bundle.js",
            "-f",
            "-q",
            "--steps",
            "registerDependencies,saveProject",
        ])
        .unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.pkg, "jquery@3.1.0");
                assert_eq!(args.bundle.as_deref(), Some("app-bundle.js"));
                assert!(args.force);
                assert!(args.quiet);
                assert_eq!(args.steps, vec![Step::RegisterDependencies, Step::SaveProject]);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_requires_pkg() {
        assert!(Cli::try_parse_from(["bundlepac", "install"]).is_err());
    }
}
