//! CLI argument parsing with clap derive

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// halfsl500 - report build information
#[derive(Parser)]
#[command(name = "halfsl500")]
#[command(version = VERSION)]
#[command(about = "halfsl500 command-line tool")]
#[command(long_about = "halfsl500 command-line tool.\n\nRun `halfsl500 version` to print the version, commit and build date of this binary.")]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the version number of halfsl500
    #[command(long_about = "All software has versions. This is halfsl500's")]
    Version {
        /// Ignored
        #[arg(hide = true)]
        args: Vec<String>,
    },
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_is_direct_child_of_root() {
        let cmd = Cli::command();
        let version = cmd
            .get_subcommands()
            .find(|sub| sub.get_name() == "version")
            .expect("version subcommand should be registered");
        assert_eq!(
            version.get_about().map(|s| s.to_string()),
            Some("Print the version number of halfsl500".to_string())
        );
        assert_eq!(
            version.get_long_about().map(|s| s.to_string()),
            Some("All software has versions. This is halfsl500's".to_string())
        );
    }

    #[test]
    fn test_parse_version() {
        let cli = Cli::try_parse_from(["halfsl500", "version"]).unwrap();
        match cli.command {
            Some(Commands::Version { args }) => assert!(args.is_empty()),
            None => panic!("expected version command"),
        }
    }

    #[test]
    fn test_parse_version_accepts_extra_args() {
        let cli = Cli::try_parse_from(["halfsl500", "version", "foo", "bar", "baz"]).unwrap();
        match cli.command {
            Some(Commands::Version { args }) => assert_eq!(args, vec!["foo", "bar", "baz"]),
            None => panic!("expected version command"),
        }
    }

    #[test]
    fn test_global_flags_after_extra_args() {
        let cli = Cli::try_parse_from(["halfsl500", "version", "foo", "--json", "bar"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Version { args }) => assert_eq!(args, vec!["foo", "bar"]),
            None => panic!("expected version command"),
        }

        let cli = Cli::try_parse_from(["halfsl500", "version", "foo", "-q"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["halfsl500", "version", "--json"]).unwrap();
        assert!(cli.json);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["halfsl500"]).unwrap();
        assert!(cli.command.is_none());
    }
}
