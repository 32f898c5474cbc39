mod check;
mod completions;
mod languages;
mod reverse;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use languages::LanguagesCommand;
use reverse::ReverseCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for revgen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "revgen")]
#[command(version)]
#[command(about = "Reverse a database schema into source code through templates")]
pub(crate) struct Cli {
    /// Log filter directives, e.g. `debug` or `revgen_codegen=trace`
    /// (defaults to $REVGEN_LOG, then `warn`)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Reverse(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Languages(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source files from a schema snapshot and a template directory
    Reverse(ReverseCommand),

    /// Validate a template directory without generating code
    Check(CheckCommand),

    /// List supported languages and their template helpers
    Languages(LanguagesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reverse() {
        let cli = Cli::try_parse_from([
            "revgen", "reverse", "-s", "schema.json", "templates", "out", "^t_", "--lang", "rust",
            "--log", "debug",
        ])
        .unwrap();
        assert_eq!(cli.log.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Reverse(_)));
    }

    #[test]
    fn test_reverse_requires_template_dir() {
        assert!(Cli::try_parse_from(["revgen", "reverse", "schema.json"]).is_err());
    }
}
