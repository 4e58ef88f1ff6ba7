//! CLI Adapter.

mod generate;
mod options;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax).
pub const LOG_ENV: &str = "BLOGWRIGHT_LOG";

#[derive(Parser)]
#[command(name = "blogwright")]
#[command(version)]
#[command(
    about = "Generate blog posts from a topic, word count, style, tone, and audience",
    long_about = None
)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a blog post with the configured model
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// List accepted styles, tones, audiences, and word counts
    #[clap(visible_alias = "o")]
    Options,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::Options => {
            options::run_options();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("blogwright=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_alias_parses() {
        let cli = Cli::try_parse_from(["blogwright", "g", "--topic", "Tea"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["blogwright", "options", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
