//! Olympia CLI
//!
//! Main entry point for the olympia command-line tool.
//! Lists topic catalogs, turns topic selections into prompts, and inspects
//! free-text questions.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BuildCommand, ClassifyCommand, ParseCommand, SelectCommand, TopicsCommand};
use olympia_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Olympia - topic prompts for linear-algebra olympiad practice
#[derive(Parser, Debug)]
#[command(name = "olympia")]
#[command(about = "Topic prompts for linear-algebra olympiad practice", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "OLYMPIA_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "OLYMPIA_CONFIG")]
    config: Option<PathBuf>,

    /// Exam year used in exam prompts
    #[arg(long, global = true, env = "OLYMPIA_YEAR")]
    year: Option<u16>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (NO_COLOR accepts any non-falsey value)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List exam and problem topics
    Topics(TopicsCommand),

    /// Select a topic by id and emit its prompt
    Select(SelectCommand),

    /// Build a prompt from an arbitrary display name
    Build(BuildCommand),

    /// Extract retrieval filters from a question
    Parse(ParseCommand),

    /// Check whether a question is linear algebra / olympiad style
    Classify(ClassifyCommand),
}

fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    let config = AppConfig::load_with(cli.workspace.clone(), cli.config.clone())?;

    let config = config.with_overrides(
        cli.workspace,
        cli.config,
        cli.year,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Olympia CLI starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Exam year: {}", config.prompts.year);

    let command_name = match &cli.command {
        Commands::Topics(_) => "topics",
        Commands::Select(_) => "select",
        Commands::Build(_) => "build",
        Commands::Parse(_) => "parse",
        Commands::Classify(_) => "classify",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Topics(cmd) => cmd.execute(&config),
        Commands::Select(cmd) => cmd.execute(&config),
        Commands::Build(cmd) => cmd.execute(&config),
        Commands::Parse(cmd) => cmd.execute(),
        Commands::Classify(cmd) => cmd.execute(),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
