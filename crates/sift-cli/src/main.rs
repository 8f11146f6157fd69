#![forbid(unsafe_code)]
//! sift: dependency-aware task prioritization.

mod cmd;
mod output;

use std::env;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "sift: dependency-aware task prioritization",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Rank a task list with a scoring strategy",
        after_help = "EXAMPLES:\n    # Balanced ranking of a task file\n    sift analyze tasks.json\n\n    # Quickest wins first, from stdin\n    cat tasks.json | sift analyze - --strategy fastest_wins\n\n    # Machine-readable output\n    sift analyze tasks.json --json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Top three tasks to work on today",
        after_help = "EXAMPLES:\n    # Today's picks\n    sift suggest tasks.json\n\n    # With custom weights\n    sift suggest tasks.json --config sift.toml"
    )]
    Suggest(cmd::suggest::SuggestArgs),

    #[command(about = "Generate shell completions")]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "sift=debug,info"
        } else {
            "sift=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, output, cli.quiet),
        Commands::Suggest(ref args) => cmd::suggest::run_suggest(args, output, cli.quiet),
        Commands::Completions(args) => {
            cmd::completions::run_completions(args.shell, &mut Cli::command())
        }
    }
}
