use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use oas_compat::report;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Detect breaking changes between two OpenAPI documents.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Baseline document (YAML or JSON)
    old: PathBuf,

    /// Candidate document (YAML or JSON)
    new: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit with status 1 when breaking changes are found
    #[arg(long)]
    fail_on_breaking: bool,

    /// Print only the summary line (text format)
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let diff = oas_compat::compare_files(&cli.old, &cli.new)?;

    let output = match cli.format {
        Format::Json => report::render_json(&diff)?,
        Format::Text if cli.compact => report::render_compact(&diff),
        Format::Text => report::render_text(&diff),
    };
    println!("{output}");

    Ok(diff.has_breaking())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) if cli.fail_on_breaking => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
