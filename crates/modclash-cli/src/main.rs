//! modclash CLI - report Civilization V mods that ship the same .lua files
//!
//! Scans a mods directory (defaults to the current directory) and prints
//! scripts overwritten across mods.

mod config;

use clap::{Parser, ValueEnum};
use modclash_scanner::output::{json::to_json, text::to_text};
use modclash_scanner::{ScanError, Scanner};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modclash")]
#[command(about = "modclash - detect .lua conflicts between Civilization V mods")]
#[command(version)]
struct Cli {
    /// Mods directory to scan
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// JSON config file (defaults to <config dir>/modclash/config.json if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Baseline mod name fragment; repeat to replace the configured list
    #[arg(short, long = "baseline", value_name = "NAME")]
    baseline: Vec<String>,

    /// Script file extension
    #[arg(long, value_name = "EXT")]
    script_ext: Option<String>,

    /// Manifest file extension
    #[arg(long, value_name = "EXT")]
    manifest_ext: Option<String>,

    /// Use the first manifest when a mod directory holds several
    #[arg(long)]
    first_manifest_wins: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        let code = e.downcast_ref::<ScanError>().map_or(1, ScanError::exit_code);
        std::process::exit(code);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("info"),
        (false, _) => Some("debug"),
    };

    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let scan_config = config::resolve(&config::Overrides {
        config_file: cli.config.clone(),
        baseline: cli.baseline.clone(),
        script_ext: cli.script_ext.clone(),
        manifest_ext: cli.manifest_ext.clone(),
        first_manifest_wins: cli.first_manifest_wins,
    })?;

    let inventory = Scanner::new().with_config(scan_config).scan(&cli.dir)?;

    match cli.format {
        OutputFormat::Text => print!("{}", to_text(&inventory)),
        OutputFormat::Json => println!("{}", to_json(&inventory)?),
    }

    Ok(())
}
