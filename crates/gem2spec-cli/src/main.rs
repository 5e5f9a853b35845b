mod config;
mod translate;
mod wrap;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Gem2SpecConfig;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "gem2spec")]
#[command(version, about = "Convert gem dependency requirements into RPM spec clauses")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: nearest gem2spec.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate requirement declarations into Requires lines
    Translate(translate::TranslateArgs),

    /// Word-wrap a description read from stdin
    Wrap(wrap::WrapArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => Gem2SpecConfig::load_file(path)?,
        None => Gem2SpecConfig::load_from_cwd()?.unwrap_or_default(),
    };

    match args.command {
        Commands::Translate(translate_args) => translate::execute(translate_args, &config),
        Commands::Wrap(wrap_args) => wrap::execute(wrap_args, &config),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
