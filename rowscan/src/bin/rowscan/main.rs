mod config;
mod output;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

use config::GenerateConfig;
use rowscan_build::{ScanGenerator, resolve_inputs};

#[derive(Parser, Debug)]
#[command(name = "rowscan")]
#[command(version)]
#[command(
    about = "Generate row scanner methods for Rust structs",
    long_about = r#"Generate row scanner methods for Rust structs.

For every struct named in --types, rowscan emits a method that passes mutable
references to the struct's named fields, in declaration order, to a
rowscan::Scanner.

Inputs:
  (none)        scan the current directory
  DIR           scan the .rs files directly inside DIR
  FILE...       scan the given files
"#
)]
struct Cli {
    /// Comma-separated list of struct names
    #[arg(short, long, env = "ROWSCAN_TYPES", value_delimiter = ',')]
    types: Vec<String>,

    /// Output file (appended to); defaults to stdout
    #[arg(short, long, env = "ROWSCAN_OUTPUT")]
    output: Option<PathBuf>,

    /// Path of the runtime crate used by generated code
    #[arg(long, env = "ROWSCAN_RUNTIME", default_value = "rowscan")]
    runtime: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Package directory or source files
    inputs: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let Some(config) = GenerateConfig::from_cli(cli) else {
        print_usage();
        std::process::exit(1);
    };

    if let Err(err) = execute(config) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn print_usage() {
    let mut stderr = io::stderr();
    let _ = writeln!(stderr, "{} the --types option is required", "error:".red().bold());
    let _ = writeln!(stderr);
    let _ = Cli::command().write_help(&mut stderr);
}

fn execute(config: GenerateConfig) -> Result<()> {
    let package = resolve_inputs(&config.inputs).context("Failed to resolve inputs")?;
    log::debug!("package `{}` with {} files", package.name, package.files.len());

    let mut out = config.output.open()?;

    let file_count = package.files.len();
    let code = ScanGenerator::new()
        .targets(config.targets)
        .runtime_path(config.runtime_path)
        .package(package)
        .generate()?;

    out.write_all(code.as_bytes()).context("Failed to write generated code")?;
    out.flush().context("Failed to flush output")?;

    log::info!("generated scanners from {file_count} files");
    Ok(())
}
