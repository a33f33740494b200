//! Entry point: parse flags, install telemetry, run the interactive shell.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use payroll_desk::config::Settings;
use payroll_desk::error::PayrollResult;
use payroll_desk::shell::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "payroll-desk",
    about = "Menu-driven payroll record keeper with rule-based promotions",
    version
)]
struct Cli {
    /// Path to a YAML settings file; compiled-in defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> PayrollResult<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    init_tracing(&settings.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(settings, stdin.lock(), stdout.lock());
    shell.run()
}

/// Honors `RUST_LOG` when set, otherwise the configured level. Events go to
/// stderr so they never interleave with the menu on stdout.
fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}
