use std::process::ExitCode;

use clap::Parser;
use libriscv_site::cli::{Cli, is_broken_pipe, run};
use tracing::{debug, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries rendered HTML.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("riscv-site v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream closed the pipe (e.g. `render | head`); not a failure.
        Err(e) if is_broken_pipe(&e) => {
            debug!("stdout closed early: {e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[riscv-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
