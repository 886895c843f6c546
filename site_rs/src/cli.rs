//! Command-line interface for `riscv-site`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use homepage_leptos::SiteContext;
use tracing::debug;

use crate::build::{build_site, render_page};
use crate::config::SiteConfig;

#[derive(Parser, Debug)]
#[command(name = "riscv-site")]
#[command(about = "Build the libriscv documentation homepage")]
#[command(version)]
pub struct Cli {
    /// Path to the site configuration file
    #[arg(short, long, global = true, default_value = "site.toml")]
    pub config: PathBuf,

    /// Override `base_url` from the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write index.html and the assets it references into an output directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = "build")]
        out: PathBuf,
    },
    /// Print the rendered page to stdout
    Render,
    /// Validate configuration and catalog without writing anything
    Check,
    /// List the feature catalog in display order
    Catalog {
        /// Emit JSON instead of a numbered list
        #[arg(long)]
        json: bool,
    },
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    debug!("loading {}", cli.config.display());
    let config = SiteConfig::load(&cli.config)?.with_base_url(cli.base_url);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Build { out } => {
            let report = build_site(&config, &out)?;
            writeln!(
                stdout,
                "Wrote {} ({} bytes, {} features, {} assets copied, {} missing)",
                report.index.display(),
                report.bytes,
                report.features,
                report.copied,
                report.missing
            )?;
        }
        Command::Render => {
            let html = render_page(&config)?;
            writeln!(stdout, "{html}")?;
        }
        Command::Check => {
            render_page(&config)?;
            writeln!(
                stdout,
                "OK: \"{}\" with {} features",
                config.title().unwrap_or_default(),
                config.catalog().len()
            )?;
        }
        Command::Catalog { json } => {
            let catalog = config.catalog();
            if json {
                let body = serde_json::to_string_pretty(&catalog)
                    .context("failed to serialize catalog")?;
                writeln!(stdout, "{body}")?;
            } else {
                for (idx, record) in catalog.iter().enumerate() {
                    writeln!(stdout, "{:>2}. {}", idx + 1, record.title())?;
                }
            }
        }
    }

    Ok(())
}

/// True when `err` comes from writing to a stdout whose reader has gone
/// away, e.g. `riscv-site render | head`.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::BrokenPipe)
    })
}
