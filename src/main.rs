//! Month Sorter - files a flat folder into per-month subfolders
//!
//! Moves every top-level file of a directory into a `<month>-<year>` folder
//! chosen from its `YYYYMMDD_id.ext` name or its creation time.

use anyhow::Result;
use clap::Parser;
use month_sorter::{Cli, Processor, ProcessingStatus};
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let _guard = setup_logging(&cli)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Month Sorter starting");

    let config = cli.to_config();
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }

    let processor = Processor::new(config)?;

    match processor.run() {
        Ok(summary) => {
            if cli.verbose {
                for result in &summary.results {
                    let dest = result
                        .destination
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    match result.status {
                        ProcessingStatus::Relocated => {
                            info!(source = %result.source.display(), %dest, "Relocated")
                        }
                        ProcessingStatus::DryRun => {
                            info!(source = %result.source.display(), %dest, "Planned")
                        }
                        ProcessingStatus::Failed => info!(
                            source = %result.source.display(),
                            error = result.error.as_deref().unwrap_or("unknown error"),
                            "Failed"
                        ),
                    }
                }
            }

            println!(
                "Total de arquivos movidos: {} arquivos movidos",
                summary.moved
            );
            if processor.config().dry_run {
                println!(
                    "Simulação: {} arquivos seriam movidos",
                    summary.planned
                );
            }
            println!(
                "Tempo passado:             {} milliseconds",
                summary.elapsed_millis()
            );

            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Cannot list target directory");
            println!("erro ao abrir a pasta! erro:  {}", e);
            drop(_guard);
            std::process::exit(1);
        }
    }
}

/// Setup logging to stderr
fn setup_logging(cli: &Cli) -> Result<WorkerGuard> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(fmt::layer().json().with_writer(non_blocking))
            .try_init()?;
    } else {
        subscriber
            .with(fmt::layer().with_writer(non_blocking))
            .try_init()?;
    }

    Ok(guard)
}
