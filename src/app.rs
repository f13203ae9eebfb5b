// src/app.rs
use std::io::Write;

use anyhow::{Context, Result, anyhow};
use log::debug;
use ngstore_infra::SnapshotWriter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::Config;
use crate::presentation;

pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN }
}

/// Installs the stderr subscriber; `log` records from the library crates are forwarded to it.
pub fn init_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

pub fn run(config: &Config) -> Result<()> {
    let dir = crate::load_directory(&config.path, &config.query)
        .with_context(|| format!("cannot list '{}'", config.path.display()))?;

    let rendered = match config.entry {
        Some(index) => {
            let path = dir
                .entry_path(index)
                .with_context(|| format!("no entry {index} in '{}'", dir.path()))?;
            format!("{path}\n")
        }
        None => presentation::render(&dir, config.format).context("failed to render listing")?,
    };

    match &config.output {
        Some(target) => {
            SnapshotWriter::write_atomic(target, rendered.as_bytes())?;
            debug!("listing written to '{}'", target.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes()).context("failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_debug() {
        assert_eq!(log_level(true), LevelFilter::DEBUG);
        assert_eq!(log_level(false), LevelFilter::WARN);
    }
}
