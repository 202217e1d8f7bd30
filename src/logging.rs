use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log lines go for the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// The terminal belongs to the TUI: write to the configured file, or
    /// drop logs when no file is configured.
    FileOnly,
}

pub fn init(config: &LoggingConfig, target: LogTarget) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| anyhow::anyhow!("invalid log filter `{}`: {}", config.filter, e))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (target, config.file.as_deref()) {
        (LogTarget::Stderr, _) => builder.with_writer(std::io::stderr).try_init(),
        (LogTarget::FileOnly, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| anyhow::anyhow!("failed to open log file `{}`: {}", path, e))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (LogTarget::FileOnly, None) => builder.with_writer(std::io::sink).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}
