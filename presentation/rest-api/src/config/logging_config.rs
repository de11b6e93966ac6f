use std::env;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use logger::AUDIT_TARGET;
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

const DEFAULT_AUDIT_FILE: &str = "activity.log";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Append-only file receiving the audit trail, `None` when disabled
    pub audit_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Environment variables:
    /// - AUDIT_LOG_FILE: audit trail file (default: "activity.log", empty disables it)
    /// - RUST_LOG: console filter (default: "info")
    pub fn from_env() -> Self {
        Self::parse(env::var("AUDIT_LOG_FILE").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        let audit_file = match raw.map(str::trim) {
            None => Some(PathBuf::from(DEFAULT_AUDIT_FILE)),
            Some("") => None,
            Some(path) => Some(PathBuf::from(path)),
        };

        Self { audit_file }
    }
}

/// Installs the console layer and, when configured, the audit file layer.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let audit = match &config.audit_file {
        Some(path) => Some(audit_layer(open_audit_file(path)?)),
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(env_filter))
        .with(audit)
        .try_init()?;

    if let Some(path) = &config.audit_file {
        tracing::info!("Audit trail written to {}", path.display());
    }
    Ok(())
}

fn open_audit_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// `timestamp message` lines, audit target only, regardless of RUST_LOG.
fn audit_layer<S>(file: File) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .with_filter(Targets::new().with_target(AUDIT_TARGET, LevelFilter::INFO))
}
