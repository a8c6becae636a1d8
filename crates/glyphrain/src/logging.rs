//! File logging. The terminal belongs to the rain, so logs go to disk.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "glyphrain=info,glyphrain_engine=info,glyphrain_config=info";

/// Send `tracing` output to `path`, filtered by `RUST_LOG` when set.
pub fn init(path: &Path) -> color_eyre::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!(err))
}

/// Like [`init`], but a failure only leaves the app without a log file.
/// Returns whether logging is active.
pub fn init_or_warn(path: &Path) -> bool {
    match init(path) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("glyphrain: running without a log file: {err:#}");
            false
        }
    }
}
