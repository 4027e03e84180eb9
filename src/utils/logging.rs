//! Diagnostic logging to ~/.dino-run/dino-run.log.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log records go to a file instead of stderr. Level defaults to `warn`
//! and follows `RUST_LOG` when set.

use super::persistence::data_path;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

pub const LOG_FILE: &str = "dino-run.log";

/// Install the global logger. Returns the log file path.
pub fn init_file_logger() -> io::Result<PathBuf> {
    let path = data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
