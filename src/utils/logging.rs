//! File-backed logger setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! log output goes to ~/.flappy/flappy.log instead of stderr. `RUST_LOG`
//! still controls the level; the default is `info`.

use crate::core::constants::LOG_FILE;
use crate::utils::persistence;
use std::fs::OpenOptions;
use std::io;

/// Install the global logger. Safe to call more than once; later calls are no-ops.
pub fn init() -> io::Result<()> {
    let path = persistence::data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    Ok(())
}
