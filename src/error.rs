use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the terminal front-end. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("terminal too small: {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("cannot open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
