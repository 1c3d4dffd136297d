//! Error types for the degrees driver.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read the friendship list.
///
/// Malformed lines are not errors; they are skipped and counted.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying reader failed mid-file.
    #[error("cannot read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}
