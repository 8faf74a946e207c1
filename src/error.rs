use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermwinError {
    #[error("Unknown key name: {0:?}")]
    UnknownKey(String),

    #[error("Failed to read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
