use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to read price history from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid price '{value}' at {path}:{line}")]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },
}
