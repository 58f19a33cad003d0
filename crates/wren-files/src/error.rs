use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Navigation failures, always surfaced as values so the browser stays usable
#[derive(Debug, Error)]
pub enum NavError {
    /// Target does not exist or is not a directory
    #[error("not a directory: {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// The back or forward stack was empty
    #[error("no history in that direction")]
    NoHistory,

    /// The directory could not be read
    #[error("failed to list {}: {source}", .path.display())]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
