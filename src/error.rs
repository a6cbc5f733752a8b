//! Error taxonomy for override loading and merging.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// An input file is missing or cannot be opened for reading.
    #[error("{path} does not exist or is not readable")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read or write failed mid-merge. The buffer-then-replace write means
    /// the target keeps its prior content when this surfaces.
    #[error("I/O failure on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    /// Classify a read-side failure: missing/forbidden paths report as
    /// `NotFound`, everything else as `Io`.
    pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                MergeError::NotFound { path: path.to_path_buf(), source }
            }
            _ => MergeError::Io { path: path.to_path_buf(), source },
        }
    }

    pub(crate) fn from_write(path: &Path, source: io::Error) -> Self {
        MergeError::Io { path: path.to_path_buf(), source }
    }
}
