//! Error types for loading operation descriptors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the descriptor loading boundary.
///
/// Generation itself never fails; only reading and decoding descriptors can.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DescriptorError {
    /// The descriptor file could not be read.
    #[error("failed to read descriptors from {}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The input is not a JSON array of valid operation descriptors.
    #[error("invalid operation descriptor JSON")]
    InvalidJson(#[source] serde_json::Error),
}
