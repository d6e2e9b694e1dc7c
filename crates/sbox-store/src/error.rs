//! Codec and storage errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while decoding a serialized table set.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Fewer bytes than a complete table set.
    #[error("truncated input: needed {needed} bytes, got {got}")]
    TruncatedInput {
        /// Required length.
        needed: usize,
        /// Length supplied.
        got: usize,
    },

    /// The bytes could not be parsed.
    ///
    /// `decode` checks the length first, so with the fixed-array layout this is
    /// not expected to occur.
    #[error("malformed input: {0}")]
    Malformed(#[from] bincode::Error),
}

/// Failure while persisting or loading tables.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The output directory could not be created.
    #[error("failed to create directory {}", .path.display())]
    DirectoryCreateFailure {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The table file could not be opened.
    #[error("could not open {}", .path.display())]
    FileOpenFailure {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing did not complete.
    #[error("could not write {}", .path.display())]
    FileWriteFailure {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading did not complete.
    #[error("could not read {}", .path.display())]
    FileReadFailure {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The tables could not be serialized.
    #[error("could not encode tables")]
    Encode(#[source] bincode::Error),

    /// The file contents are not a valid table set.
    #[error("could not decode {}", .path.display())]
    Decode {
        /// File path.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: DecodeError,
    },
}
