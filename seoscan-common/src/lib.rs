//! Common types and utilities shared across seoscan crates.
//!
//! This crate defines the shared error type and the observability helpers
//! used by the scanner library and the `seoscan` binary. It stays
//! dependency-light so every crate in the workspace can depend on it.
//!
//! # Overview
//!
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`SeoscanError`] and [`Result`]: Shared error handling
//! - [`DEFAULT_INPUT_PATH`] and [`BUILD_STEP`]: the fixed build-output contract
//!
//! # Examples
//!
//! ```rust
//! use seoscan_common::SeoscanError;
//!
//! let err = SeoscanError::MissingInput { path: "dist/index.html".into() };
//! assert_eq!(err.to_string(), "input not found: dist/index.html");
//! ```
use std::path::PathBuf;

pub mod observability;

/// Build output inspected by the `seoscan` binary.
pub const DEFAULT_INPUT_PATH: &str = "dist/index.html";

/// Build step that produces [`DEFAULT_INPUT_PATH`].
pub const BUILD_STEP: &str = "npm run build";

/// Error types used across the seoscan workspace.
#[derive(thiserror::Error, Debug)]
pub enum SeoscanError {
    /// The document to scan does not exist.
    #[error("input not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// The document exists but could not be read as UTF-8 text.
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SeoscanError {
    /// Classify an I/O failure raised while reading `path`.
    ///
    /// `NotFound` is the only kind treated as a missing input; permission,
    /// decoding and every other failure stays a read error.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::MissingInput { path },
            _ => Self::Read { path, source },
        }
    }
}

/// Convenient alias for results that use [`SeoscanError`].
pub type Result<T> = std::result::Result<T, SeoscanError>;
