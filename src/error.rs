//! Error types for nyx-prepare
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Schema compilation errors
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The binary schema file cannot be opened or read
    #[error("Cannot read schema file '{path}': {error}")]
    ReadInput { path: PathBuf, error: String },

    /// The generated header cannot be written
    #[error("Cannot write generated header '{path}': {error}")]
    WriteOutput { path: PathBuf, error: String },
}

/// Remote fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-success HTTP status
    #[error("Cannot download `{filename}`: HTTP {status}")]
    Status { filename: String, status: u16 },

    /// Network-level failure (connect, transfer)
    #[error("Network error downloading '{url}': {error}")]
    Network { url: String, error: String },

    /// Request exceeded the configured timeout
    #[error("Timed out downloading '{url}'")]
    Timeout { url: String },

    /// Response body is not valid UTF-8
    #[error("Cannot decode `{filename}` as UTF-8: {error}")]
    Decode { filename: String, error: String },

    /// Max retries exceeded
    #[error("Download failed after {retries} attempts: {url}")]
    MaxRetriesExceeded { url: String, retries: u32 },
}

impl FetchError {
    /// Whether this failure is worth retrying.
    ///
    /// Server errors, timeouts, and transport failures are transient;
    /// client errors and decode failures are permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status >= 500,
            Self::Network { .. } | Self::Timeout { .. } => true,
            Self::Decode { .. } | Self::MaxRetriesExceeded { .. } => false,
        }
    }
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level preparation error type
#[derive(Error, Debug)]
pub enum PrepareError {
    /// Schema compilation error
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Unknown asset family requested
    #[error("Unknown asset family '{name}'")]
    UnknownFamily { name: String },
}
