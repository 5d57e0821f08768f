//! # Error Types
//!
//! This module defines error types used throughout the sello library.
//!
//! The pure rendering path (serial formatting, font resolution, layout
//! composition, document rendering) is total and never returns an error;
//! these variants only surface at the boundary: persistence, image
//! ingestion, and record parsing.

use thiserror::Error;

/// Main error type for sello operations
#[derive(Debug, Error)]
pub enum SelloError {
    /// Persistence collaborator rejected the write
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Image ingestion collaborator reported a failure
    #[error("Upload error: {0}")]
    Upload(String),

    /// Stored template record could not be parsed
    #[error("Template record error: {0}")]
    Record(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
