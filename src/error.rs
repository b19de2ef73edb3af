//! # Error Types
//!
//! This module defines error types used throughout the workform library.
//!
//! Formatting and text fitting are total and never produce errors; everything
//! here comes from the edges of a render (reading input, loading
//! configuration, emitting the finished document).

use thiserror::Error;

/// Main error type for workform operations
#[derive(Debug, Error)]
pub enum FormError {
    /// Work order or configuration JSON could not be decoded
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is well-formed JSON but semantically unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
