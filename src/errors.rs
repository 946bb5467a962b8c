/*!
 * Error types for the pdfglot application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling a model capability service
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while reading a PDF document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The source file is missing or unreadable
    #[error("Failed to open document: {0}")]
    Open(String),

    /// A page's text could not be extracted
    #[error("Failed to extract text from page {page}: {message}")]
    Extract {
        /// One-based page number
        page: u32,
        /// Underlying extraction error
        message: String
    },
}

/// Errors that can occur during the summarize-translate pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error from a capability service
    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),

    /// Error from document processing
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// One or more chunks failed during dispatch
    #[error("Failed to process {failed} of {total} chunks: {details}")]
    ChunksFailed {
        /// Number of failed chunks
        failed: usize,
        /// Total number of dispatched chunks
        total: usize,
        /// Joined per-chunk error messages
        details: String
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a capability service
    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),

    /// Error from document processing
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from the pipeline
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
