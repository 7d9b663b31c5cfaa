//! Error types for the tensile engine.
//!
//! All crates return `TensileResult<T>` from fallible operations.
//! Coincident spring endpoints are not an error: the spring model
//! resolves them locally to a zero force.

use thiserror::Error;

/// Unified error type for the tensile engine.
#[derive(Debug, Error)]
pub enum TensileError {
    /// Configuration or initial state was rejected at construction time.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Vertex buffer or mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, TensileError>`.
pub type TensileResult<T> = Result<T, TensileError>;
