//! Error types for dispatch operations.
//!
//! This module defines [`DispatchError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Flag-parse failures get distinct variants so the dispatcher can report
//!   them with the offending flag name
//! - Command behaviors return `DispatchError` too; arbitrary program errors
//!   flow through unchanged via `DispatchError::Other`
//! - The dispatcher never wraps or inspects a behavior's error

use thiserror::Error;

/// Core error type for dispatch and flag parsing.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A flag appeared on the command line that was never registered.
    #[error("flag provided but not defined: -{name}")]
    UnknownFlag { name: String },

    /// A value-taking flag was the last token on the command line.
    #[error("flag needs an argument: -{name}")]
    MissingValue { name: String },

    /// A boolean flag was given a value that does not parse as a bool.
    #[error("invalid boolean value {value:?} for -{name}")]
    InvalidBoolValue { name: String, value: String },

    /// A token started with `-` but is not a well-formed flag.
    #[error("bad flag syntax: {token}")]
    BadFlagSyntax { token: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
