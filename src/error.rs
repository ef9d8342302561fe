//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A value object failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record holds no phone equal to the given number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur while executing a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// The command was given the wrong arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl CommandError {
    /// Shorthand for the missing/extra argument case.
    pub fn invalid_arguments(usage: &str) -> Self {
        Self::InvalidArguments(usage.to_string())
    }
}
