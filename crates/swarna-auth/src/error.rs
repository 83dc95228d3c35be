//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Phone number is not a valid 10-digit mobile number.
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    /// Entered code does not match the challenge.
    #[error("verification code does not match")]
    CodeMismatch,

    /// Challenge has expired.
    #[error("verification code expired")]
    CodeExpired,
}
