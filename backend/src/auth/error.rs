//! Authentication error taxonomy

use thiserror::Error;

/// Failure of a credential check or token verification
#[derive(Error, Debug)]
pub enum AuthError {
    /// No account exists for the submitted username
    #[error("User not found")]
    NotFound,

    /// Wrong password, or an invalid, expired or malformed token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Hashing, signing or user store failure
    #[error("Authentication backend failure")]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AuthError::Unauthorized(msg.into())
    }
}
