//! Error types for the host handshake.
//!
//! The round engine itself cannot fail; guesses that do not apply are
//! ignored rather than reported.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while establishing a session with the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
    /// The host SDK did not become ready.
    #[error("host SDK not ready: {0}")]
    NotReady(String),
    /// The player did not authorize the activity.
    #[error("authorization failed: {0}")]
    Authorize(String),
    /// The authorization code could not be exchanged.
    #[error("token exchange failed: {0}")]
    Exchange(String),
    /// The token exchange response could not be understood.
    #[error("malformed token response: {0}")]
    MalformedResponse(String),
    /// The host rejected the access token.
    #[error("authentication failed: {0}")]
    Authenticate(String),
}

/// A handshake step name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown handshake step: {0}")]
pub struct UnknownStep(pub String);
