//! Game and session configuration options.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::SessionError;

/// Configuration options for a higher-or-lower game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo::GameOptions;
///
/// let options = GameOptions::default().with_distinct_draws(false);
/// assert!(!options.distinct_draws);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the card drawn for a guess must differ in rank from the
    /// current card. When disabled, ties can happen and count as correct.
    pub distinct_draws: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            distinct_draws: true,
        }
    }
}

impl GameOptions {
    /// Sets whether guesses always draw a card of a different rank.
    #[must_use]
    pub const fn with_distinct_draws(mut self, distinct_draws: bool) -> Self {
        self.distinct_draws = distinct_draws;
        self
    }
}

/// Scope requested when none are configured.
pub const DEFAULT_SCOPE: &str = "identify";

/// Configuration for the host handshake.
///
/// ```
/// use hilo::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_client_id("1234")
///     .with_token_endpoint("/api/token");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// OAuth client id of the activity. Required.
    pub client_id: Option<String>,
    /// Endpoint the authorization code is posted to.
    pub token_endpoint: String,
    /// OAuth scopes requested during authorization.
    pub scopes: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            token_endpoint: String::from("/api/token"),
            scopes: alloc::vec![String::from(DEFAULT_SCOPE)],
        }
    }
}

impl SessionConfig {
    /// Sets the OAuth client id.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the token exchange endpoint.
    #[must_use]
    pub fn with_token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = endpoint.into();
        self
    }

    /// Replaces the requested scopes.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Checks that everything the handshake needs is present.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingConfig`] when the client id is missing
    /// or blank, or the token endpoint is empty.
    pub fn validate(&self) -> Result<&str, SessionError> {
        let client_id = self
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(SessionError::MissingConfig("client id"))?;

        if self.token_endpoint.trim().is_empty() {
            return Err(SessionError::MissingConfig("token endpoint"));
        }

        Ok(client_id)
    }
}
