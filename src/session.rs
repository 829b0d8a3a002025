//! Host session and identity handshake.
//!
//! The host SDK is reached through [`ActivityHost`]. A [`Session`] runs the
//! handshake once (SDK ready, OAuth authorize, code exchange, authenticate)
//! and publishes its progress as a [`Connection`]. Failures never escape:
//! they are logged and turned into [`ConnectionStatus::Error`]. The game
//! does not depend on any of this.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::{String, ToString};
use core::future::Future;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, UnknownStep};
use crate::options::SessionConfig;
use crate::sync::{CancelFlag, Mutex};

/// Connection status shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionStatus {
    /// The handshake has not started.
    #[default]
    Pending,
    /// The handshake is in progress.
    Connecting,
    /// The player is signed in.
    Connected,
    /// Not running inside the host; no sign-in is attempted.
    Standalone,
    /// The handshake failed.
    Error,
}

impl ConnectionStatus {
    /// Returns the status as a lowercase word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Standalone => "standalone",
            Self::Error => "error",
        }
    }
}

/// The signed-in player's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Host user id.
    pub id: String,
    /// Account username.
    pub username: String,
    /// Display name chosen by the user, if any.
    #[serde(default)]
    pub global_name: Option<String>,
    /// Avatar hash, if the user has uploaded one.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Base URL avatar images are served from.
pub const AVATAR_CDN: &str = "https://cdn.discordapp.com";

impl Profile {
    /// Returns the name to show: the global name when set, else the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.global_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    /// Returns the avatar image URL, or `None` when the user has no avatar.
    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        let hash = self.avatar.as_deref().filter(|hash| !hash.is_empty())?;
        Some(format!("{AVATAR_CDN}/avatars/{}/{hash}.png", self.id))
    }
}

/// Connection status with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// The status.
    pub status: ConnectionStatus,
    /// Message describing the status.
    pub message: String,
    /// The profile, present once connected.
    pub profile: Option<Profile>,
}

impl Default for Connection {
    fn default() -> Self {
        Self::pending()
    }
}

impl Connection {
    /// The handshake has not started.
    #[must_use]
    pub fn pending() -> Self {
        Self::without_profile(ConnectionStatus::Pending, "Waiting to connect")
    }

    /// The handshake is in progress.
    #[must_use]
    pub fn connecting() -> Self {
        Self::without_profile(ConnectionStatus::Connecting, "Connecting to host…")
    }

    /// Running outside the host.
    #[must_use]
    pub fn standalone() -> Self {
        Self::without_profile(
            ConnectionStatus::Standalone,
            "Playing outside the host; sign-in unavailable",
        )
    }

    /// Signed in as `profile`.
    #[must_use]
    pub fn connected(profile: Profile) -> Self {
        Self {
            status: ConnectionStatus::Connected,
            message: format!("Signed in as {}", profile.display_name()),
            profile: Some(profile),
        }
    }

    /// The handshake failed with `error`.
    #[must_use]
    pub fn failed(error: &SessionError) -> Self {
        Self {
            status: ConnectionStatus::Error,
            message: error.to_string(),
            profile: None,
        }
    }

    fn without_profile(status: ConnectionStatus, message: &str) -> Self {
        Self {
            status,
            message: message.to_owned(),
            profile: None,
        }
    }
}

/// The host platform's embedded-app SDK.
pub trait ActivityHost {
    /// Returns whether the activity runs inside the host.
    fn is_embedded(&self) -> bool;

    /// Waits until the SDK is ready.
    fn ready(&self) -> impl Future<Output = Result<(), SessionError>>;

    /// Asks the player to authorize the activity and returns the
    /// authorization code.
    fn authorize(
        &self,
        client_id: &str,
        scopes: &[String],
    ) -> impl Future<Output = Result<String, SessionError>>;

    /// Posts a JSON body and returns the raw response body.
    fn post_json(&self, url: &str, body: &str)
    -> impl Future<Output = Result<String, SessionError>>;

    /// Authenticates with an access token and returns the player's profile.
    fn authenticate(&self, access_token: &str)
    -> impl Future<Output = Result<Profile, SessionError>>;
}

/// A handshake step reported by a host that drives the SDK itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandshakeStep {
    /// Waiting for the SDK.
    Ready,
    /// OAuth authorization.
    Authorize,
    /// Authorization code exchange.
    Exchange,
    /// Access token authentication.
    Authenticate,
}

impl HandshakeStep {
    /// Builds the error for this step failing with `message`.
    #[must_use]
    pub fn error(self, message: impl Into<String>) -> SessionError {
        let message = message.into();
        match self {
            Self::Ready => SessionError::NotReady(message),
            Self::Authorize => SessionError::Authorize(message),
            Self::Exchange => SessionError::Exchange(message),
            Self::Authenticate => SessionError::Authenticate(message),
        }
    }
}

impl FromStr for HandshakeStep {
    type Err = UnknownStep;

    fn from_str(step: &str) -> Result<Self, Self::Err> {
        match step {
            "ready" => Ok(Self::Ready),
            "authorize" => Ok(Self::Authorize),
            "exchange" => Ok(Self::Exchange),
            "authenticate" => Ok(Self::Authenticate),
            other => Err(UnknownStep(other.to_owned())),
        }
    }
}

/// Body posted to the token endpoint.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    /// The authorization code.
    pub code: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Builds the token exchange request body.
///
/// # Errors
///
/// Returns [`SessionError::Exchange`] if the body cannot be serialized.
pub fn token_request_body(code: &str) -> Result<String, SessionError> {
    serde_json::to_string(&TokenRequest { code })
        .map_err(|err| SessionError::Exchange(err.to_string()))
}

/// Extracts the access token from a token exchange response.
///
/// # Errors
///
/// Returns [`SessionError::MalformedResponse`] if the body is not JSON or has
/// no non-empty `access_token`.
pub fn parse_token_response(body: &str) -> Result<String, SessionError> {
    let response: TokenResponse = serde_json::from_str(body)
        .map_err(|err| SessionError::MalformedResponse(err.to_string()))?;

    response
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| SessionError::MalformedResponse("missing access_token".to_owned()))
}

/// A one-shot host session.
///
/// Once [`Session::teardown`] has been called, every later status update is
/// discarded, including results of a handshake that is still in flight.
pub struct Session {
    connection: Mutex<Connection>,
    cancel: CancelFlag,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a pending session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connection: Mutex::new(Connection::pending()),
            cancel: CancelFlag::new(),
        }
    }

    /// Returns a copy of the current connection.
    pub fn connection(&self) -> Connection {
        self.connection.lock().clone()
    }

    /// Returns the current status.
    pub fn status(&self) -> ConnectionStatus {
        self.connection.lock().status
    }

    /// Marks the handshake as started.
    ///
    /// Returns `false` if the session was torn down.
    pub fn begin(&self) -> bool {
        self.apply(Connection::connecting())
    }

    /// Marks the session as running outside the host.
    pub fn mark_standalone(&self) -> bool {
        self.apply(Connection::standalone())
    }

    /// Marks the session as signed in.
    pub fn mark_connected(&self, profile: Profile) -> bool {
        let connection = Connection::connected(profile);
        let applied = self.apply(connection.clone());
        if applied {
            tracing::info!(message = connection.message.as_str(), "signed in");
        }
        applied
    }

    /// Records a handshake failure.
    pub fn mark_failed(&self, error: &SessionError) -> bool {
        let applied = self.apply(Connection::failed(error));
        if applied {
            tracing::warn!(%error, "handshake failed");
        }
        applied
    }

    /// Settles the handshake with the profile or the error that ended it.
    pub fn finish(&self, result: Result<Profile, SessionError>) -> bool {
        match result {
            Ok(profile) => self.mark_connected(profile),
            Err(err) => self.mark_failed(&err),
        }
    }

    /// Validates `config` and marks the handshake as started.
    ///
    /// Returns the client id to authorize with, or `None` once the session
    /// has been torn down.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingConfig`] (also recorded as the error
    /// status) when the configuration is incomplete.
    pub fn start_handshake<'c>(
        &self,
        config: &'c SessionConfig,
    ) -> Result<Option<&'c str>, SessionError> {
        let client_id = config.validate().inspect_err(|err| {
            self.mark_failed(err);
        })?;
        Ok(self.begin().then_some(client_id))
    }

    /// Stops the session from accepting further updates.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Returns whether [`Session::teardown`] has been called.
    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn apply(&self, connection: Connection) -> bool {
        if self.cancel.is_cancelled() {
            tracing::debug!(
                status = connection.status.as_str(),
                "session torn down, update discarded"
            );
            return false;
        }
        *self.connection.lock() = connection;
        true
    }

    /// Runs the handshake and returns the resulting status.
    ///
    /// The configuration is validated first, so a missing client id is an
    /// error even outside the host. Outside the host the session then becomes
    /// standalone. No step is retried.
    pub async fn connect<H>(&self, host: &H, config: &SessionConfig) -> ConnectionStatus
    where
        H: ActivityHost + ?Sized,
    {
        if let Err(err) = config.validate() {
            self.mark_failed(&err);
            return self.status();
        }

        if !host.is_embedded() {
            tracing::info!("not embedded in host, running standalone");
            self.mark_standalone();
            return self.status();
        }

        let Ok(Some(client_id)) = self.start_handshake(config) else {
            return self.status();
        };

        match self.handshake(host, config, client_id).await {
            Ok(Some(profile)) => {
                self.finish(Ok(profile));
            }
            Ok(None) => tracing::debug!("handshake abandoned after teardown"),
            Err(err) => {
                self.finish(Err(err));
            }
        }

        self.status()
    }

    async fn handshake<H>(
        &self,
        host: &H,
        config: &SessionConfig,
        client_id: &str,
    ) -> Result<Option<Profile>, SessionError>
    where
        H: ActivityHost + ?Sized,
    {
        host.ready().await?;
        if self.is_torn_down() {
            return Ok(None);
        }

        let code = host.authorize(client_id, &config.scopes).await?;
        if self.is_torn_down() {
            return Ok(None);
        }

        let body = token_request_body(&code)?;
        let response = host.post_json(&config.token_endpoint, &body).await?;
        if self.is_torn_down() {
            return Ok(None);
        }

        let access_token = parse_token_response(&response)?;
        let profile = host.authenticate(&access_token).await?;
        if self.is_torn_down() {
            return Ok(None);
        }

        Ok(Some(profile))
    }
}
