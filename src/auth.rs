//! Challenge-response authentication against the box.
//!
//! The pairing flow has two arms. Without stored credentials the client
//! registers itself and stops: the box wants front-panel approval before the
//! issued token becomes usable, and the operator persists the token by hand.
//! With stored credentials the client checks its authorization track, derives
//! a one-run session password from the challenge, and opens a session.

use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use tracing::{debug, warn};

use crate::config::{AppIdentity, Config};
use crate::credentials::Credentials;
use crate::transport::{Envelope, Transport};
use crate::{Error, Result};

type HmacSha1 = Hmac<Sha1>;

const AUTHORIZE_PATH: &str = "/api/v4/login/authorize/";
const SESSION_PATH: &str = "/api/v4/login/session/";

/// Registration accepted by the box, pending front-panel approval.
///
/// The caller must surface both values to the operator; nothing is persisted
/// automatically.
#[derive(Debug, Clone, Deserialize)]
pub struct PendingRegistration {
    pub track_id: String,
    pub app_token: String,
}

/// Authorization state of a registration track.
///
/// Wire values beyond the known set map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AuthStatus {
    Granted,
    Pending,
    Denied,
    Timeout,
    Unknown,
}

impl From<String> for AuthStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "granted" => AuthStatus::Granted,
            "pending" => AuthStatus::Pending,
            "denied" => AuthStatus::Denied,
            "timeout" => AuthStatus::Timeout,
            _ => AuthStatus::Unknown,
        }
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthStatus::Granted => "granted",
            AuthStatus::Pending => "pending",
            AuthStatus::Denied => "denied",
            AuthStatus::Timeout => "timeout",
            AuthStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Challenge material fetched from the authorization track.
///
/// Fetched fresh each run, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthChallenge {
    pub status: AuthStatus,
    #[serde(default)]
    pub challenge: String,
    /// Salt for the alternate password scheme; session login ignores it.
    #[serde(default)]
    pub password_salt: String,
}

/// Token identifying an authorized session.
///
/// Sent as `X-Fbx-App-Auth` on every subsequent API call. Held in memory
/// only; the box expires it server-side.
#[derive(Debug, Clone)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of a full handshake pass.
#[derive(Debug)]
pub enum AuthOutcome {
    /// Registration submitted; the box is waiting for approval and the
    /// operator must persist the emitted credentials before re-running.
    Pending(PendingRegistration),
    /// Session opened with stored credentials.
    Session(SessionToken),
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    app_id: &'a str,
    app_name: &'a str,
    app_version: &'a str,
    device_name: &'a str,
}

#[derive(Debug, Serialize)]
struct SessionRequest<'a> {
    app_id: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionResult {
    session_token: String,
}

/// Drive the whole handshake: open a session with stored credentials, or
/// submit a registration when none are stored.
pub async fn run_handshake(transport: &Transport, config: &Config) -> Result<AuthOutcome> {
    match Credentials::load(&config.credential_file)? {
        Some(credentials) => {
            let token = authenticate(transport, &config.identity, &credentials).await?;
            Ok(AuthOutcome::Session(token))
        }
        None => {
            let pending = register(transport, &config.identity).await?;
            Ok(AuthOutcome::Pending(pending))
        }
    }
}

/// Open a session using stored credentials: fetch the challenge, derive the
/// session password, log in.
pub async fn authenticate(
    transport: &Transport,
    identity: &AppIdentity,
    credentials: &Credentials,
) -> Result<SessionToken> {
    let challenge = fetch_challenge(transport, &credentials.track_id).await?;
    let password = derive_password(&credentials.app_token, &challenge.challenge);
    open_session(transport, &identity.app_id, &password).await
}

/// Register the app with the box.
///
/// The box records the registration and shows an approval prompt on its
/// front panel; the returned token only becomes usable once granted there.
pub async fn register(transport: &Transport, identity: &AppIdentity) -> Result<PendingRegistration> {
    let request = RegisterRequest {
        app_id: &identity.app_id,
        app_name: &identity.app_name,
        app_version: &identity.app_version,
        device_name: &identity.device_name,
    };
    debug!(app_id = %identity.app_id, device_name = %identity.device_name, "Registering app");

    let body = transport.post_json(AUTHORIZE_PATH, &request).await?;
    let envelope: Envelope<PendingRegistration> = serde_json::from_str(&body)?;
    if !envelope.success {
        return Err(Error::RegistrationRejected);
    }
    let pending = envelope
        .result
        .ok_or_else(|| Error::InvalidResponse("registration result missing".into()))?;
    debug!(track_id = %pending.track_id, "Registration accepted, approval pending");
    Ok(pending)
}

/// Fetch the authorization challenge for a registration track.
///
/// Single shot: anything but `granted` ends the run, there is no polling.
pub async fn fetch_challenge(transport: &Transport, track_id: &str) -> Result<AuthChallenge> {
    let body = transport.get(&format!("{AUTHORIZE_PATH}{track_id}")).await?;
    let envelope: Envelope<AuthChallenge> = serde_json::from_str(&body)?;
    if !envelope.success {
        return Err(Error::AuthorizationCheckFailed);
    }
    let challenge = envelope
        .result
        .ok_or_else(|| Error::InvalidResponse("authorize result missing".into()))?;
    debug!(status = %challenge.status, "Authorization track status");

    if challenge.status != AuthStatus::Granted {
        return Err(Error::NotGranted {
            status: challenge.status,
        });
    }
    Ok(challenge)
}

/// Derive the session password: HMAC-SHA1 of the challenge keyed by the app
/// token, as lowercase hex.
pub fn derive_password(app_token: &str, challenge: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(app_token.as_bytes()).expect("HMAC accepts any key length");
    mac.update(challenge.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Exchange the derived password for a session token.
pub async fn open_session(
    transport: &Transport,
    app_id: &str,
    password: &str,
) -> Result<SessionToken> {
    let request = SessionRequest { app_id, password };
    let body = transport.post_json(SESSION_PATH, &request).await?;
    let envelope: Envelope<SessionResult> = serde_json::from_str(&body)?;
    if !envelope.success {
        warn!(body = %body, "Session open refused");
        return Err(Error::LoginFailed { body });
    }
    let result = envelope
        .result
        .ok_or_else(|| Error::InvalidResponse("session result missing".into()))?;
    debug!("Session opened");
    Ok(SessionToken(result.session_token))
}
