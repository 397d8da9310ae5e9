//! Error types for fbxcall.

use std::path::PathBuf;

use thiserror::Error;

use crate::auth::AuthStatus;

/// Main error type for fbxcall operations.
///
/// Every variant is fatal: the handshake has no local recovery, a failed
/// step ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Credential file does not exist yet.
    #[error("credential file missing, create {path} with TRACK_ID= and APP_TOKEN= lines")]
    CredentialFile { path: PathBuf },

    /// The box declined the app registration request.
    #[error("registration rejected by server")]
    RegistrationRejected,

    /// The authorization status endpoint reported failure.
    #[error("authorization check failed")]
    AuthorizationCheckFailed,

    /// The registration track exists but has not been granted on the box.
    #[error("authorization not granted: status={status}")]
    NotGranted { status: AuthStatus },

    /// Session open was refused; carries the raw response body for diagnostics.
    #[error("login failed: {body}")]
    LoginFailed { body: String },

    /// The call-log endpoint reported failure.
    #[error("call log fetch failed")]
    CallLogFailed,

    /// Response parsed but a required payload was missing.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
