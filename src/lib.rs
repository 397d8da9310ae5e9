//! # fbxcall
//!
//! Client for the HTTP API of a Freebox-style local-network box.
//!
//! Implements the challenge-response device pairing handshake (register the
//! app, check the authorization track, derive the session password, open a
//! session) and fetches the call-log history over the resulting session.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fbxcall::{auth, calls, Config, Transport};
//!
//! #[tokio::main]
//! async fn main() -> fbxcall::Result<()> {
//!     let config = Config::default();
//!     let transport = Transport::new(&config)?;
//!
//!     match auth::run_handshake(&transport, &config).await? {
//!         auth::AuthOutcome::Pending(pending) => {
//!             // Approve the pairing on the box, then persist:
//!             println!("TRACK_ID={}", pending.track_id);
//!             println!("APP_TOKEN={}", pending.app_token);
//!         }
//!         auth::AuthOutcome::Session(token) => {
//!             let entries = calls::fetch_call_log(&transport, &token).await?;
//!             println!("{} calls", entries.len());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod calls;
pub mod config;
pub mod credentials;
pub mod error;
pub mod report;
pub mod transport;
pub mod types;

// Re-export main public API
pub use auth::{AuthChallenge, AuthOutcome, AuthStatus, PendingRegistration, SessionToken};
pub use config::{AppIdentity, Config};
pub use credentials::Credentials;
pub use error::Error;
pub use transport::Transport;
pub use types::CallEntry;

/// Result type for fbxcall operations.
pub type Result<T> = std::result::Result<T, Error>;
