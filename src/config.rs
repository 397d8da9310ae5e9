//! Configuration for the box client.

use std::path::PathBuf;
use std::time::Duration;

/// Default box address on the local network.
pub const DEFAULT_HOST: &str = "192.168.1.254";

/// Identity presented to the box when registering the app.
///
/// The box displays `app_name` and `device_name` on its front panel while
/// the operator approves the pairing, and keys the issued token to `app_id`.
#[derive(Debug, Clone)]
pub struct AppIdentity {
    pub app_id: String,
    pub app_name: String,
    pub app_version: String,
    /// Host running the client, shown during the approval prompt.
    pub device_name: String,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            app_id: "get_call_logs".to_string(),
            app_name: "Get call logs".to_string(),
            app_version: "0.0.1".to_string(),
            device_name: local_device_name(),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Box hostname or IP, reached over HTTPS.
    pub host: String,
    /// Accept the box's self-signed certificate.
    pub accept_invalid_certs: bool,
    /// Bound on each request; the box answers locally in well under this.
    pub timeout: Duration,
    /// Identity sent with the registration request.
    pub identity: AppIdentity,
    /// KEY=VALUE file holding `TRACK_ID` and `APP_TOKEN`.
    pub credential_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            accept_invalid_certs: true,
            timeout: Duration::from_secs(10),
            identity: AppIdentity::default(),
            credential_file: default_credential_file(),
        }
    }
}

/// Per-user credential file location, `~/.env/freebox`.
pub fn default_credential_file() -> PathBuf {
    match directories::UserDirs::new() {
        Some(dirs) => dirs.home_dir().join(".env").join("freebox"),
        None => PathBuf::from(".env/freebox"),
    }
}

fn local_device_name() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
