//! HTTPS transport to the box API.
//!
//! One [`Transport`] is built per run and reused for every request. The box
//! serves a self-signed certificate on the LAN, so certificate validation
//! can be disabled via [`Config::accept_invalid_certs`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::auth::SessionToken;
use crate::config::Config;
use crate::Result;

/// Header carrying the session token on authenticated requests.
const AUTH_HEADER: &str = "X-Fbx-App-Auth";

/// Envelope wrapping every JSON response from the box.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) result: Option<T>,
}

/// HTTP client bound to one box.
pub struct Transport {
    client: Client,
    base: String,
}

impl Transport {
    /// Build a transport for the configured box host.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base(format!("https://{}", config.host), config)
    }

    /// Build a transport against an explicit base URL, scheme included.
    ///
    /// Useful for boxes reachable through a non-default port.
    pub fn with_base(base: impl Into<String>, config: &Config) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base: base.into(),
        })
    }

    pub(crate) async fn get(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        debug!(%url, "GET");
        let body = self.client.get(&url).send().await?.text().await?;
        trace!(bytes = body.len(), "Response body");
        Ok(body)
    }

    pub(crate) async fn get_with_auth(&self, path: &str, token: &SessionToken) -> Result<String> {
        let url = self.url(path);
        debug!(%url, "GET (session)");
        let body = self
            .client
            .get(&url)
            .header(AUTH_HEADER, token.as_str())
            .send()
            .await?
            .text()
            .await?;
        trace!(bytes = body.len(), "Response body");
        Ok(body)
    }

    pub(crate) async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<String> {
        let url = self.url(path);
        debug!(%url, "POST");
        let text = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .text()
            .await?;
        trace!(bytes = text.len(), "Response body");
        Ok(text)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_result_defaults_to_none() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.result.is_none());
    }

    #[test]
    fn url_joins_base_and_path() {
        let config = Config::default();
        let transport = Transport::with_base("https://example.invalid", &config).unwrap();
        assert_eq!(
            transport.url("/api/v4/login/session/"),
            "https://example.invalid/api/v4/login/session/"
        );
    }
}
