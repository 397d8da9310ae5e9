//! Long-lived pairing credentials.
//!
//! The box issues a `track_id`/`app_token` pair once, at registration time.
//! The operator persists them by hand into a local KEY=VALUE file after
//! approving the pairing on the box; every later run reads them back here.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

const TRACK_ID_KEY: &str = "TRACK_ID";
const APP_TOKEN_KEY: &str = "APP_TOKEN";

/// Credentials issued by the box at registration time.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Identifier of the authorization track opened by registration.
    pub track_id: String,
    /// Long-lived secret keying the session password derivation.
    pub app_token: String,
}

impl Credentials {
    /// Load credentials from the KEY=VALUE file at `path`.
    ///
    /// Returns `Ok(None)` when the file exists but either key is absent: a
    /// partial credential counts as no credential and forces
    /// re-registration. A missing file is a configuration error naming the
    /// exact path the operator must create.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::CredentialFile {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        match (
            lookup(&contents, TRACK_ID_KEY),
            lookup(&contents, APP_TOKEN_KEY),
        ) {
            (Some(track_id), Some(app_token)) => {
                debug!(track_id = %track_id, "Loaded stored credentials");
                Ok(Some(Self {
                    track_id,
                    app_token,
                }))
            }
            _ => {
                debug!(path = %path.display(), "Credential file incomplete");
                Ok(None)
            }
        }
    }
}

/// Find a `KEY=VALUE` line, returning everything after the first `=` with
/// the line ending trimmed. Tokens may themselves contain `=`.
fn lookup(contents: &str, key: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        line.strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|value| value.trim_end().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_both_keys() {
        let file = write_file("TRACK_ID=abc\nAPP_TOKEN=xyz\n");
        let creds = Credentials::load(file.path()).unwrap().unwrap();
        assert_eq!(creds.track_id, "abc");
        assert_eq!(creds.app_token, "xyz");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freebox");
        let err = Credentials::load(&path).unwrap_err();
        match err {
            Error::CredentialFile { path: reported } => assert_eq!(reported, path),
            other => panic!("expected CredentialFile, got {other:?}"),
        }
    }

    #[test]
    fn missing_token_counts_as_absent() {
        let file = write_file("TRACK_ID=abc\n");
        assert!(Credentials::load(file.path()).unwrap().is_none());
    }

    #[test]
    fn missing_track_counts_as_absent() {
        let file = write_file("APP_TOKEN=xyz\n");
        assert!(Credentials::load(file.path()).unwrap().is_none());
    }

    #[test]
    fn value_keeps_embedded_equals_signs() {
        let file = write_file("TRACK_ID=42\nAPP_TOKEN=abc=def==\n");
        let creds = Credentials::load(file.path()).unwrap().unwrap();
        assert_eq!(creds.app_token, "abc=def==");
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        let file = write_file("# freebox pairing\nTRACK_ID_OLD=stale\nTRACK_ID=7\nAPP_TOKEN=tok\n");
        let creds = Credentials::load(file.path()).unwrap().unwrap();
        assert_eq!(creds.track_id, "7");
    }
}
