//! Call-log retrieval over an open session.

use tracing::debug;

use crate::auth::SessionToken;
use crate::transport::{Envelope, Transport};
use crate::types::CallEntry;
use crate::{Error, Result};

const CALL_LOG_PATH: &str = "/api/v4/call/log/";

/// Fetch the full call log, newest first as the box reports it.
pub async fn fetch_call_log(transport: &Transport, token: &SessionToken) -> Result<Vec<CallEntry>> {
    let body = transport.get_with_auth(CALL_LOG_PATH, token).await?;
    let envelope: Envelope<Vec<CallEntry>> = serde_json::from_str(&body)?;
    if !envelope.success {
        return Err(Error::CallLogFailed);
    }
    // An empty log comes back with no result field.
    let entries = envelope.result.unwrap_or_default();
    debug!(count = entries.len(), "Fetched call log");
    Ok(entries)
}
