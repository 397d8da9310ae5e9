//! Core data types for fbxcall.

use serde::Deserialize;

/// One entry of the box call log.
#[derive(Debug, Clone, Deserialize)]
pub struct CallEntry {
    /// Call start time, seconds since the Unix epoch.
    pub datetime: i64,
    /// Caller display name; the box falls back to the raw number.
    pub name: String,
    /// Caller number as dialed or received.
    pub number: String,
    /// Call category as reported by the box (`missed`, `accepted`, `outgoing`).
    #[serde(rename = "type")]
    pub call_type: String,
    /// Call duration in seconds.
    pub duration: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_parses_wire_shape() {
        let entry: CallEntry = serde_json::from_str(
            r#"{"datetime": 1700000000, "name": "Alice", "number": "0612345678",
                "type": "missed", "duration": 0, "id": 99, "new": true}"#,
        )
        .unwrap();
        assert_eq!(entry.datetime, 1_700_000_000);
        assert_eq!(entry.call_type, "missed");
        assert_eq!(entry.duration, 0);
    }
}
