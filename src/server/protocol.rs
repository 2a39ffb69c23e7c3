//! Wire types for the request protocol
//!
//! One JSON object per request line:
//! `{"command": "search" | "count", "suffix": "<string>"}`
//!
//! Responses are one JSON value per line:
//! - `search` → an array of word indices, e.g. `[0,1,2]`
//! - `count`  → `{"count": <n>}`
//! - unknown command → `{"error": "Invalid command"}`
//! - unparseable line / missing field → `{"error": "Invalid input"}`

use crate::index::WordIndex;
use serde::{Deserialize, Serialize};

/// A parsed request line. Both fields are required; a line missing either
/// one fails to parse and is answered with [`Response::invalid_input`].
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub command: String,
    pub suffix: String,
}

/// Response to a single request line.
///
/// Untagged so each variant serializes to its bare wire shape rather than
/// an enum wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// Word indices matching a `search` request
    Indices(Vec<WordIndex>),
    /// Result of a `count` request
    Count { count: u64 },
    /// Request-level failure
    Error { error: String },
}

impl Response {
    pub fn invalid_input() -> Self {
        Response::Error {
            error: "Invalid input".to_string(),
        }
    }

    pub fn invalid_command() -> Self {
        Response::Error {
            error: "Invalid command".to_string(),
        }
    }
}

/// Parse one request line
pub fn parse_request(line: &str) -> Result<Request, serde_json::Error> {
    serde_json::from_str(line)
}
