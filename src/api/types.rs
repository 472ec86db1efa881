use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub query: String,
}

/// Response body from `POST /chat`.
///
/// Only `response` is read; any other field is ignored. A missing field
/// defaults to the empty string and is displayed as-is rather than treated
/// as a failure.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
}
