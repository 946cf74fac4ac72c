//! HTTP Message Types
//!
//! JSON bodies exchanged with API clients. Field names match what existing
//! clients already send and parse.

use serde::{Deserialize, Serialize};

/// Body of `POST /input`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRequest {
    #[serde(rename = "Tweet")]
    pub tweet: String,
}

/// Body returned by `DELETE /delete`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: String,
}

/// Body returned for any failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
