//! Request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/resume/unlock`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnlockRequest {
    #[serde(default)]
    pub password: Option<String>,
}

impl UnlockRequest {
    /// Parse a raw body. Only a JSON object is accepted; serde's sequence
    /// form for structs (`["..."]`) is rejected.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }
}

/// Successful unlock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockResponse {
    pub success: bool,
}

/// Every error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub gate_enabled: bool,
}
