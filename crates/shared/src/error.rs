use serde::{Deserialize, Serialize};

/// Failure body returned with a non-2xx status, e.g. `{"detail": "Activity is full"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }

    /// Best-effort extraction of `detail` from an error body. Bodies that are
    /// not JSON, or whose `detail` is not a string, yield `None`.
    pub fn detail_from_body(body: &[u8]) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        match value.get("detail")? {
            serde_json::Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
            _ => None,
        }
    }
}
