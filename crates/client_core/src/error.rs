use thiserror::Error;

/// Ways a request to the activities server can fail.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never completed (connect, DNS, timeout) or its body could
    /// not be read.
    #[error("request to activities server failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("activities server rejected request with status {status}{}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },
    /// The server answered with success but the body was not the expected JSON.
    #[error("malformed response from activities server: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid activities server url: {0}")]
    InvalidUrl(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

impl RequestError {
    /// Server-supplied failure text, present only for rejected requests.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
