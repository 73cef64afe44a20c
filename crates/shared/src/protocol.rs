use serde::{Deserialize, Serialize};

/// Success body of `POST /activities/{name}/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Success body of `DELETE /activities/{name}/participants`. The body is
/// optional on the wire; an empty body decodes to `message: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Query string shared by the sign-up and removal endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}
