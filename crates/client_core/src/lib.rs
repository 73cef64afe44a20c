use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{
    domain::ActivityCollection,
    error::ApiError,
    protocol::{ParticipantQuery, RemovalResponse, SignupResponse},
};
use tracing::debug;
use url::Url;

pub mod error;

pub use error::RequestError;

/// The three endpoints of the activities server the board depends on.
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<ActivityCollection, RequestError>;
    /// `POST /activities/{activity}/signup?email={email}`
    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupResponse, RequestError>;
    /// `DELETE /activities/{activity}/participants?email={email}`
    async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<RemovalResponse, RequestError>;
}

/// HTTP implementation of [`ActivitiesApi`].
#[derive(Debug, Clone)]
pub struct ActivitiesClient {
    http: Client,
    base_url: Url,
}

impl ActivitiesClient {
    pub fn new(server_url: &str) -> Result<Self, RequestError> {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: &str) -> Result<Self, RequestError> {
        let mut base_url = Url::parse(server_url.trim())
            .map_err(|err| RequestError::InvalidUrl(format!("{server_url}: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RequestError::InvalidUrl(format!(
                "{server_url}: not a hierarchical url"
            )));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded,
    /// so activity names containing `/`, `?` or spaces stay one segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, RequestError> {
        let response = request.send().await.map_err(RequestError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(RequestError::Transport)?;
        if !status.is_success() {
            return Err(RequestError::Rejected {
                status: status.as_u16(),
                detail: ApiError::detail_from_body(&body),
            });
        }
        Ok(body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RequestError> {
        let body = self.send(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ActivitiesApi for ActivitiesClient {
    async fn list_activities(&self) -> Result<ActivityCollection, RequestError> {
        let url = self.endpoint(&["activities"]);
        debug!(%url, "fetching activities");
        self.send_json(self.http.get(url)).await
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupResponse, RequestError> {
        let url = self.endpoint(&["activities", activity, "signup"]);
        debug!(%url, activity, "submitting sign-up");
        let query = ParticipantQuery {
            email: email.to_string(),
        };
        self.send_json(self.http.post(url).query(&query)).await
    }

    async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<RemovalResponse, RequestError> {
        let url = self.endpoint(&["activities", activity, "participants"]);
        debug!(%url, activity, "removing participant");
        let query = ParticipantQuery {
            email: email.to_string(),
        };
        let body = self.send(self.http.delete(url).query(&query)).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(RemovalResponse::default());
        }
        // Any 2xx counts as removed; the body is informational.
        Ok(serde_json::from_slice(&body).unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
