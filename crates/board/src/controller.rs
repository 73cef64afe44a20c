//! Refresh/mutate cycle between the page and the activities server.
//!
//! Every successful mutation is followed by a full [`ActivityBoard::refresh`]
//! so the page always shows server state; nothing is patched locally.
//! Overlapping operations are not ordered against each other. Each refresh
//! overwrites the whole list when it completes, so the last one to finish
//! wins.

use std::sync::Arc;

use client_core::{ActivitiesApi, RequestError};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    dom::Element,
    page::{Page, RemovalTarget},
    render::render_board,
    settings::BoardSettings,
    status::StatusKind,
};

pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";
pub const SIGNUP_TRANSPORT_ERROR: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_FALLBACK_ERROR: &str = "Failed to remove participant";
pub const REMOVAL_TRANSPORT_ERROR: &str = "Failed to remove participant. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Rendered { activities: usize },
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted the change and the page was refreshed.
    Applied,
    /// The server answered with a failure status.
    Rejected,
    /// No usable answer: transport failure or malformed body.
    Failed,
    /// Nothing was sent, e.g. a click that did not hit a removal control.
    Ignored,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

pub struct ActivityBoard<A> {
    api: Arc<A>,
    page: Arc<Mutex<Page>>,
    settings: BoardSettings,
}

impl<A> Clone for ActivityBoard<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            page: self.page.clone(),
            settings: self.settings,
        }
    }
}

impl<A: ActivitiesApi> ActivityBoard<A> {
    pub fn new(api: A, settings: BoardSettings) -> Self {
        Self::with_shared_api(Arc::new(api), settings)
    }

    pub fn with_shared_api(api: Arc<A>, settings: BoardSettings) -> Self {
        Self {
            api,
            page: Arc::new(Mutex::new(Page::new())),
            settings,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Snapshot of the page as it is right now.
    pub async fn page(&self) -> Page {
        self.page.lock().await.clone()
    }

    /// Sets the form controls, as a user typing and selecting would.
    pub async fn fill_form(&self, activity: &str, email: &str) {
        let mut page = self.page.lock().await;
        page.form.activity = activity.to_string();
        page.form.email = email.to_string();
    }

    /// Fetches the full collection and redraws list and selector from it.
    /// A failed fetch replaces the list with a failure message and leaves
    /// the selector alone.
    pub async fn refresh(&self) -> RefreshOutcome {
        match self.api.list_activities().await {
            Ok(activities) => {
                let rendered = render_board(&activities, &self.settings);
                self.page.lock().await.apply_render(rendered);
                debug!(activities = activities.len(), "activities rendered");
                RefreshOutcome::Rendered {
                    activities: activities.len(),
                }
            }
            Err(err) => {
                error!("failed to fetch activities: {err}");
                self.page.lock().await.apply_load_failure();
                RefreshOutcome::Failed
            }
        }
    }

    /// Submits whatever the form holds at this moment.
    pub async fn submit_signup(&self) -> MutationOutcome {
        let form = self.page.lock().await.form.clone();
        self.sign_up(&form.activity, &form.email).await
    }

    pub async fn sign_up(&self, activity: &str, email: &str) -> MutationOutcome {
        match self.api.sign_up(activity, email).await {
            Ok(response) => {
                info!(activity, email, "signed up participant");
                {
                    let mut page = self.page.lock().await;
                    page.form.reset();
                }
                self.show_status(StatusKind::Success, response.message).await;
                self.refresh().await;
                MutationOutcome::Applied
            }
            Err(RequestError::Rejected { status, detail }) => {
                warn!(activity, email, status, ?detail, "sign-up rejected");
                let text = detail.unwrap_or_else(|| SIGNUP_FALLBACK_ERROR.to_string());
                self.show_status(StatusKind::Error, text).await;
                MutationOutcome::Rejected
            }
            Err(err) => {
                error!(activity, email, "error signing up: {err}");
                self.show_status(StatusKind::Error, SIGNUP_TRANSPORT_ERROR)
                    .await;
                MutationOutcome::Failed
            }
        }
    }

    /// Delegated click on the activity list. Only removal controls inside a
    /// rendered card with both tags present trigger a request.
    pub async fn dispatch_click(&self, target: &Element) -> MutationOutcome {
        let removal = self.page.lock().await.delegate_click(target);
        match removal {
            Some(RemovalTarget { activity, email }) => {
                self.remove_participant(&activity, &email).await
            }
            None => {
                debug!(tag = target.tag(), "click ignored");
                MutationOutcome::Ignored
            }
        }
    }

    pub async fn remove_participant(&self, activity: &str, email: &str) -> MutationOutcome {
        match self.api.remove_participant(activity, email).await {
            Ok(_) => {
                info!(activity, email, "removed participant");
                self.refresh().await;
                MutationOutcome::Applied
            }
            Err(RequestError::Rejected { status, detail }) => {
                warn!(activity, email, status, ?detail, "failed to remove participant");
                let text = detail.unwrap_or_else(|| REMOVAL_FALLBACK_ERROR.to_string());
                self.show_status(StatusKind::Error, text).await;
                MutationOutcome::Rejected
            }
            Err(err) => {
                error!(activity, email, "error removing participant: {err}");
                self.show_status(StatusKind::Error, REMOVAL_TRANSPORT_ERROR)
                    .await;
                MutationOutcome::Failed
            }
        }
    }

    /// Shows `text` and schedules its dismissal after the configured timeout.
    async fn show_status(&self, kind: StatusKind, text: impl Into<String>) {
        let generation = self.page.lock().await.status.show(kind, text);
        let page = self.page.clone();
        let timeout = self.settings.status_timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            page.lock().await.status.dismiss(generation);
        });
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
