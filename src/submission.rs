//! Form submission interceptor
//!
//! Turns a submit event on the edit-person form into one asynchronous
//! `PATCH /people/{id}` request, then reflects the outcome on the page:
//! a successful update navigates to the listing route, anything else
//! raises an alert.
//!
//! Work is split around the single suspension point. [`FormInterceptor::on_submit`]
//! runs synchronously: it suppresses the default submission, snapshots the
//! form and puts the request in flight. [`PendingUpdate::settle`] is the
//! continuation, run by the host once the request has resolved.

use crate::people::{PatchResponse, PeopleClientTrait, PersonId, TransportError, LISTING_ROUTE};
use crate::state::FormSource;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Label prepended to every alert raised by a failed update
pub const ERROR_PREFIX: &str = "Error updating person: ";

/// Navigation and alert surface of the host environment
#[cfg_attr(test, mockall::automock)]
pub trait Page {
    /// Replace the current page with the one at `route`
    fn navigate(&mut self, route: &str);

    /// Show a blocking message to the user
    fn alert(&mut self, message: &str);
}

/// A submit event fired by a form
#[derive(Debug)]
pub struct SubmitEvent<'a, F> {
    form: &'a F,
    default_prevented: bool,
}

impl<'a, F: FormSource> SubmitEvent<'a, F> {
    pub fn new(form: &'a F) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    /// The form that fired the event
    pub fn form(&self) -> &'a F {
        self.form
    }

    /// Cancel the host's native submission
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Success,
    Failure(String),
}

impl UpdateOutcome {
    /// Classify a finished request. Non-2xx statuses report the response
    /// body, transport failures report their own message.
    pub fn from_result(result: Result<PatchResponse, TransportError>) -> Self {
        match result {
            Ok(response) if response.is_success() => Self::Success,
            Ok(response) => Self::Failure(response.body),
            Err(err) => Self::Failure(err.to_string()),
        }
    }

    /// Apply the outcome to the page: exactly one navigation or one alert
    pub fn apply<P: Page + ?Sized>(&self, page: &mut P) {
        match self {
            Self::Success => page.navigate(LISTING_ROUTE),
            Self::Failure(message) => page.alert(&format!("{ERROR_PREFIX}{message}")),
        }
    }
}

/// Submit handler bound to the people endpoint
#[derive(Clone)]
pub struct FormInterceptor {
    client: Arc<dyn PeopleClientTrait>,
}

impl FormInterceptor {
    pub fn new(client: Arc<dyn PeopleClientTrait>) -> Self {
        Self { client }
    }

    /// Handle a submit event for `person_id`.
    ///
    /// Must be called from within a Tokio runtime. The request is already
    /// in flight when this returns. There is no guard against a second
    /// submission while one is pending; each call yields its own update.
    pub fn on_submit<F: FormSource>(
        &self,
        event: &mut SubmitEvent<'_, F>,
        person_id: &PersonId,
    ) -> PendingUpdate {
        event.prevent_default();

        let body = event.form().snapshot();
        if body.is_empty() {
            tracing::warn!(person_id = %person_id, "Submitting a form without named fields");
        }
        let fields: Vec<&str> = body.pairs().map(|(name, _)| name).collect();
        tracing::info!(person_id = %person_id, ?fields, "Submitting person update");

        let client = Arc::clone(&self.client);
        let id = person_id.clone();
        let request = tokio::spawn(async move { client.patch_person(&id, &body).await });

        PendingUpdate {
            person_id: person_id.clone(),
            request,
        }
    }
}

/// An update request that has been sent but not yet handled
#[derive(Debug)]
pub struct PendingUpdate {
    person_id: PersonId,
    request: JoinHandle<Result<PatchResponse, TransportError>>,
}

impl PendingUpdate {
    pub fn person_id(&self) -> &PersonId {
        &self.person_id
    }

    /// Whether the network layer has resolved the request
    pub fn is_settled(&self) -> bool {
        self.request.is_finished()
    }

    /// Wait for the request and reflect its outcome on `page`
    pub async fn settle<P: Page + ?Sized>(self, page: &mut P) -> UpdateOutcome {
        let result = match self.request.await {
            Ok(result) => result,
            Err(err) => Err(TransportError::from_error(err)),
        };

        let outcome = UpdateOutcome::from_result(result);
        match &outcome {
            UpdateOutcome::Success => {
                tracing::info!(person_id = %self.person_id, "Person updated");
            }
            UpdateOutcome::Failure(message) => {
                tracing::warn!(person_id = %self.person_id, %message, "Person update failed");
            }
        }

        outcome.apply(page);
        outcome
    }
}
