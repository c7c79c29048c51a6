//! HTTP client for the people endpoint

use super::traits::PeopleClientTrait;
use super::types::{PatchResponse, PersonId, TransportError, LISTING_ROUTE};
use crate::state::FieldSnapshot;
use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::Url;

/// Default server address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Client for the people REST endpoint
#[derive(Debug, Clone)]
pub struct PeopleClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PeopleClient {
    /// Create a client rooted at `base_url`.
    ///
    /// No timeout is configured; a request runs until it completes or the
    /// transport gives up.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            bail!("Base URL {base_url} cannot carry a path");
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of one person, with the id percent-encoded as a single segment
    pub fn person_url(&self, id: &PersonId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(LISTING_ROUTE.trim_start_matches('/'))
                .push(id.as_str());
        }
        url
    }
}

#[async_trait]
impl PeopleClientTrait for PeopleClient {
    async fn patch_person(
        &self,
        id: &PersonId,
        body: &FieldSnapshot,
    ) -> Result<PatchResponse, TransportError> {
        let url = self.person_url(id);
        tracing::debug!(%url, fields = body.len(), "Sending person update");

        let response = self.http.patch(url).form(body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(PatchResponse::new(status.as_u16(), String::new()));
        }

        let text = response.text().await?;
        Ok(PatchResponse::new(status.as_u16(), text))
    }
}
