//! Types exchanged with the people endpoint

use std::fmt;
use thiserror::Error;

/// Route the edit page returns to after a successful update
pub const LISTING_ROUTE: &str = "/people";

/// Opaque identifier of a person record.
///
/// Accepts either a string or an integer and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonId(String);

/// Rejected person identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("person identifier must not be empty")]
pub struct EmptyPersonId;

impl PersonId {
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyPersonId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EmptyPersonId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::str::FromStr for PersonId {
    type Err = EmptyPersonId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Route of a single person record
pub fn person_path(id: &PersonId) -> String {
    format!("{LISTING_ROUTE}/{id}")
}

/// A completed HTTP exchange.
///
/// The body is only read for non-success statuses; it is empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchResponse {
    pub status: u16,
    pub body: String,
}

impl PatchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any status in 200..=299
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request could not complete (connection, DNS, body read, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Describe `err` together with every cause in its source chain
    pub fn from_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(format!("{:#}", anyhow::Error::new(err)))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_error(err)
    }
}
