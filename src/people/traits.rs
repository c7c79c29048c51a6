//! Trait abstraction for the people client to enable mocking in tests

use super::types::{PatchResponse, PersonId, TransportError};
use crate::state::FieldSnapshot;
use async_trait::async_trait;

/// Trait for people endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeopleClientTrait: Send + Sync {
    /// Send `PATCH /people/{id}` with the snapshot form-encoded.
    ///
    /// Any completed exchange is `Ok`, whatever its status; `Err` means the
    /// request never completed.
    async fn patch_person(
        &self,
        id: &PersonId,
        body: &FieldSnapshot,
    ) -> Result<PatchResponse, TransportError>;
}
