//! People endpoint client module for HTTP communication

mod client;
mod traits;
mod types;

pub use client::{PeopleClient, DEFAULT_BASE_URL};
pub use traits::PeopleClientTrait;
pub use types::{person_path, PatchResponse, PersonId, TransportError, LISTING_ROUTE};

#[cfg(test)]
pub use traits::MockPeopleClientTrait;
