//! Backend service layer
//!
//! The `ContactMethodService` trait is the boundary to the backend: the
//! inbound contact method query and the outbound test-send mutation. The
//! engine only talks to the backend through it.

pub mod fixture;

use cmlist_core::prelude::*;
use cmlist_core::{ContactMethod, ContactMethodId, UserId};

pub use fixture::FixtureBackend;

/// Contact method backend operations
#[trait_variant::make(ContactMethodService: Send)]
pub trait LocalContactMethodService {
    /// Fetch every contact method of a user
    async fn contact_methods(&self, user_id: &UserId) -> Result<Vec<ContactMethod>>;

    /// Ask the backend to send a test notification to a contact method
    async fn send_test(&self, id: &ContactMethodId) -> Result<()>;
}
