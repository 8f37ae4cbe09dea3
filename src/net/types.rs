//! Entity DTOs for the GraphQL schema surface.
//!
//! DESIGN
//! ======
//! These types mirror the server-side GraphQL types field-for-field so serde
//! can decode query results directly. Entities are server-owned; the client
//! only reads them and patches `featured` through the mutation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A conference speaker as returned by the `speakers` and `speakerById`
/// queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    /// Unique speaker identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short biography shown on cards and the detail panel.
    pub bio: String,
    /// Whether this speaker has been marked featured.
    pub featured: bool,
    /// Sessions presented by this speaker, in server-returned order.
    pub sessions: Vec<Session>,
}

/// A conference session referenced by one or more speakers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: String,
    /// Session title.
    pub title: String,
}

/// The `markFeatured` mutation's return payload: just enough to reconcile
/// the patched entity in the client-side store by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedPatch {
    /// Identifier of the patched speaker.
    pub id: String,
    /// The new `featured` value.
    pub featured: bool,
}
