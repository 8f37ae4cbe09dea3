//! GraphQL operation documents and request builders.
//!
//! The `SpeakerInfo` fragment keeps the two read operations in lockstep:
//! both return the full card-rendering field set, so a detail fetch can be
//! upserted into the same store entry a list fetch produced.

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;

use super::graphql::GraphqlRequest;

const SPEAKER_INFO_FRAGMENT: &str =
    "fragment SpeakerInfo on Speaker { id name bio sessions { id title } featured }";

const MARK_FEATURED_MUTATION: &str = "mutation markFeatured($speakerId: ID!, $featured: Boolean!) \
     { markFeatured(speakerId: $speakerId, featured: $featured) { id featured } }";

fn with_speaker_fragment(operation: &str) -> String {
    format!("{operation} {SPEAKER_INFO_FRAGMENT}")
}

/// Build the `speakers` query request (no variables).
pub fn speakers_request() -> GraphqlRequest {
    GraphqlRequest {
        query: with_speaker_fragment("query speakers { speakers { ...SpeakerInfo } }"),
        variables: serde_json::Value::Null,
    }
}

/// Build the `speakerById` query request for one speaker.
pub fn speaker_by_id_request(id: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: with_speaker_fragment(
            "query speakerById($id: ID!) { speakerById(id: $id) { ...SpeakerInfo } }",
        ),
        variables: serde_json::json!({ "id": id }),
    }
}

/// Build the `markFeatured` mutation request.
///
/// The mutation returns `{ id featured }` so the store can reconcile the
/// patched entity without a follow-up read.
pub fn mark_featured_request(speaker_id: &str, featured: bool) -> GraphqlRequest {
    GraphqlRequest {
        query: MARK_FEATURED_MUTATION.to_owned(),
        variables: serde_json::json!({ "speakerId": speaker_id, "featured": featured }),
    }
}
