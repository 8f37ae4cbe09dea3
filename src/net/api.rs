//! One async function per GraphQL operation.
//!
//! Client-side (hydrate): real HTTP calls via the [`super::graphql`]
//! transport. Server-side (SSR): the transport stubs every operation with
//! [`GraphqlError::Unavailable`], so these functions are safe to call from
//! either render mode.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::graphql::{self, GraphqlClient, GraphqlError};
use super::queries;
use super::types::{FeaturedPatch, Speaker};

#[derive(Debug, Deserialize)]
struct SpeakersData {
    speakers: Vec<Speaker>,
}

#[derive(Debug, Deserialize)]
struct SpeakerByIdData {
    #[serde(rename = "speakerById")]
    speaker_by_id: Option<Speaker>,
}

#[derive(Debug, Deserialize)]
struct MarkFeaturedData {
    #[serde(rename = "markFeatured")]
    mark_featured: Option<FeaturedPatch>,
}

fn log_failure(operation: &str, err: &GraphqlError) {
    #[cfg(feature = "hydrate")]
    log::warn!("{operation} failed: {err}");
    #[cfg(not(feature = "hydrate"))]
    let _ = (operation, err);
}

/// Fetch all speakers in server-returned order.
///
/// # Errors
///
/// Returns a [`GraphqlError`] if the request or decoding fails.
pub async fn fetch_speakers(client: &GraphqlClient) -> Result<Vec<Speaker>, GraphqlError> {
    let request = queries::speakers_request();
    let data: SpeakersData = graphql::execute(client, &request)
        .await
        .inspect_err(|e| log_failure("speakers query", e))?;
    Ok(data.speakers)
}

/// Fetch one speaker by id. A null `speakerById` result decodes to
/// `Ok(None)` so views can render a not-found state instead of crashing on
/// a missing entity.
///
/// # Errors
///
/// Returns a [`GraphqlError`] if the request or decoding fails.
pub async fn fetch_speaker_by_id(
    client: &GraphqlClient,
    id: &str,
) -> Result<Option<Speaker>, GraphqlError> {
    let request = queries::speaker_by_id_request(id);
    let data: SpeakerByIdData = graphql::execute(client, &request)
        .await
        .inspect_err(|e| log_failure("speakerById query", e))?;
    Ok(data.speaker_by_id)
}

/// Mark a speaker featured (or not) and return the patch the store applies
/// for cache reconciliation.
///
/// # Errors
///
/// Returns a [`GraphqlError`] if the request or decoding fails, or if the
/// server resolves the mutation to null.
pub async fn mark_featured(
    client: &GraphqlClient,
    speaker_id: &str,
    featured: bool,
) -> Result<FeaturedPatch, GraphqlError> {
    let request = queries::mark_featured_request(speaker_id, featured);
    let data: MarkFeaturedData = graphql::execute(client, &request)
        .await
        .inspect_err(|e| log_failure("markFeatured mutation", e))?;
    data.mark_featured
        .ok_or_else(|| GraphqlError::Decode("markFeatured resolved to null".to_owned()))
}
