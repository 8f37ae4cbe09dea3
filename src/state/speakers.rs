//! Normalized speaker store shared across views.

#[cfg(test)]
#[path = "speakers_test.rs"]
mod speakers_test;

use std::collections::HashMap;

use crate::net::types::{FeaturedPatch, Speaker};

/// Speakers keyed by id plus the server-returned list order.
///
/// The store is the client's read-through projection of server-owned
/// entities: list and detail fetches load into it, the featured mutation
/// patches it, and views only ever render from it. Entities are never
/// created or deleted client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeakerStore {
    speakers: HashMap<String, Speaker>,
    order: Vec<String>,
}

impl SpeakerStore {
    /// Replace the list with a fresh `speakers` query result, preserving
    /// server order.
    pub fn load_list(&mut self, list: Vec<Speaker>) {
        self.order = list.iter().map(|s| s.id.clone()).collect();
        self.speakers = list.into_iter().map(|s| (s.id.clone(), s)).collect();
    }

    /// Insert or replace one speaker from a detail fetch. The list order is
    /// left untouched; a speaker only enters the list via `load_list`.
    pub fn upsert(&mut self, speaker: Speaker) {
        self.speakers.insert(speaker.id.clone(), speaker);
    }

    /// Apply a `markFeatured` mutation result. Returns whether the entity
    /// was present; a miss means the patched speaker was never loaded, in
    /// which case there is nothing to reconcile.
    pub fn apply_featured(&mut self, patch: &FeaturedPatch) -> bool {
        match self.speakers.get_mut(&patch.id) {
            Some(speaker) => {
                speaker.featured = patch.featured;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Speaker> {
        self.speakers.get(id)
    }

    /// Speaker ids in server-returned list order.
    pub fn list_ids(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
