use super::*;
use crate::net::types::Session;

fn speaker(id: &str, name: &str, featured: bool) -> Speaker {
    Speaker {
        id: id.to_owned(),
        name: name.to_owned(),
        bio: format!("bio of {name}"),
        featured,
        sessions: vec![Session {
            id: format!("s-{id}"),
            title: format!("talk by {name}"),
        }],
    }
}

#[test]
fn store_defaults_empty() {
    let store = SpeakerStore::default();
    assert!(store.is_empty());
    assert!(store.list_ids().is_empty());
    assert!(store.get("1").is_none());
}

#[test]
fn load_list_preserves_server_order() {
    let mut store = SpeakerStore::default();
    store.load_list(vec![
        speaker("3", "Joan", false),
        speaker("1", "Ada", false),
        speaker("2", "Grace", true),
    ]);
    assert_eq!(store.list_ids(), ["3", "1", "2"]);
    assert_eq!(store.get("1").unwrap().name, "Ada");
}

#[test]
fn load_list_replaces_previous_contents() {
    let mut store = SpeakerStore::default();
    store.load_list(vec![speaker("1", "Ada", false)]);
    store.load_list(vec![speaker("2", "Grace", true)]);
    assert_eq!(store.list_ids(), ["2"]);
    assert!(store.get("1").is_none());
}

#[test]
fn upsert_does_not_disturb_list_order() {
    let mut store = SpeakerStore::default();
    store.load_list(vec![speaker("1", "Ada", false), speaker("2", "Grace", false)]);
    store.upsert(speaker("9", "Joan", false));
    assert_eq!(store.list_ids(), ["1", "2"]);
    assert_eq!(store.get("9").unwrap().name, "Joan");
}

#[test]
fn upsert_replaces_existing_entity() {
    let mut store = SpeakerStore::default();
    store.load_list(vec![speaker("1", "Ada", false)]);
    let mut updated = speaker("1", "Ada", false);
    updated.bio = "refreshed".to_owned();
    store.upsert(updated);
    assert_eq!(store.get("1").unwrap().bio, "refreshed");
    assert_eq!(store.list_ids(), ["1"]);
}

#[test]
fn apply_featured_patches_only_the_identified_speaker() {
    let mut store = SpeakerStore::default();
    store.load_list(vec![speaker("1", "Ada", false), speaker("2", "Grace", false)]);
    let applied = store.apply_featured(&FeaturedPatch {
        id: "1".to_owned(),
        featured: true,
    });
    assert!(applied);
    assert!(store.get("1").unwrap().featured);
    assert!(!store.get("2").unwrap().featured);
}

#[test]
fn apply_featured_reports_missing_entity() {
    let mut store = SpeakerStore::default();
    let applied = store.apply_featured(&FeaturedPatch {
        id: "missing".to_owned(),
        featured: true,
    });
    assert!(!applied);
}
