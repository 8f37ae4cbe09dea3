use super::*;
use crate::net::graphql::decode_response;

#[test]
fn speakers_data_decodes_list_in_order() {
    let body = r#"{
        "data": {
            "speakers": [
                { "id": "2", "name": "Grace", "bio": "B2", "featured": true, "sessions": [] },
                { "id": "1", "name": "Ada", "bio": "B1", "featured": false,
                  "sessions": [{ "id": "s1", "title": "Talk A" }] }
            ]
        }
    }"#;
    let data: SpeakersData = decode_response(body).unwrap();
    let ids: Vec<&str> = data.speakers.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["2", "1"]);
}

#[test]
fn null_speaker_by_id_decodes_to_none() {
    let body = r#"{ "data": { "speakerById": null } }"#;
    let data: SpeakerByIdData = decode_response(body).unwrap();
    assert!(data.speaker_by_id.is_none());
}

#[test]
fn speaker_by_id_decodes_to_entity() {
    let body = r#"{
        "data": {
            "speakerById": { "id": "1", "name": "Ada", "bio": "B1", "featured": false,
                             "sessions": [{ "id": "s1", "title": "Talk A" }] }
        }
    }"#;
    let data: SpeakerByIdData = decode_response(body).unwrap();
    assert_eq!(data.speaker_by_id.unwrap().name, "Ada");
}

#[test]
fn mark_featured_decodes_patch() {
    let body = r#"{ "data": { "markFeatured": { "id": "1", "featured": true } } }"#;
    let data: MarkFeaturedData = decode_response(body).unwrap();
    let patch = data.mark_featured.unwrap();
    assert_eq!(patch.id, "1");
    assert!(patch.featured);
}

#[test]
fn null_mark_featured_decodes_to_none() {
    let body = r#"{ "data": { "markFeatured": null } }"#;
    let data: MarkFeaturedData = decode_response(body).unwrap();
    assert!(data.mark_featured.is_none());
}
