use super::*;
use crate::net::types::Speaker;

#[derive(Debug, serde::Deserialize)]
struct SpeakersData {
    speakers: Vec<Speaker>,
}

#[test]
fn client_default_uses_default_endpoint() {
    assert_eq!(GraphqlClient::default().endpoint(), DEFAULT_ENDPOINT);
}

#[test]
fn request_without_variables_omits_the_field() {
    let request = GraphqlRequest {
        query: "query speakers { speakers { id } }".to_owned(),
        variables: serde_json::Value::Null,
    };
    let serialized = serde_json::to_value(&request).unwrap();
    assert_eq!(
        serialized,
        serde_json::json!({ "query": "query speakers { speakers { id } }" })
    );
}

#[test]
fn decode_returns_data_on_success() {
    let body = r#"{
        "data": {
            "speakers": [
                { "id": "1", "name": "Ada", "bio": "B1", "featured": false,
                  "sessions": [{ "id": "s1", "title": "Talk A" }] }
            ]
        }
    }"#;
    let data: SpeakersData = decode_response(body).unwrap();
    assert_eq!(data.speakers.len(), 1);
    assert_eq!(data.speakers[0].name, "Ada");
}

#[test]
fn decode_surfaces_graphql_errors() {
    let body = r#"{ "data": null, "errors": [{ "message": "boom" }, { "message": "again" }] }"#;
    let err = decode_response::<SpeakersData>(body).unwrap_err();
    assert_eq!(err, GraphqlError::Server("boom; again".to_owned()));
}

#[test]
fn decode_rejects_envelope_without_data_or_errors() {
    let err = decode_response::<SpeakersData>("{}").unwrap_err();
    assert!(matches!(err, GraphqlError::Decode(_)));
}

#[test]
fn decode_rejects_malformed_body() {
    let err = decode_response::<SpeakersData>("not json").unwrap_err();
    assert!(matches!(err, GraphqlError::Decode(_)));
}

#[test]
fn errors_render_flat_messages() {
    assert_eq!(
        GraphqlError::Status(502).to_string(),
        "server returned status 502"
    );
    assert_eq!(
        GraphqlError::Server("bad field".to_owned()).to_string(),
        "graphql error: bad field"
    );
}
