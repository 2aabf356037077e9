use axum::http::StatusCode;
use recordbook_application::ports::RecordStore;
use recordbook_domain::{DomainName, Fingerprint, RecordType};
use serde_json::json;

mod helpers;
use helpers::{empty_request, json_request, TestApp};

fn encode_query_value(value: &str) -> String {
    value
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() {
                (b as char).to_string()
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect()
}

async fn seed(app: &TestApp, name: &str, values: &[&str]) {
    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/records",
            json!({ "name": name, "record_type": "A", "ttl": 300, "values": values }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new(None);

    let (status, body) = app.send(empty_request("GET", "/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn test_create_and_get_records() {
    let app = TestApp::new(None);

    let (status, body) = app
        .send(json_request(
            "POST",
            "/api/records",
            json!({
                "name": "www.example.com",
                "record_type": "A",
                "ttl": 300,
                "values": ["10.0.0.1", "10.0.0.2"]
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = app
        .send(empty_request("GET", "/api/records/www.example.com/A"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "name": "www.example.com.", "record_type": "A", "class": "IN", "ttl": 300, "value": "10.0.0.1" },
            { "name": "www.example.com.", "record_type": "A", "class": "IN", "ttl": 300, "value": "10.0.0.2" }
        ])
    );
}

#[tokio::test]
async fn test_get_missing_set_is_404() {
    let app = TestApp::new(None);

    let (status, body) = app.send(empty_request("GET", "/api/records/nope/A")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_invalid_input_is_400() {
    let app = TestApp::new(None);

    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/records",
            json!({ "name": "test", "record_type": "A", "ttl": 60, "values": ["not-an-ip"] }),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.send(empty_request("GET", "/api/records/test/SRV")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_record_and_mismatch() {
    let app = TestApp::new(None);
    seed(&app, "test", &["10.0.0.1"]).await;

    let (status, body) = app
        .send(json_request(
            "PUT",
            "/api/records",
            json!({
                "name": "test", "record_type": "A", "ttl": 300,
                "old_value": "10.0.0.1", "value": "10.0.0.5"
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "10.0.0.5");

    let (status, _) = app
        .send(json_request(
            "PUT",
            "/api/records",
            json!({
                "name": "test", "record_type": "A", "ttl": 300,
                "old_value": "10.0.0.1", "value": "10.0.0.6"
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_replace_set() {
    let app = TestApp::new(None);
    seed(&app, "test", &["10.0.0.1", "10.0.0.2"]).await;

    let (status, body) = app
        .send(json_request(
            "PUT",
            "/api/records/test/A",
            json!({ "ttl": 60, "values": ["10.0.0.9"] }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = app.send(empty_request("GET", "/api/records/test/A")).await;
    assert_eq!(body[0]["value"], "10.0.0.9");
    assert_eq!(body[0]["ttl"], 60);
}

#[tokio::test]
async fn test_delete_single_value_then_whole_set() {
    let app = TestApp::new(None);
    seed(&app, "test", &["10.0.0.1", "10.0.0.2"]).await;

    let (status, _) = app
        .send(empty_request("DELETE", "/api/records/test/A?value=10.0.0.1"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.send(empty_request("GET", "/api/records/test/A")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = app
        .send(empty_request("DELETE", "/api/records/test/A"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send(empty_request("DELETE", "/api/records/test/A"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_txt_value_read_back_can_address_the_record() {
    let app = TestApp::new(None);
    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/records",
            json!({
                "name": "txt.example", "record_type": "TXT", "ttl": 300,
                "values": ["say \"hi\" back\\slash\tend", "plain"]
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = app
        .send(empty_request("GET", "/api/records/txt.example/TXT"))
        .await;
    let shown = body[0]["value"].as_str().unwrap().to_string();
    assert_eq!(shown, r#""say \"hi\" back\\slash\009end""#);

    let (status, body) = app
        .send(json_request(
            "PUT",
            "/api/records",
            json!({
                "name": "txt.example", "record_type": "TXT", "ttl": 300,
                "old_value": shown, "value": "replaced"
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "\"replaced\"");

    let (_, body) = app
        .send(empty_request("GET", "/api/records/txt.example/TXT"))
        .await;
    let plain = body[1]["value"].as_str().unwrap().to_string();
    let uri = format!(
        "/api/records/txt.example/TXT?value={}",
        encode_query_value(&plain)
    );
    let (status, _) = app.send(empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app
        .send(empty_request("GET", "/api/records/txt.example/TXT"))
        .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["value"], "\"replaced\"");
}

#[tokio::test]
async fn test_store_save_and_load() {
    let app = TestApp::new(None);
    seed(&app, "test", &["127.0.0.1"]).await;

    let (status, _) = app.send(empty_request("POST", "/api/store/save")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(app.store.files().primary_exists());

    let key = Fingerprint::of(&DomainName::parse("test").unwrap(), RecordType::A);
    app.store.remove(&key, None);
    assert_eq!(app.store.len(), 0);

    let (status, _) = app.send(empty_request("POST", "/api/store/load")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_store_load_without_file_is_500() {
    let app = TestApp::new(None);

    let (status, body) = app.send(empty_request("POST", "/api/store/load")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Persistence error"));
}
