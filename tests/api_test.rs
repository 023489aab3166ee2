use std::sync::Arc;

use axum::{Extension, Form, http::StatusCode};
use serde_json::json;
use sporlrec::{
    api::{self, RecommendationForm},
    spotify::SpotifyCatalog,
};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn track_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "uri": format!("spotify:track:{}", id),
        "artists": [{ "id": "a1", "name": "The Drivers" }]
    })
}

async fn submit(server: &MockServer, playlist_name: &str) -> (StatusCode, String) {
    let catalog = SpotifyCatalog::new(server.uri(), "test-token");
    api::recommendations(
        Extension(Arc::new(catalog)),
        Form(RecommendationForm {
            playlist_name: playlist_name.to_string(),
        }),
    )
    .await
}

// Mounts a user owning "Roadtrip" (one track) and an artist without albums
async fn mount_roadtrip(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "user-1" })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "p1", "name": "Roadtrip" }],
            "next": null
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/playlists/p1/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "track": track_json("t1", "Highway Song") }],
            "next": null
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/artists/a1/albums"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "next": null
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_form_has_single_playlist_field() {
    let page = api::form().await.0;

    assert!(page.contains(r#"action="/recommendations""#));
    assert!(page.contains(r#"name="playlist_name""#));
    assert_eq!(page.matches(r#"type="text""#).count(), 1);
}

#[tokio::test]
async fn test_health_reports_version() {
    let body = api::health().await.0;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_recommendations_unknown_playlist() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "user-1" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "p0", "name": "Focus" }],
            "next": null
        })))
        .mount(&server)
        .await;

    let (status, body) = submit(&server, " Roadtrip ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Playlist 'roadtrip' not found.");
}

#[tokio::test]
async fn test_recommendations_service_failure() {
    let server = MockServer::start().await;
    mount_roadtrip(&server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/users/.*/playlists$"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = submit(&server, "roadtrip").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, "Creating the recommended playlist failed. Try again later.");
}

#[tokio::test]
async fn test_recommendations_creates_playlist() {
    let server = MockServer::start().await;
    mount_roadtrip(&server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": {
                "items": [
                    track_json("t1", "Highway Song"),
                    track_json("r1", "Tail Lights"),
                    track_json("r2", "Overpass")
                ],
                "next": null
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/user-1/playlists"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "new1",
            "name": "Enhanced Recommendations based on roadtrip - 2024-05-01 18:30:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/playlists/new1/tracks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": "s1" })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = submit(&server, "Roadtrip").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body.starts_with("New playlist \"Enhanced Recommendations based on"),
        "unexpected body: {}",
        body
    );
    assert!(body.ends_with("created based on \"roadtrip\""));
}
