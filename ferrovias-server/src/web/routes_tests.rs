//! Tests for the HTTP routes, driven through the router without a socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::{AppState, create_router};
use crate::domain::StationId;
use crate::stations::StationDirectory;
use crate::upstream::MockTimetable;
use crate::upstream::fixtures::{page, row};

/// Retiro (75) has three departures, Munro (88) an empty page, and
/// Villa Rosa (126) has no saved page so its fetch fails.
fn app() -> Router {
    let directory =
        StationDirectory::from_entries([("Retiro", 75), ("Munro", 88), ("Villa Rosa", 126)])
            .unwrap();
    let source = MockTimetable::from_pages([
        (
            StationId::new(75),
            page(
                &[
                    row("RETIRO", "10:05"),
                    row("RETIRO", "10:20"),
                    row("Munro", "10:30"),
                ]
                .concat(),
            ),
        ),
        (StationId::new(88), page("")),
    ]);
    create_router(AppState::new(directory, source))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

#[tokio::test]
async fn root_returns_welcome() {
    let (status, body) = get_json(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Welcome to the Ferrovias Train API",
            "documentation": "/docs"
        })
    );
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn lists_stations_in_directory_order() {
    let (status, body) = get(app(), "/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"stations":{"Retiro":75,"Munro":88,"Villa Rosa":126}}"#);
}

#[tokio::test]
async fn lists_full_line_by_default() {
    let source = MockTimetable::from_pages([]);
    let app = create_router(AppState::new(StationDirectory::belgrano_norte(), source));

    let (status, body) = get_json(app, "/stations").await;
    assert_eq!(status, StatusCode::OK);
    let stations = body["stations"].as_object().unwrap();
    assert_eq!(stations.len(), 23);
    assert_eq!(stations["Carapachay"], json!(130));
    assert_eq!(stations["Villa Rosa"], json!(126));
}

#[tokio::test]
async fn unknown_station_is_not_found() {
    let (status, body) = get_json(app(), "/stations/Constitucion").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Station not found" }));
}

#[tokio::test]
async fn all_departures_without_filter() {
    let (status, body) = get_json(app(), "/stations/Retiro").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "RETIRO": ["10:05", "10:20"],
            "Munro": ["10:30"]
        })
    );
}

#[tokio::test]
async fn retiro_filter() {
    let (status, body) = get_json(app(), "/stations/Retiro?direction=retiro").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "RETIRO": ["10:05", "10:20"] }));
}

#[tokio::test]
async fn other_filter() {
    let (status, body) = get_json(app(), "/stations/Retiro?direction=other").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Munro": ["10:30"] }));

    let (_, alias) = get_json(app(), "/stations/Retiro?direction=villarosa").await;
    assert_eq!(alias, body);
}

#[tokio::test]
async fn filters_split_unfiltered_keys() {
    let (_, all) = get_json(app(), "/stations/Retiro").await;
    let (_, retiro) = get_json(app(), "/stations/Retiro?direction=retiro").await;
    let (_, other) = get_json(app(), "/stations/Retiro?direction=other").await;

    let mut combined = keys(&retiro);
    combined.extend(keys(&other));
    combined.sort();
    assert_eq!(combined, keys(&all));
    assert!(keys(&retiro).iter().all(|k| !keys(&other).contains(k)));
}

#[tokio::test]
async fn unknown_direction_is_rejected() {
    let (status, _) = get(app(), "/stations/Retiro?direction=north").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_page_returns_message() {
    let (status, body) = get_json(app(), "/stations/Munro").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "No departure times found." }));
}

#[tokio::test]
async fn empty_page_with_direction_is_empty_mapping() {
    for direction in ["retiro", "other"] {
        let uri = format!("/stations/Munro?direction={direction}");
        let (status, body) = get_json(app(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }
}

#[tokio::test]
async fn upstream_failure_is_server_error() {
    let (status, body) = get_json(app(), "/stations/Villa%20Rosa").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Network error:"), "got {message}");
}

#[tokio::test]
async fn aggregate_omits_failed_stations() {
    let (status, body) = get(app(), "/stations/all/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"Retiro":{"RETIRO":["10:05","10:20"],"Munro":["10:30"]},"Munro":{}}"#
    );
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers() {
    let response = app()
        .oneshot(
            Request::get("/stations")
                .header(header::ORIGIN, "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:8080"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn other_origin_gets_no_cors_headers() {
    let response = app()
        .oneshot(
            Request::get("/stations")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn preflight_mirrors_requested_method_and_headers() {
    let response = app()
        .oneshot(
            Request::options("/stations/Retiro")
                .header(header::ORIGIN, "null")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-client")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "null");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-client");
}
