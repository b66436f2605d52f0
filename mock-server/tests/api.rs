use std::collections::HashMap;

use axum::http::{Request, StatusCode};
use devdays_mock_server::{app, app_with, Catalog, Session, Speaker};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- program ---

#[tokio::test]
async fn program_for_known_day() {
    let resp = app().oneshot(get("/api/program/127")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let sessions: Vec<Session> = body_json(resp).await;
    assert_eq!(sessions.len(), 4);
    assert!(sessions.iter().any(|s| s.title == "Opening keynote"));
}

#[tokio::test]
async fn program_is_served_unsorted() {
    let resp = app().oneshot(get("/api/program/127")).await.unwrap();

    let sessions: Vec<Session> = body_json(resp).await;
    let starts: Vec<&str> = sessions.iter().map(|s| s.start_time.as_str()).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_ne!(starts, sorted);
}

#[tokio::test]
async fn program_unknown_id_returns_404() {
    let resp = app().oneshot(get("/api/program/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn program_non_numeric_id_returns_400() {
    let resp = app().oneshot(get("/api/program/undefined")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- speakers ---

#[tokio::test]
async fn speakers_in_requested_order() {
    let resp = app().oneshot(get("/api/users/3,1,2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let speakers: Vec<Speaker> = body_json(resp).await;
    let ids: Vec<&str> = speakers.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[tokio::test]
async fn speakers_skip_unknown_ids() {
    let resp = app().oneshot(get("/api/users/1,404,2")).await.unwrap();

    let speakers: Vec<Speaker> = body_json(resp).await;
    assert_eq!(speakers.len(), 2);
}

#[tokio::test]
async fn speakers_empty_segment_returns_empty_list() {
    let resp = app().oneshot(get("/api/users/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let speakers: Vec<Speaker> = body_json(resp).await;
    assert!(speakers.is_empty());
}

// --- custom catalog ---

#[tokio::test]
async fn app_with_serves_given_catalog() {
    let mut programs = HashMap::new();
    programs.insert(
        1,
        vec![Session {
            id: "x".to_string(),
            title: "Only talk".to_string(),
            start_time: "12:00".to_string(),
            end_time: "13:00".to_string(),
            room: "Main".to_string(),
            speakers: Vec::new(),
        }],
    );
    let router = app_with(Catalog {
        programs,
        speakers: HashMap::new(),
    });

    let resp = router.clone().oneshot(get("/api/program/1")).await.unwrap();
    let sessions: Vec<Session> = body_json(resp).await;
    assert_eq!(sessions.len(), 1);

    let resp = router.oneshot(get("/api/program/127")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
