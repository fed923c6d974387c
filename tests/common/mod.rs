#![allow(dead_code)]

//! Test infrastructure for the activity API tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use mergington_activities::models::Activity;
use mergington_activities::registry::ActivityRegistry;
use mergington_activities::web::build_router;

/// Router over the fixed seed set.
pub fn seeded_app() -> Router {
    build_router(ActivityRegistry::seeded().into_shared())
}

/// Router over a single activity with the given capacity and roster.
pub fn single_activity_app(name: &str, max_participants: usize, participants: &[&str]) -> Router {
    let mut registry = ActivityRegistry::new();
    registry.insert(
        name,
        Activity {
            description: "Test activity".to_string(),
            schedule: "Mondays, 3:00 PM - 4:00 PM".to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    );
    build_router(registry.into_shared())
}

/// Send a bodyless request and collect the response as (status, JSON body).
/// Non-JSON bodies (extractor rejections, redirects) come back as Null.
pub async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Current roster of `activity` as the listing endpoint reports it.
pub async fn roster(app: Router, activity: &str) -> Vec<String> {
    let (status, json) = send(app, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);

    json[activity]["participants"]
        .as_array()
        .expect("participants array")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
