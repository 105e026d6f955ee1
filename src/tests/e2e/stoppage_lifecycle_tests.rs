use crate::modules::stoppages::use_cases::list_stoppages::view::StoppageView;
use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn runs_a_stoppage_through_its_lifecycle_over_http() {
    let (clock, state) = make_test_state();
    let app = router(state);

    let (status, body) = send(
        &app,
        json_request("POST", "/stoppages", r#"{"sector":"Box-02","reason":"belt torn"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let started: StoppageView = serde_json::from_slice(&body).unwrap();

    clock.advance_ms(30 * 60_000);
    let (_, body) = send(&app, empty_request("GET", "/stoppages/active?sector=Box-02")).await;
    let active: Vec<StoppageView> = serde_json::from_slice(&body).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].elapsed_ms, 1_800_000);

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            &format!("/stoppages/{}/end", started.stoppage_id),
            r#"{"end_time":"08:30"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ended: StoppageView = serde_json::from_slice(&body).unwrap();
    assert_eq!(ended.duration_ms, Some(1_800_000));

    let (_, body) = send(&app, empty_request("GET", "/stoppages/active")).await;
    let active: Vec<StoppageView> = serde_json::from_slice(&body).unwrap();
    assert!(active.is_empty());

    let (_, body) = send(
        &app,
        empty_request("GET", "/stoppages/summary?from=2024-03-01&to=2024-03-01"),
    )
    .await;
    let summary: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(summary["by_sector"][1]["sector"], "Box-02");
    assert_eq!(summary["by_sector"][1]["total_duration_ms"], 1_800_000);

    let (status, _) = send(
        &app,
        empty_request("DELETE", &format!("/stoppages/{}", started.stoppage_id)),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, empty_request("GET", "/stoppages?date=2024-03-01")).await;
    let listed: Vec<StoppageView> = serde_json::from_slice(&body).unwrap();
    assert!(listed.is_empty());
}
