use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::stoppages::adapters::inbound::http_errors::error_response;
use crate::modules::stoppages::use_cases::list_stoppages::view::StoppageView;
use crate::modules::stoppages::use_cases::start_stoppage::command::StartStoppage;
use crate::shell::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Deserialize)]
pub struct StartStoppageBody {
    pub sector: String,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub reason: String,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<StartStoppageBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let time = state.stoppages.time();
    let now = time.now();
    let created_by = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from);

    let command = StartStoppage {
        sector: body.sector,
        start_date: body.start_date.unwrap_or_else(|| time.civil_date(&now)),
        start_time: body.start_time.unwrap_or_else(|| time.civil_time(&now)),
        reason: body.reason,
        created_by,
    };

    match state.stoppages.start(command).await {
        Ok(stoppage) => {
            let elapsed_ms = state.stoppages.elapsed_ms(&stoppage);
            (
                StatusCode::CREATED,
                Json(StoppageView::new(stoppage, elapsed_ms)),
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod start_stoppage_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::modules::stoppages::use_cases::list_stoppages::view::StoppageView;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_offline_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/stoppages", post(handle))
            .with_state(state)
    }

    fn post_json(body: &'static str) -> Request<Body> {
        Request::post("/stoppages")
            .header("content-type", "application/json")
            .header("x-user-id", "operator-0001")
            .body(Body::from(body))
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_201_with_the_started_stoppage() {
        let (_, state) = make_test_state();
        let body = r#"{"sector":"Box-01","start_date":"2024-03-01","start_time":"07:50","reason":"jam"}"#;

        let response = app(state.clone()).oneshot(post_json(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let view: StoppageView = serde_json::from_slice(&bytes).unwrap();
        assert!(!view.stoppage_id.is_empty());
        assert!(view.is_active);
        assert_eq!(view.start_time, "07:50");
        assert_eq!(view.elapsed_ms, 600_000);
        assert_eq!(view.created_by.as_deref(), Some("operator-0001"));
        assert_eq!(state.stoppages.query_active().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_default_the_start_to_the_current_civil_time() {
        let (_, state) = make_test_state();
        let body = r#"{"sector":"Packaging","reason":"no boxes"}"#;

        let response = app(state).oneshot(post_json(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let view: StoppageView = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(view.start_date, "2024-03-01");
        assert_eq!(view.start_time, "08:00");
        assert_eq!(view.sector, "Packaging");
    }

    #[rstest]
    #[case::unknown_sector(r#"{"sector":"Forno","reason":"jam"}"#)]
    #[case::empty_reason(r#"{"sector":"Box-01","reason":"  "}"#)]
    #[case::bad_time(r#"{"sector":"Box-01","start_time":"8h","reason":"jam"}"#)]
    #[case::date_past_the_window(
        r#"{"sector":"Box-01","start_date":"+262142-12-31","start_time":"23:59","reason":"jam"}"#
    )]
    #[case::not_json("not-json")]
    #[tokio::test]
    async fn it_should_return_422_on_invalid_input(#[case] body: &'static str) {
        let (_, state) = make_test_state();

        let response = app(state.clone()).oneshot(post_json(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.stoppages.query_active().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_503_when_the_record_store_is_offline() {
        let body = r#"{"sector":"Box-01","reason":"jam"}"#;

        let response = app(make_offline_state())
            .oneshot(post_json(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
