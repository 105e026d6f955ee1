use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::stoppages::adapters::inbound::http_errors::error_response;
use crate::modules::stoppages::use_cases::end_stoppage::command::EndStoppage;
use crate::modules::stoppages::use_cases::list_stoppages::view::StoppageView;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EndStoppageBody {
    pub end_time: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(stoppage_id): Path<String>,
    body: Result<Json<EndStoppageBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let end_time = body.end_time.unwrap_or_else(|| {
        let time = state.stoppages.time();
        time.civil_time(&time.now())
    });
    let command = EndStoppage {
        stoppage_id,
        end_time,
    };

    match state.stoppages.end(command).await {
        Ok(stoppage) => {
            let elapsed_ms = state.stoppages.elapsed_ms(&stoppage);
            Json(StoppageView::new(stoppage, elapsed_ms)).into_response()
        }
        Err(error) => error_response(error),
    }
}
