use axum::{
    Json,
    extract::rejection::QueryRejection,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::stoppages::adapters::inbound::http_errors::{error_response, query_rejected};
use crate::modules::stoppages::application::errors::StoppageError;
use crate::modules::stoppages::core::civil::parse_civil_date;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SummaryParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<SummaryParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejected(rejection),
    };
    let today = state.stoppages.time().today();
    let (from, to) = match (parse_or(params.from, today), parse_or(params.to, today)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(error), _) | (_, Err(error)) => return error_response(error),
    };

    match state.stoppages.summarize(from, to).await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error_response(error),
    }
}

fn parse_or(raw: Option<String>, default: NaiveDate) -> Result<NaiveDate, StoppageError> {
    match raw {
        Some(raw) => parse_civil_date(&raw).ok_or_else(|| {
            StoppageError::Validation(format!("invalid date {raw:?}, expected YYYY-MM-DD"))
        }),
        None => Ok(default),
    }
}
