use axum::{
    Json,
    extract::rejection::QueryRejection,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::stoppages::adapters::inbound::http_errors::{error_response, query_rejected};
use crate::modules::stoppages::application::errors::StoppageError;
use crate::modules::stoppages::core::civil::parse_civil_date;
use crate::modules::stoppages::core::sector::Sector;
use crate::modules::stoppages::core::state::Stoppage;
use crate::modules::stoppages::use_cases::list_stoppages::view::StoppageView;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListByDateParams {
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct ListActiveParams {
    pub sector: Option<String>,
}

pub async fn handle_by_date(
    State(state): State<AppState>,
    params: Result<Query<ListByDateParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejected(rejection),
    };
    let date = match params.date {
        Some(raw) => match parse_civil_date(&raw) {
            Some(date) => date,
            None => {
                return error_response(StoppageError::Validation(format!(
                    "invalid date {raw:?}, expected YYYY-MM-DD"
                )));
            }
        },
        None => state.stoppages.time().today(),
    };

    let stoppages = state.stoppages.query_by_date(date).await;
    Json(to_views(&state, stoppages)).into_response()
}

pub async fn handle_active(
    State(state): State<AppState>,
    params: Result<Query<ListActiveParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejected(rejection),
    };
    let stoppages = match params.sector {
        Some(raw) => match raw.parse::<Sector>() {
            Ok(sector) => state.stoppages.query_active_by_sector(sector).await,
            Err(error) => return error_response(StoppageError::Validation(error.to_string())),
        },
        None => state.stoppages.query_active().await,
    };
    Json(to_views(&state, stoppages)).into_response()
}

pub fn to_views(state: &AppState, stoppages: Vec<Stoppage>) -> Vec<StoppageView> {
    stoppages
        .into_iter()
        .map(|stoppage| {
            let elapsed_ms = state.stoppages.elapsed_ms(&stoppage);
            StoppageView::new(stoppage, elapsed_ms)
        })
        .collect()
}
