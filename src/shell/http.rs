use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::modules::stoppages::use_cases::delete_stoppage::inbound::http as delete_http;
use crate::modules::stoppages::use_cases::end_stoppage::inbound::http as end_http;
use crate::modules::stoppages::use_cases::list_stoppages::inbound::http as list_http;
use crate::modules::stoppages::use_cases::start_stoppage::inbound::http as start_http;
use crate::modules::stoppages::use_cases::summarize_stoppages::inbound::http as summary_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/stoppages",
            post(start_http::handle).get(list_http::handle_by_date),
        )
        .route("/stoppages/active", get(list_http::handle_active))
        .route("/stoppages/summary", get(summary_http::handle))
        .route("/stoppages/{stoppage_id}", delete(delete_http::handle))
        .route("/stoppages/{stoppage_id}/end", post(end_http::handle))
        .with_state(state)
}
