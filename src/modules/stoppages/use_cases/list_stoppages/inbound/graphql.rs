use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::stoppages::adapters::inbound::graphql_errors::gql_error;
use crate::modules::stoppages::application::errors::StoppageError;
use crate::modules::stoppages::core::civil::parse_civil_date;
use crate::modules::stoppages::core::sector::Sector;
use crate::modules::stoppages::use_cases::list_stoppages::inbound::http::to_views;
use crate::modules::stoppages::use_cases::list_stoppages::view::StoppageView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlStoppage {
    pub stoppage_id: String,
    pub sector: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub duration_ms: Option<i64>,
    pub elapsed_ms: i64,
    pub is_active: bool,
    pub reason: String,
    pub created_at: i64,
    pub created_by: Option<String>,
}

impl From<StoppageView> for GqlStoppage {
    fn from(v: StoppageView) -> Self {
        Self {
            stoppage_id: v.stoppage_id,
            sector: v.sector,
            start_date: v.start_date,
            start_time: v.start_time,
            end_date: v.end_date,
            end_time: v.end_time,
            duration_ms: v.duration_ms,
            elapsed_ms: v.elapsed_ms,
            is_active: v.is_active,
            reason: v.reason,
            created_at: v.created_at,
            created_by: v.created_by,
        }
    }
}

#[derive(Default)]
pub struct ListStoppagesQuery;

#[Object]
impl ListStoppagesQuery {
    /// Stoppages started on `date` (YYYY-MM-DD), today when omitted. Newest first.
    async fn stoppages_by_date(
        &self,
        context: &Context<'_>,
        date: Option<String>,
    ) -> GqlResult<Vec<GqlStoppage>> {
        let state = context.data_unchecked::<AppState>();
        let date = match date {
            Some(raw) => parse_civil_date(&raw).ok_or_else(|| {
                gql_error(StoppageError::Validation(format!(
                    "invalid date {raw:?}, expected YYYY-MM-DD"
                )))
            })?,
            None => state.stoppages.time().today(),
        };
        let stoppages = state.stoppages.query_by_date(date).await;
        Ok(to_views(state, stoppages).into_iter().map(Into::into).collect())
    }

    async fn active_stoppages(
        &self,
        context: &Context<'_>,
        sector: Option<String>,
    ) -> GqlResult<Vec<GqlStoppage>> {
        let state = context.data_unchecked::<AppState>();
        let stoppages = match sector {
            Some(raw) => {
                let sector = raw
                    .parse::<Sector>()
                    .map_err(|e| gql_error(StoppageError::Validation(e.to_string())))?;
                state.stoppages.query_active_by_sector(sector).await
            }
            None => state.stoppages.query_active().await,
        };
        Ok(to_views(state, stoppages).into_iter().map(Into::into).collect())
    }
}
