use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::stoppages::adapters::inbound::graphql_errors::gql_error;
use crate::modules::stoppages::application::errors::StoppageError;
use crate::modules::stoppages::core::civil::{format_civil_date, parse_civil_date};
use crate::modules::stoppages::core::summary::{SectorSummary, StoppageSummary};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSectorSummary {
    pub sector: String,
    pub count: i64,
    pub active_count: i64,
    pub total_duration_ms: i64,
    pub average_duration_ms: i64,
    pub reasons: Vec<String>,
}

impl From<SectorSummary> for GqlSectorSummary {
    fn from(s: SectorSummary) -> Self {
        Self {
            sector: s.sector.to_string(),
            count: s.count as i64,
            active_count: s.active_count as i64,
            total_duration_ms: s.total_duration_ms,
            average_duration_ms: s.average_duration_ms,
            reasons: s.reasons,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlStoppageSummary {
    pub from: String,
    pub to: String,
    pub total_count: i64,
    pub total_duration_ms: i64,
    pub by_sector: Vec<GqlSectorSummary>,
}

impl From<StoppageSummary> for GqlStoppageSummary {
    fn from(s: StoppageSummary) -> Self {
        Self {
            from: format_civil_date(s.from),
            to: format_civil_date(s.to),
            total_count: s.total_count as i64,
            total_duration_ms: s.total_duration_ms,
            by_sector: s.by_sector.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct SummarizeStoppagesQuery;

#[Object]
impl SummarizeStoppagesQuery {
    async fn stoppage_summary(
        &self,
        context: &Context<'_>,
        from: String,
        to: String,
    ) -> GqlResult<GqlStoppageSummary> {
        let state = context.data_unchecked::<AppState>();
        let parse = |raw: &str| {
            parse_civil_date(raw).ok_or_else(|| {
                gql_error(StoppageError::Validation(format!(
                    "invalid date {raw:?}, expected YYYY-MM-DD"
                )))
            })
        };
        let summary = state
            .stoppages
            .summarize(parse(&from)?, parse(&to)?)
            .await
            .map_err(gql_error)?;
        Ok(summary.into())
    }
}
