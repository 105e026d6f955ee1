use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::stoppages::adapters::inbound::graphql_errors::gql_error;
use crate::modules::stoppages::use_cases::list_stoppages::inbound::graphql::GqlStoppage;
use crate::modules::stoppages::use_cases::list_stoppages::view::StoppageView;
use crate::modules::stoppages::use_cases::start_stoppage::command::StartStoppage;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartStoppageMutation;

#[Object]
impl StartStoppageMutation {
    /// Opens a stoppage. Start date and time default to the current civil date and time.
    async fn start_stoppage(
        &self,
        context: &Context<'_>,
        sector: String,
        reason: String,
        start_date: Option<String>,
        start_time: Option<String>,
        created_by: Option<String>,
    ) -> GqlResult<GqlStoppage> {
        let state = context.data_unchecked::<AppState>();
        let time = state.stoppages.time();
        let now = time.now();

        let command = StartStoppage {
            sector,
            start_date: start_date.unwrap_or_else(|| time.civil_date(&now)),
            start_time: start_time.unwrap_or_else(|| time.civil_time(&now)),
            reason,
            created_by,
        };

        let stoppage = state.stoppages.start(command).await.map_err(gql_error)?;
        let elapsed_ms = state.stoppages.elapsed_ms(&stoppage);
        Ok(StoppageView::new(stoppage, elapsed_ms).into())
    }
}
