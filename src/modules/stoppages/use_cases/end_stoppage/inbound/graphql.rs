use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::stoppages::adapters::inbound::graphql_errors::gql_error;
use crate::modules::stoppages::use_cases::end_stoppage::command::EndStoppage;
use crate::modules::stoppages::use_cases::list_stoppages::inbound::graphql::GqlStoppage;
use crate::modules::stoppages::use_cases::list_stoppages::view::StoppageView;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EndStoppageMutation;

#[Object]
impl EndStoppageMutation {
    async fn end_stoppage(
        &self,
        context: &Context<'_>,
        stoppage_id: String,
        end_time: Option<String>,
    ) -> GqlResult<GqlStoppage> {
        let state = context.data_unchecked::<AppState>();
        let end_time = end_time.unwrap_or_else(|| {
            let time = state.stoppages.time();
            time.civil_time(&time.now())
        });

        let stoppage = state
            .stoppages
            .end(EndStoppage {
                stoppage_id,
                end_time,
            })
            .await
            .map_err(gql_error)?;
        let elapsed_ms = state.stoppages.elapsed_ms(&stoppage);
        Ok(StoppageView::new(stoppage, elapsed_ms).into())
    }
}
