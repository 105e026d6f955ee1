use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::stoppages::adapters::inbound::graphql_errors::gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteStoppageMutation;

#[Object]
impl DeleteStoppageMutation {
    async fn delete_stoppage(&self, context: &Context<'_>, stoppage_id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .stoppages
            .delete(&stoppage_id)
            .await
            .map_err(gql_error)?;
        Ok(true)
    }
}
