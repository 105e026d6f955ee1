use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::stoppages::use_cases::delete_stoppage::inbound::graphql::DeleteStoppageMutation;
use crate::modules::stoppages::use_cases::end_stoppage::inbound::graphql::EndStoppageMutation;
use crate::modules::stoppages::use_cases::list_stoppages::inbound::graphql::ListStoppagesQuery;
use crate::modules::stoppages::use_cases::start_stoppage::inbound::graphql::StartStoppageMutation;
use crate::modules::stoppages::use_cases::summarize_stoppages::inbound::graphql::SummarizeStoppagesQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListStoppagesQuery, SummarizeStoppagesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    StartStoppageMutation,
    EndStoppageMutation,
    DeleteStoppageMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
