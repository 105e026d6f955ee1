use crate::modules::stoppages::adapters::outbound::stoppage_row::StoppageRow;
use crate::modules::stoppages::application::stoppage_store::StoppageStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

pub type AppStoppageStore = StoppageStore<InMemoryRecordStore<StoppageRow>>;

#[derive(Clone)]
pub struct AppState {
    pub stoppages: Arc<AppStoppageStore>,
}
