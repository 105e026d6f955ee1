use crate::modules::stoppages::adapters::outbound::stoppage_row::StoppageRow;
use crate::modules::stoppages::application::stoppage_store::StoppageStore;
use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::time::make_time_provider;
use std::sync::Arc;

pub fn make_test_state() -> (Arc<FixedClock>, AppState) {
    let (clock, time) = make_time_provider();
    let records = Arc::new(InMemoryRecordStore::<StoppageRow>::new());
    let stoppages = Arc::new(StoppageStore::new(records, time));
    (clock, AppState { stoppages })
}

pub fn make_offline_state() -> AppState {
    let (_, time) = make_time_provider();
    let mut records = InMemoryRecordStore::<StoppageRow>::new();
    records.toggle_offline();
    let stoppages = Arc::new(StoppageStore::new(Arc::new(records), time));
    AppState { stoppages }
}
