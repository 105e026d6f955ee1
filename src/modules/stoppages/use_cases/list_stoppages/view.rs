use crate::modules::stoppages::core::civil::{format_civil_date, format_civil_time};
use crate::modules::stoppages::core::state::Stoppage;

/// Read shape of a stoppage, with the live elapsed time sampled when the view was built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoppageView {
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

impl StoppageView {
    pub fn new(stoppage: Stoppage, elapsed_ms: i64) -> Self {
        Self {
            sector: stoppage.sector.to_string(),
            start_date: format_civil_date(stoppage.start_date),
            start_time: format_civil_time(stoppage.start_time),
            end_date: stoppage.end_date().map(format_civil_date),
            end_time: stoppage.end_time().map(format_civil_time),
            duration_ms: stoppage.duration_ms(),
            elapsed_ms,
            is_active: stoppage.is_active(),
            stoppage_id: stoppage.stoppage_id,
            reason: stoppage.reason,
            created_at: stoppage.created_at,
            created_by: stoppage.created_by,
        }
    }
}
