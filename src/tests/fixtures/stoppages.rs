use crate::modules::stoppages::adapters::outbound::stoppage_row::StoppageRow;
use crate::modules::stoppages::core::sector::Sector;
use crate::modules::stoppages::core::state::{Stoppage, StoppageStatus};
use chrono::{NaiveDate, NaiveTime};

pub const FIXED_CREATED_AT: i64 = 1_709_290_800_000;

pub fn make_active_stoppage() -> Stoppage {
    Stoppage {
        stoppage_id: "st-fixed-0001".to_string(),
        sector: Sector::Box01,
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        reason: "jam".to_string(),
        status: StoppageStatus::Active,
        created_at: FIXED_CREATED_AT,
        created_by: Some("operator-0001".to_string()),
    }
}

pub fn make_active_row() -> StoppageRow {
    StoppageRow {
        id: "st-fixed-0001".to_string(),
        sector: "Box-01".to_string(),
        start_date: "2024-03-01".to_string(),
        start_time: "08:00".to_string(),
        end_date: None,
        end_time: None,
        duration: None,
        is_active: true,
        reason: "jam".to_string(),
        timestamp: FIXED_CREATED_AT,
        user_id: Some("operator-0001".to_string()),
    }
}
