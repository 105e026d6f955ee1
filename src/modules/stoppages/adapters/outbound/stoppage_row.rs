// Flat row of the `stoppages` table and its mapping to the domain record.
//
// Responsibilities
// - Mirror the backing table column names.
// - Reject rows whose end fields contradict the active flag.

use crate::modules::stoppages::core::civil::{
    format_civil_date, format_civil_time, parse_civil_date, parse_stored_time,
};
use crate::modules::stoppages::core::sector::Sector;
use crate::modules::stoppages::core::state::{Stoppage, StoppageStatus};
use crate::shared::infrastructure::record_store::{Record, RecordStoreError};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoppageRow {
    pub id: String,
    pub sector: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub duration: Option<i64>,
    pub is_active: bool,
    pub reason: String,
    pub timestamp: i64,
    pub user_id: Option<String>,
}

impl Record for StoppageRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> i64 {
        self.timestamp
    }
}

impl From<&Stoppage> for StoppageRow {
    fn from(stoppage: &Stoppage) -> Self {
        let (end_date, end_time, duration) = match stoppage.status {
            StoppageStatus::Active => (None, None, None),
            StoppageStatus::Closed {
                end_date,
                end_time,
                duration_ms,
            } => (
                Some(format_civil_date(end_date)),
                Some(format_civil_time(end_time)),
                Some(duration_ms),
            ),
        };
        Self {
            id: stoppage.stoppage_id.clone(),
            sector: stoppage.sector.as_str().to_string(),
            start_date: format_civil_date(stoppage.start_date),
            start_time: format_civil_time(stoppage.start_time),
            end_date,
            end_time,
            duration,
            is_active: stoppage.is_active(),
            reason: stoppage.reason.clone(),
            timestamp: stoppage.created_at,
            user_id: stoppage.created_by.clone(),
        }
    }
}

impl TryFrom<StoppageRow> for Stoppage {
    type Error = RecordStoreError;

    fn try_from(row: StoppageRow) -> Result<Self, Self::Error> {
        let corrupt = |what: &str| RecordStoreError::Corrupt(format!("stoppage {}: {what}", row.id));

        let sector = Sector::from_stored(&row.sector).map_err(|e| corrupt(&e.to_string()))?;
        let start_date = parse_civil_date(&row.start_date).ok_or_else(|| corrupt("start_date"))?;
        let start_time = parse_stored_time(&row.start_time).ok_or_else(|| corrupt("start_time"))?;

        let status = match (row.is_active, &row.end_date, &row.end_time, row.duration) {
            (true, None, None, None) => StoppageStatus::Active,
            (false, Some(end_date), Some(end_time), Some(duration_ms)) => StoppageStatus::Closed {
                end_date: parse_civil_date(end_date).ok_or_else(|| corrupt("end_date"))?,
                end_time: parse_stored_time(end_time).ok_or_else(|| corrupt("end_time"))?,
                duration_ms,
            },
            _ => return Err(corrupt("end fields do not match the active flag")),
        };

        Ok(Stoppage {
            stoppage_id: row.id,
            sector,
            start_date,
            start_time,
            reason: row.reason,
            status,
            created_at: row.timestamp,
            created_by: row.user_id,
        })
    }
}
