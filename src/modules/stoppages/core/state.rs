// Stoppage is the canonical domain record for one downtime interval.
//
// Notes
// - The lifecycle is encoded in StoppageStatus: a stoppage either has no end fields at all,
//   or has end date, end time and duration together.
// - created_at is epoch milliseconds.

use crate::modules::stoppages::core::sector::Sector;
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoppageStatus {
    Active,
    Closed {
        end_date: NaiveDate,
        end_time: NaiveTime,
        duration_ms: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stoppage {
    pub stoppage_id: String,
    pub sector: Sector,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub reason: String,
    pub status: StoppageStatus,
    pub created_at: i64,
    pub created_by: Option<String>,
}

impl Stoppage {
    pub fn is_active(&self) -> bool {
        matches!(self.status, StoppageStatus::Active)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        match self.status {
            StoppageStatus::Closed { end_date, .. } => Some(end_date),
            StoppageStatus::Active => None,
        }
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        match self.status {
            StoppageStatus::Closed { end_time, .. } => Some(end_time),
            StoppageStatus::Active => None,
        }
    }

    pub fn duration_ms(&self) -> Option<i64> {
        match self.status {
            StoppageStatus::Closed { duration_ms, .. } => Some(duration_ms),
            StoppageStatus::Active => None,
        }
    }
}
