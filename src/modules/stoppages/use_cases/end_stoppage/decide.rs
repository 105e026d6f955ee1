// Pure decision function for closing a stoppage.
//
// Responsibilities
// - Only an active stoppage may be closed. A closed one is rejected, never re-closed.
// - The end date is the current civil date; duration is measured between the civil instants.
// - Never perform input or output.

use crate::modules::stoppages::core::civil::{duration_ms, format_civil_date, parse_civil_time};
use crate::modules::stoppages::core::state::{Stoppage, StoppageStatus};
use crate::modules::stoppages::use_cases::decision::{DecideError, Decision};
use chrono::{FixedOffset, NaiveDate, NaiveTime};

pub fn validate_end_time(end_time: &str) -> Result<NaiveTime, DecideError> {
    parse_civil_time(end_time).ok_or_else(|| DecideError::InvalidTime(end_time.to_string()))
}

pub fn decide_end(
    stoppage: &Stoppage,
    end_date: NaiveDate,
    end_time: NaiveTime,
    offset: &FixedOffset,
) -> Decision {
    match stoppage.status {
        StoppageStatus::Active => {
            let Some(duration_ms) = duration_ms(
                (stoppage.start_date, stoppage.start_time),
                (end_date, end_time),
                offset,
            ) else {
                return Decision::Rejected {
                    reason: DecideError::InvalidDate(format_civil_date(stoppage.start_date)),
                };
            };
            Decision::Accepted {
                stoppage: Stoppage {
                    status: StoppageStatus::Closed {
                        end_date,
                        end_time,
                        duration_ms,
                    },
                    ..stoppage.clone()
                },
            }
        }
        StoppageStatus::Closed { .. } => Decision::Rejected {
            reason: DecideError::AlreadyClosed(stoppage.stoppage_id.clone()),
        },
    }
}
