// Pure decision function for opening a stoppage.
//
// Responsibilities
// - Validate sector, start date, start time and reason.
// - Produce an active stoppage. The identifier is left empty for the record store to assign.
// - Never perform input or output.

use crate::modules::stoppages::core::civil::{parse_civil_date, parse_civil_time};
use crate::modules::stoppages::core::sector::Sector;
use crate::modules::stoppages::core::state::{Stoppage, StoppageStatus};
use crate::modules::stoppages::use_cases::decision::{DecideError, Decision};
use crate::modules::stoppages::use_cases::start_stoppage::command::StartStoppage;

pub fn decide_start(command: StartStoppage, created_at: i64) -> Decision {
    match validate(command, created_at) {
        Ok(stoppage) => Decision::Accepted { stoppage },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn validate(command: StartStoppage, created_at: i64) -> Result<Stoppage, DecideError> {
    let sector: Sector = command
        .sector
        .parse()
        .map_err(|_| DecideError::UnknownSector(command.sector.clone()))?;
    let start_date = parse_civil_date(&command.start_date)
        .ok_or_else(|| DecideError::InvalidDate(command.start_date.clone()))?;
    let start_time = parse_civil_time(&command.start_time)
        .ok_or_else(|| DecideError::InvalidTime(command.start_time.clone()))?;
    let reason = command.reason.trim();
    if reason.is_empty() {
        return Err(DecideError::EmptyReason);
    }

    Ok(Stoppage {
        stoppage_id: String::new(),
        sector,
        start_date,
        start_time,
        reason: reason.to_string(),
        status: StoppageStatus::Active,
        created_at,
        created_by: command.created_by,
    })
}
