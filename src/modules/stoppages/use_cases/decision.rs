use crate::modules::stoppages::core::state::Stoppage;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("unknown sector: {0:?}")]
    UnknownSector(String),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("reason must not be empty")]
    EmptyReason,

    #[error("stoppage {0} is already closed")]
    AlreadyClosed(String),
}

#[derive(Debug)]
pub enum Decision {
    Accepted { stoppage: Stoppage },
    Rejected { reason: DecideError },
}
