use crate::modules::stoppages::use_cases::decision::DecideError;
use crate::shared::infrastructure::record_store::RecordStoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoppageError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("stoppage {0} not found")]
    NotFound(String),

    #[error("stoppage {stoppage_id} is not active")]
    InvalidState { stoppage_id: String },

    #[error(transparent)]
    StoreUnavailable(RecordStoreError),
}

impl From<DecideError> for StoppageError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::AlreadyClosed(stoppage_id) => StoppageError::InvalidState { stoppage_id },
            other => StoppageError::Validation(other.to_string()),
        }
    }
}

impl From<RecordStoreError> for StoppageError {
    fn from(error: RecordStoreError) -> Self {
        match error {
            RecordStoreError::NotFound(id) => StoppageError::NotFound(id),
            other => StoppageError::StoreUnavailable(other),
        }
    }
}
