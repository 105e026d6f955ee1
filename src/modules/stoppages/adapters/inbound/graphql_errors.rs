use crate::modules::stoppages::application::errors::StoppageError;
use async_graphql::ErrorExtensions;

pub fn error_code(error: &StoppageError) -> &'static str {
    match error {
        StoppageError::Validation(_) => "VALIDATION",
        StoppageError::NotFound(_) => "NOT_FOUND",
        StoppageError::InvalidState { .. } => "INVALID_STATE",
        StoppageError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
    }
}

/// GraphQL error carrying the error kind under `extensions.code`.
pub fn gql_error(error: StoppageError) -> async_graphql::Error {
    let code = error_code(&error);
    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| extensions.set("code", code))
}
