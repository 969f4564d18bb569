use crate::modules::common::responses::{internal_error_res, SimpleError};
use http::StatusCode;
use sea_orm::DbErr;

/// Failures reported by the persistence gateways.
///
/// Wrapping `DbErr` is useful to safely return storage failures from
/// axum route handlers without worrying about leaking sensitive
/// information, as the `Into<(StatusCode, SimpleError)>` implementation
/// maps any unexpected database error to a generic internal error.
#[derive(Debug)]
pub enum GatewayError {
    /// the id on the request path disagrees with the id embedded in the payload
    IdMismatch,

    /// the target row does not exist
    NotFound,

    /// any other storage failure
    Db(DbErr),
}

impl From<DbErr> for GatewayError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) => GatewayError::NotFound,
            DbErr::RecordNotUpdated => GatewayError::NotFound,
            err => GatewayError::Db(err),
        }
    }
}

impl From<GatewayError> for (StatusCode, SimpleError) {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::IdMismatch => (
                StatusCode::BAD_REQUEST,
                SimpleError::from("id does not match the id of the record to update"),
            ),

            GatewayError::NotFound => (StatusCode::NOT_FOUND, SimpleError::entity_not_found()),

            GatewayError::Db(_) => internal_error_res(),
        }
    }
}
