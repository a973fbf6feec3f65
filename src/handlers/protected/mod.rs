pub mod holdings;
pub mod portfolios;

use uuid::Uuid;

use crate::error::ApiError;

/// Path identifiers are UUIDs; parse failures surface as validation errors
/// with the standard JSON error envelope rather than the router's default
/// plain-text rejection.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::validation(format!("Invalid {} id", what)))
}
