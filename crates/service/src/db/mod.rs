//! Helpers shared by the SeaORM repositories.

use sea_orm::{DbErr, SqlErr};

use crate::errors::ServiceError;

/// Primary-key or UNIQUE index violation reported by the driver.
pub fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        || e.to_string().contains("UNIQUE constraint failed")
}

/// Map a write error, turning uniqueness violations into `Conflict(msg)`.
pub fn map_write_err(e: DbErr, conflict_msg: &str) -> ServiceError {
    if is_unique_violation(&e) {
        ServiceError::Conflict(conflict_msg.to_string())
    } else {
        ServiceError::Db(e.to_string())
    }
}

pub fn map_db_err(e: DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}
