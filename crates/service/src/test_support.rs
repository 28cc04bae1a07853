#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with migrations applied; every call is
/// isolated from the others.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}
