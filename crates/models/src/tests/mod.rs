/// Schema and connection tests against in-memory SQLite
pub mod db_tests;

/// CRUD operations tests for all entities
pub mod crud_tests;
