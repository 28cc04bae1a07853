//! Storage abstractions for service layer
//!
//! Contains the in-memory table backing the substitutable repositories.

pub mod memory_table;
