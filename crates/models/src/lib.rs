//! Entities, patch types and database wiring shared by the services.

pub mod errors;
pub mod db;
pub mod patch;
pub mod validation;
pub mod order;
pub mod student;
pub mod lesson;

#[cfg(test)]
mod tests;
