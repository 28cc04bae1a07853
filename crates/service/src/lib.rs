//! Service layer providing business-oriented CRUD operations on top of models.
//! - Repositories are traits with a SeaORM and an in-memory implementation.
//! - Services validate input and record metrics/logs per operation.

pub mod errors;
pub mod db;
pub mod storage;
pub mod order;
pub mod university;
mod observe;
#[cfg(test)]
pub mod test_support;
