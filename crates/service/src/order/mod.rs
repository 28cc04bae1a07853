//! Order store: repository abstraction (SeaORM and in-memory) and the
//! service applying validation on top of it.

pub mod repository;
pub mod service;

pub use service::OrderService;

pub(crate) const CREATE_CONFLICT: &str = "Order code or customer ID already exists";
pub(crate) const UPDATE_CONFLICT: &str = "Customer ID already exists";
