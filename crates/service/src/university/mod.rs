//! University registration: students and lessons, each in its own table
//! with store-assigned ids.

pub mod repository;
pub mod service;

pub use service::{LessonService, StudentService};
