pub mod errors;
pub mod launcher;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use launcher::launch;
pub use startup::{run, App};
