use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// `{"message": ...}` body used by greetings and delete confirmations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Confirmation for inserts into auto-increment tables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub message: String,
    pub id: i32,
}

/// Error body shared by every service: `{"error": kind, "message": detail}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
