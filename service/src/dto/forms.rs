use rocket_okapi::okapi::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Body of `PUT /holes/<hole_id>`.
#[derive(Debug, JsonSchema, Serialize, Deserialize)]
pub struct ParUpdate {
    pub par: i32,
}

/// Body of `PUT /users/<user_id>/holes/<hole_id>/score`.
#[derive(Debug, JsonSchema, Serialize, Deserialize)]
pub struct SipsUpdate {
    pub sips: i32,
}

#[derive(Debug, JsonSchema, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl From<&str> for Message {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
