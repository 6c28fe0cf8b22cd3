/**
 * Book Request Types
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::{require, SharedError};

/// Body of POST /api/books and PUT /api/books/{id}
///
/// The owner always comes from the token, never from the body.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct BookRequest {
    pub title: String,
    pub description: String,
}

impl BookRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }
}
