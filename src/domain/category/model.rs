//! Category domain entity

use chrono::{DateTime, Utc};

/// Product category
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields of a category (used for both create and update)
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInput {
    pub name: String,
}

impl Category {
    /// Overwrite the mutable fields, keeping identity and creation time.
    pub fn apply(&mut self, input: CategoryInput) {
        self.name = input.name;
        self.updated_at = Utc::now();
    }
}
