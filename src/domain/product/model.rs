//! Product domain entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Owning category, if any
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields of a product (used for both create and update)
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub category_id: Option<i32>,
}

impl Product {
    /// Replace name and category reference wholesale; a `None` category
    /// detaches the product.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.category_id = input.category_id;
        self.updated_at = Utc::now();
    }
}
