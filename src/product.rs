//! Product record stored in the repository

use derive_more::Display;

use crate::store::KeyedRepository;

/// Repository of products keyed by product id
pub type ProductRepository = KeyedRepository<i32, Product>;

/// A product; `id` mirrors the key it is stored under
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Product ID: {id}, Name: {name}")]
pub struct Product {
    pub id: i32,
    pub name: String,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
