//! Cache types for catalog API responses.

use super::types::{BlogPost, Doctor, Pet, Product};

/// Cache key for catalog reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Products,
    Product(i64),
    Doctors,
    Doctor(i64),
    Pets,
    Pet(i64),
    Posts,
    Post(i64),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Vec<Product>),
    Product(Box<Product>),
    Doctors(Vec<Doctor>),
    Doctor(Box<Doctor>),
    Pets(Vec<Pet>),
    Pet(Box<Pet>),
    Posts(Vec<BlogPost>),
    Post(Box<BlogPost>),
}
