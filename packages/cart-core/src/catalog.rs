//! Built-in product catalog.
//!
//! The catalog is fixed and read-only; the cart consumes it but never
//! mutates it.

use crate::types::Product;
use crate::{Error, Result};
use std::sync::LazyLock;

/// Built-in products, in display order.
pub static BUILTIN_PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product::new(1, "Laptop", 500.0),
        Product::new(2, "Smartphone", 300.0),
        Product::new(3, "Headphones", 100.0),
        Product::new(4, "Smartwatch", 150.0),
    ]
});

/// List all catalog products in display order.
pub fn list_products() -> Vec<Product> {
    BUILTIN_PRODUCTS.clone()
}

/// Get a specific product by id.
pub fn get_product(id: u32) -> Option<Product> {
    BUILTIN_PRODUCTS.iter().find(|p| p.id == id).cloned()
}

/// Get a product by id, or an error when the id is unknown.
pub fn require_product(id: u32) -> Result<Product> {
    get_product(id).ok_or(Error::ProductNotFound(id))
}

/// Validate that a product id exists in the catalog.
pub fn is_valid_product(id: u32) -> bool {
    BUILTIN_PRODUCTS.iter().any(|p| p.id == id)
}

/// Get all catalog product ids.
pub fn product_ids() -> Vec<u32> {
    BUILTIN_PRODUCTS.iter().map(|p| p.id).collect()
}
