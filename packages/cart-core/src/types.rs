//! Core data types for the cart system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable product as listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Unit price (non-negative)
    pub price: f64,
    /// Marks promotional items excluded from the subtotal and from removal
    #[serde(default)]
    pub is_gift: bool,
}

impl Product {
    /// Create a new regular product.
    pub fn new(id: u32, name: &str, price: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            is_gift: false,
        }
    }

    /// Create a promotional gift product (zero price, gift flag set).
    pub fn gift(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price: 0.0,
            is_gift: true,
        }
    }
}

/// A cart line: a product plus the held quantity.
///
/// The product fields are flattened so a serialized line reads as one flat
/// record, the shape the widget consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product this line holds
    #[serde(flatten)]
    pub product: Product,
    /// Held quantity, always >= 1 while the line is in a cart
    pub qty: u32,
}

impl CartItem {
    /// Create a new line holding one unit of the product.
    pub fn new(product: Product) -> Self {
        Self { product, qty: 1 }
    }

    /// The product id of this line.
    pub fn id(&self) -> u32 {
        self.product.id
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.qty)
    }
}

/// The cart: an ordered sequence of lines, unique by product id.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    /// Cart lines in insertion order
    pub items: Vec<CartItem>,
    /// When the cart first received an item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the cart was last mutated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units held across all lines.
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.qty).sum()
    }

    /// Find a line by product id.
    pub fn find(&self, id: u32) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Find a mutable line by product id.
    pub fn find_mut(&mut self, id: u32) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Whether a line with the given product id is present.
    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }
}

/// API response wrapper for CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let product = Product::new(1, "Laptop", 500.0);
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, 500.0);
        assert!(!product.is_gift);
    }

    #[test]
    fn test_product_gift() {
        let gift = Product::gift(99, "Wireless Mouse");
        assert_eq!(gift.price, 0.0);
        assert!(gift.is_gift);
    }

    #[test]
    fn test_cart_item_line_total() {
        let mut item = CartItem::new(Product::new(4, "Smartwatch", 150.0));
        assert_eq!(item.qty, 1);
        assert_eq!(item.line_total(), 150.0);

        item.qty = 3;
        assert_eq!(item.line_total(), 450.0);
    }

    #[test]
    fn test_cart_counts() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.unit_count(), 0);

        cart.items.push(CartItem::new(Product::new(1, "Laptop", 500.0)));
        let mut phones = CartItem::new(Product::new(2, "Smartphone", 300.0));
        phones.qty = 2;
        cart.items.push(phones);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.unit_count(), 3);
    }

    #[test]
    fn test_cart_find() {
        let mut cart = Cart::new();
        cart.items.push(CartItem::new(Product::new(3, "Headphones", 100.0)));

        assert!(cart.contains(3));
        assert_eq!(cart.find(3).unwrap().product.name, "Headphones");
        assert!(cart.find(4).is_none());
    }

    #[test]
    fn test_cart_item_flat_json() {
        let item = CartItem::new(Product::new(1, "Laptop", 500.0));
        let value = serde_json::to_value(&item).unwrap();

        // Product fields are flattened alongside qty
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Laptop");
        assert_eq!(value["qty"], 1);
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));
    }
}
