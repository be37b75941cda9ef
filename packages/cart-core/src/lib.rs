//! Cart Core - shopping cart and promotion library.
//!
//! This crate provides the state and derivation logic behind the storefront
//! cart widget:
//!
//! - **Catalog**: fixed list of purchasable products
//! - **Cart controller**: line items with add/quantity/remove operations
//! - **Free-gift promotion**: progress toward a subtotal threshold
//! - **Button styles**: closed kind-to-style mapping for the widget chrome
//!
//! # Example
//!
//! ```rust
//! use cart_core::{catalog, CartController};
//!
//! let mut controller = CartController::new();
//!
//! // Add a catalog product (returns (CartItem, was_increment))
//! let laptop = catalog::get_product(1).unwrap();
//! let (line, _) = controller.add_product(&laptop);
//! println!("In cart: {} x{}", line.product.name, line.qty);
//!
//! // Derived values are recomputed from the current cart on every read
//! let summary = controller.summary();
//! println!("Subtotal: {} ({:.0}% to the free gift)", summary.subtotal, summary.percent);
//! ```

pub mod cart;
pub mod catalog;
pub mod promotion;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use types::{ApiResponse, Cart, CartItem, Product};

// Re-export main functionality
pub use cart::{CartController, CartSummary};
pub use catalog::{
    get_product, is_valid_product, list_products, product_ids, require_product, BUILTIN_PRODUCTS,
};
pub use promotion::{free_gift, GiftProgress, GiftPromotion, GIFT_THRESHOLD};
pub use style::{ButtonKind, ButtonStyle, ButtonVariant};

/// Error types for cart-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type for cart-core operations.
pub type Result<T> = std::result::Result<T, Error>;
