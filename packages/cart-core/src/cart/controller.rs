//! Cart state transitions.

use crate::cart::summary::CartSummary;
use crate::promotion::GiftPromotion;
use crate::types::{Cart, CartItem, Product};
use chrono::Utc;

/// Owns the cart state and applies the user-triggered operations.
///
/// Each operation runs to completion and leaves the cart in a consistent
/// snapshot; derived values are recomputed from the snapshot on every read.
/// All operations are total: the only non-mutating outcomes are no-ops
/// (removing the gift, targeting an absent id), which are normal control
/// flow, not errors.
#[derive(Debug, Default)]
pub struct CartController {
    /// Current cart snapshot
    cart: Cart,
    /// Free-gift promotion configuration
    promotion: GiftPromotion,
}

impl CartController {
    /// Create a controller with an empty cart and the default promotion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a custom promotion.
    pub fn with_promotion(promotion: GiftPromotion) -> Self {
        Self {
            cart: Cart::new(),
            promotion,
        }
    }

    /// Get a reference to the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get all cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.cart.items
    }

    /// Find a line by product id.
    pub fn find_item(&self, id: u32) -> Option<&CartItem> {
        self.cart.find(id)
    }

    /// Get the promotion configuration.
    pub fn promotion(&self) -> &GiftPromotion {
        &self.promotion
    }

    /// Add one unit of a product to the cart.
    ///
    /// If a line with the same id exists, its quantity increments by 1;
    /// otherwise a new qty-1 line is appended at the end. Any well-formed
    /// product is accepted; catalog membership is not checked.
    ///
    /// Returns a snapshot of the affected line and whether an existing line
    /// was incremented (true) or a new one appended (false).
    pub fn add_product(&mut self, product: &Product) -> (CartItem, bool) {
        let line = if let Some(item) = self.cart.find_mut(product.id) {
            item.qty += 1;
            (item.clone(), true)
        } else {
            let item = CartItem::new(product.clone());
            self.cart.items.push(item.clone());
            (item, false)
        };
        self.touch();
        line
    }

    /// Adjust the quantity of the line matching `id` by `delta`.
    ///
    /// If the resulting quantity stays positive, the line is updated and a
    /// snapshot returned. Otherwise the line is dropped entirely and `None`
    /// returned; an id not in the cart is a no-op returning `None`. Only the
    /// targeted line is touched.
    pub fn change_quantity(&mut self, id: u32, delta: i64) -> Option<CartItem> {
        let idx = self.cart.items.iter().position(|item| item.id() == id)?;

        let next = i64::from(self.cart.items[idx].qty) + delta;
        let result = if next > 0 {
            self.cart.items[idx].qty = next as u32;
            Some(self.cart.items[idx].clone())
        } else {
            self.cart.items.remove(idx);
            None
        };
        self.touch();
        result
    }

    /// Remove the whole line matching `id`, regardless of its quantity.
    ///
    /// The gift cannot be manually removed: when `id` equals the promotion's
    /// gift id this is a no-op. Returns the removed line, or `None` for the
    /// gift guard and for ids not in the cart.
    pub fn remove_item(&mut self, id: u32) -> Option<CartItem> {
        if id == self.promotion.gift.id {
            return None;
        }

        let idx = self.cart.items.iter().position(|item| item.id() == id)?;
        let removed = self.cart.items.remove(idx);
        self.touch();
        Some(removed)
    }

    /// Empty the cart (session reset).
    pub fn clear(&mut self) {
        self.cart.items.clear();
        self.touch();
    }

    /// Derive the display summary from the current cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::compute(&self.cart, &self.promotion)
    }

    /// The cart lines as the view renders them: the stored lines, with the
    /// gift appended as a qty-1 line while the threshold is met. The gift is
    /// never materialized into the stored cart.
    pub fn display_lines(&self) -> Vec<CartItem> {
        let mut lines = self.cart.items.clone();
        if self.promotion.progress_for(&self.cart).eligible {
            lines.push(CartItem::new(self.promotion.gift.clone()));
        }
        lines
    }

    fn touch(&mut self) {
        let now = Utc::now();
        if self.cart.created_at.is_none() {
            self.cart.created_at = Some(now);
        }
        self.cart.updated_at = Some(now);
    }
}
