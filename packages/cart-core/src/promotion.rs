//! Free-gift promotion: threshold configuration and progress derivation.

use crate::types::{Cart, Product};
use serde::{Deserialize, Serialize};

/// Subtotal at which the free gift becomes eligible, in currency units.
pub const GIFT_THRESHOLD: f64 = 1000.0;

/// The designated free-gift product.
pub fn free_gift() -> Product {
    Product::gift(99, "Wireless Mouse")
}

/// Promotion configuration: a subtotal threshold and the gift it unlocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiftPromotion {
    /// Subtotal required for the gift
    pub threshold: f64,
    /// The gift product itself
    pub gift: Product,
}

impl Default for GiftPromotion {
    fn default() -> Self {
        Self {
            threshold: GIFT_THRESHOLD,
            gift: free_gift(),
        }
    }
}

impl GiftPromotion {
    /// Create a promotion with the default threshold and gift.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a promotion with a custom threshold and gift.
    pub fn with_config(threshold: f64, gift: Product) -> Self {
        Self { threshold, gift }
    }

    /// Sum of `price * qty` over all non-gift lines.
    ///
    /// A line is excluded by identity check against the gift id, not by
    /// trusting the flag alone, so the gift contributes nothing even if its
    /// price were nonzero.
    pub fn subtotal(&self, cart: &Cart) -> f64 {
        cart.items
            .iter()
            .filter(|item| item.id() != self.gift.id && !item.product.is_gift)
            .map(|item| item.line_total())
            .sum()
    }

    /// Derive progress toward the threshold from a subtotal.
    pub fn progress(&self, subtotal: f64) -> GiftProgress {
        let percent = (subtotal / self.threshold * 100.0).min(100.0);
        GiftProgress {
            subtotal,
            percent,
            eligible: subtotal >= self.threshold,
            remaining: (self.threshold - subtotal).max(0.0),
        }
    }

    /// Derive progress directly from a cart snapshot.
    pub fn progress_for(&self, cart: &Cart) -> GiftProgress {
        self.progress(self.subtotal(cart))
    }
}

/// Derived progress toward the free gift. Never stored; recomputed from the
/// current cart on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiftProgress {
    /// Subtotal over non-gift lines
    pub subtotal: f64,
    /// Subtotal scaled against the threshold, clamped to [0, 100]
    pub percent: f64,
    /// Whether the subtotal has reached the threshold
    pub eligible: bool,
    /// Amount still needed, clamped at zero
    pub remaining: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CartItem;
    use approx::assert_relative_eq;

    fn cart_with(lines: Vec<(Product, u32)>) -> Cart {
        let mut cart = Cart::new();
        for (product, qty) in lines {
            let mut item = CartItem::new(product);
            item.qty = qty;
            cart.items.push(item);
        }
        cart
    }

    #[test]
    fn test_subtotal_empty_cart() {
        let promo = GiftPromotion::new();
        assert_eq!(promo.subtotal(&Cart::new()), 0.0);
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let promo = GiftPromotion::new();
        let cart = cart_with(vec![
            (Product::new(1, "Laptop", 500.0), 1),
            (Product::new(4, "Smartwatch", 150.0), 2),
        ]);
        assert_eq!(promo.subtotal(&cart), 800.0);
    }

    #[test]
    fn test_subtotal_excludes_gift_by_id() {
        // Gift line with a nonzero price and no flag: still excluded,
        // because exclusion checks the gift id
        let promo = GiftPromotion::new();
        let priced_gift = Product::new(99, "Wireless Mouse", 40.0);

        let cart = cart_with(vec![
            (Product::new(1, "Laptop", 500.0), 1),
            (priced_gift, 1),
        ]);
        assert_eq!(promo.subtotal(&cart), 500.0);
    }

    #[test]
    fn test_subtotal_excludes_flagged_gift() {
        let promo = GiftPromotion::new();
        let mut flagged = Product::new(77, "Sticker Pack", 5.0);
        flagged.is_gift = true;

        let cart = cart_with(vec![
            (Product::new(3, "Headphones", 100.0), 1),
            (flagged, 1),
        ]);
        assert_eq!(promo.subtotal(&cart), 100.0);
    }

    #[test]
    fn test_progress_below_threshold() {
        let promo = GiftPromotion::new();
        let progress = promo.progress(500.0);

        assert_relative_eq!(progress.percent, 50.0);
        assert!(!progress.eligible);
        assert_relative_eq!(progress.remaining, 500.0);
    }

    #[test]
    fn test_progress_at_threshold() {
        let promo = GiftPromotion::new();
        let progress = promo.progress(1000.0);

        assert_relative_eq!(progress.percent, 100.0);
        assert!(progress.eligible);
        assert_relative_eq!(progress.remaining, 0.0);
    }

    #[test]
    fn test_progress_clamps_above_threshold() {
        let promo = GiftPromotion::new();
        let progress = promo.progress(2500.0);

        assert_relative_eq!(progress.percent, 100.0);
        assert!(progress.eligible);
        assert_relative_eq!(progress.remaining, 0.0);
    }

    #[test]
    fn test_progress_for_cart() {
        let promo = GiftPromotion::new();
        let cart = cart_with(vec![(Product::new(2, "Smartphone", 300.0), 2)]);

        let progress = promo.progress_for(&cart);
        assert_relative_eq!(progress.subtotal, 600.0);
        assert_relative_eq!(progress.percent, 60.0);
        assert!(!progress.eligible);
    }

    #[test]
    fn test_custom_threshold() {
        let promo = GiftPromotion::with_config(200.0, Product::gift(7, "Tote Bag"));
        let progress = promo.progress(150.0);

        assert_relative_eq!(progress.percent, 75.0);
        assert_relative_eq!(progress.remaining, 50.0);
    }
}
