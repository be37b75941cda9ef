//! Derived cart display values.

use crate::promotion::GiftPromotion;
use crate::types::{Cart, Product};
use serde::{Deserialize, Serialize};

/// Everything the view needs to render the cart summary panel.
///
/// Pure function of a cart snapshot and the promotion; recomputed on every
/// read, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSummary {
    /// Subtotal over non-gift lines
    pub subtotal: f64,
    /// Progress toward the gift threshold, clamped to [0, 100]
    pub percent: f64,
    /// Whether the free gift is unlocked
    pub eligible: bool,
    /// Amount still needed for the gift, clamped at zero
    pub remaining: f64,
    /// Number of cart lines
    pub line_count: usize,
    /// Total units held across all lines
    pub unit_count: u32,
    /// The gift product, present while eligible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift: Option<Product>,
}

impl CartSummary {
    /// Compute the summary from a cart snapshot.
    pub fn compute(cart: &Cart, promotion: &GiftPromotion) -> Self {
        let progress = promotion.progress_for(cart);

        Self {
            subtotal: progress.subtotal,
            percent: progress.percent,
            eligible: progress.eligible,
            remaining: progress.remaining,
            line_count: cart.line_count(),
            unit_count: cart.unit_count(),
            gift: progress.eligible.then(|| promotion.gift.clone()),
        }
    }

    /// The promotion banner line.
    pub fn gift_message(&self) -> String {
        match &self.gift {
            Some(gift) => format!("You got a free {}!", gift.name),
            None => format!(
                "You're {} bucks away from the free gift!",
                format_amount(self.remaining)
            ),
        }
    }
}

/// Render a currency amount without a trailing ".00" for whole values.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}
