//! Button styling for the widget chrome.
//!
//! The cart UI exposes four button affordances. Their visual treatment is a
//! closed mapping, kept here as data so the view layer holds no branching.

use serde::{Deserialize, Serialize};

/// The operation a button triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    /// Add a catalog product to the cart
    Add,
    /// Increase a line's quantity
    Increment,
    /// Decrease a line's quantity
    Decrement,
    /// Remove a whole line
    Remove,
}

/// Visual treatment variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Quiet,
}

/// Style descriptor for a button kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    /// Square quantity-control sizing instead of full label sizing
    pub compact: bool,
}

impl ButtonKind {
    /// The style descriptor for this kind.
    pub fn style(self) -> ButtonStyle {
        match self {
            ButtonKind::Add => ButtonStyle {
                variant: ButtonVariant::Primary,
                compact: false,
            },
            ButtonKind::Increment => ButtonStyle {
                variant: ButtonVariant::Primary,
                compact: true,
            },
            ButtonKind::Decrement => ButtonStyle {
                variant: ButtonVariant::Danger,
                compact: true,
            },
            ButtonKind::Remove => ButtonStyle {
                variant: ButtonVariant::Quiet,
                compact: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_to_style_mapping() {
        assert_eq!(ButtonKind::Add.style().variant, ButtonVariant::Primary);
        assert!(!ButtonKind::Add.style().compact);

        assert!(ButtonKind::Increment.style().compact);
        assert_eq!(ButtonKind::Decrement.style().variant, ButtonVariant::Danger);
        assert_eq!(ButtonKind::Remove.style().variant, ButtonVariant::Quiet);
    }
}
