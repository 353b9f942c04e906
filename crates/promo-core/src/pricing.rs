//! # Line Pricing
//!
//! Prices one sale line under one promo.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate_line_price(item, promo)                    │
//! │                                                                         │
//! │  raw = amount × base_price                                              │
//! │       │                                                                 │
//! │       ├── FlatDiscount ──────► raw × (100 − pct) / 100                 │
//! │       │                                                                 │
//! │       ├── ThresholdDiscount ─► amount < min ? raw                      │
//! │       │                                     : raw × (100 − pct) / 100  │
//! │       │                                                                 │
//! │       └── BuyXPayY ──────────► (⌊amount / buys⌋ × pays                 │
//! │                                 + amount mod buys) × base_price        │
//! │                                                                         │
//! │  No rounding. No validation. Same inputs, same output.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use promo_core::{calculate_line_price, Product, Promo, SaleItem};
//!
//! let item = SaleItem::new(3.0, Product::new(100.0));
//! let promo = Promo::BuyXPayY { buys: 2, pays: 1 }; // 2x1
//!
//! assert_eq!(calculate_line_price(&item, &promo), 200.0);
//! ```

use tracing::trace;

use crate::error::CoreResult;
use crate::types::{Promo, SaleItem};
use crate::validation::{validate_promo, validate_sale_item};

// =============================================================================
// LinePricer
// =============================================================================

/// Returns the price to charge for `item` with `promo` applied.
///
/// Inputs are not range checked: negative amounts, percentages outside
/// [0, 100] or `pays > buys` produce whatever the formulas give. A
/// `BuyXPayY` with `buys == 0` yields NaN. Use
/// [`calculate_line_price_checked`] to reject such inputs instead.
///
/// ## Example
/// ```rust
/// use promo_core::{calculate_line_price, Product, Promo, SaleItem};
///
/// let promo = Promo::ThresholdDiscount { discount_percentage: 20.0, min: 2.0 };
/// let price = |amount| calculate_line_price(&SaleItem::new(amount, Product::new(100.0)), &promo);
///
/// assert_eq!(price(1.0), 100.0); // below the minimum, full price
/// assert_eq!(price(2.0), 160.0);
/// assert_eq!(price(3.0), 240.0);
/// ```
pub fn calculate_line_price(item: &SaleItem, promo: &Promo) -> f64 {
    let price = match *promo {
        Promo::FlatDiscount {
            discount_percentage,
        } => item.undiscounted_price() * discount_coefficient(discount_percentage),

        Promo::ThresholdDiscount {
            discount_percentage,
            min,
        } => {
            let raw = item.undiscounted_price();
            if item.amount < min {
                raw
            } else {
                raw * discount_coefficient(discount_percentage)
            }
        }

        Promo::BuyXPayY { buys, pays } => {
            billable_units(item.amount, buys, pays) * item.product.base_price
        }
    };

    trace!(
        kind = %promo.kind(),
        amount = item.amount,
        base_price = item.product.base_price,
        price,
        "Priced sale line"
    );

    price
}

/// Same as [`calculate_line_price`], but checks the input preconditions first.
///
/// ## Errors
/// [`crate::CoreError::Validation`] if the item or promo is out of range.
///
/// ## Example
/// ```rust
/// use promo_core::{calculate_line_price_checked, Product, Promo, SaleItem};
///
/// let item = SaleItem::new(2.0, Product::new(100.0));
///
/// let ok = calculate_line_price_checked(&item, &Promo::FlatDiscount { discount_percentage: 10.0 });
/// assert_eq!(ok.unwrap(), 180.0);
///
/// let bad = calculate_line_price_checked(&item, &Promo::FlatDiscount { discount_percentage: 150.0 });
/// assert!(bad.is_err());
/// ```
pub fn calculate_line_price_checked(item: &SaleItem, promo: &Promo) -> CoreResult<f64> {
    validate_sale_item(item)?;
    validate_promo(promo)?;
    Ok(calculate_line_price(item, promo))
}

/// Decodes a sale item and a promo from JSON and prices the line.
///
/// This is the boundary where an unrecognized promo kind shows up, as
/// [`crate::CoreError::UnknownPromoKind`]. Inputs are not range checked.
///
/// ## Example
/// ```rust
/// use promo_core::price_line_json;
///
/// let price = price_line_json(
///     r#"{"amount": 11, "product": {"base_price": 100}}"#,
///     r#"{"type": "Buys-x-Pays", "buys": 5, "pays": 3}"#,
/// )
/// .unwrap();
/// assert_eq!(price, 700.0);
/// ```
pub fn price_line_json(item_json: &str, promo_json: &str) -> CoreResult<f64> {
    let item = SaleItem::from_json(item_json)?;
    let promo = Promo::from_json(promo_json)?;
    Ok(calculate_line_price(&item, &promo))
}

/// Amount taken off the line by `promo` (undiscounted price minus line price).
///
/// Negative when out-of-range inputs make the promo cost more than full price.
pub fn line_discount(item: &SaleItem, promo: &Promo) -> f64 {
    item.undiscounted_price() - calculate_line_price(item, promo)
}

// =============================================================================
// Building Blocks
// =============================================================================

/// Fraction of the price that is still charged: `(100 − pct) / 100`.
#[inline]
pub fn discount_coefficient(discount_percentage: f64) -> f64 {
    (100.0 - discount_percentage) / 100.0
}

/// Units actually charged under a Buy-X-Pay-Y promo.
///
/// Full groups of `buys` are charged `pays` units each; the remainder is
/// charged in full.
///
/// ## Example
/// ```rust
/// use promo_core::pricing::billable_units;
///
/// // 5x3 with 11 units: two groups (3 + 3) plus one leftover
/// assert_eq!(billable_units(11.0, 5, 3), 7.0);
/// ```
pub fn billable_units(amount: f64, buys: u32, pays: u32) -> f64 {
    let buys = f64::from(buys);
    let groups = (amount / buys).floor();
    let rest = amount % buys;
    groups * f64::from(pays) + rest
}

// =============================================================================
// Unit Tests
// =============================================================================
