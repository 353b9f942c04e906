//! # Validation Module
//!
//! Precondition checks for pricing inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Happen                                │
//! │                                                                         │
//! │  calculate_line_price()          → never validates, never fails        │
//! │                                                                         │
//! │  calculate_line_price_checked()  → validate_sale_item()                │
//! │                                    validate_promo()                     │
//! │                                    then calculate_line_price()          │
//! │                                                                         │
//! │  Callers that already trust their inputs (e.g. promos loaded from a    │
//! │  reviewed catalog) skip this module entirely.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use promo_core::validation::{validate_discount_percentage, validate_group_sizes};
//!
//! assert!(validate_discount_percentage(20.0).is_ok());
//! assert!(validate_group_sizes(3, 2).is_ok());
//! assert!(validate_group_sizes(2, 3).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Promo, SaleItem};
use crate::MAX_DISCOUNT_PERCENTAGE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Sale Item Validators
// =============================================================================

/// Validates a sale line.
///
/// ## Rules
/// - `amount` finite and >= 0
/// - `base_price` finite and >= 0
pub fn validate_sale_item(item: &SaleItem) -> ValidationResult<()> {
    validate_non_negative("amount", item.amount)?;
    validate_non_negative("base_price", item.product.base_price)?;
    Ok(())
}

// =============================================================================
// Promo Validators
// =============================================================================

/// Validates a promo's parameters.
///
/// ## Rules
/// - FlatDiscount: percentage in [0, 100]
/// - ThresholdDiscount: percentage in [0, 100], `min` finite and >= 0
/// - BuyXPayY: `buys > 0`, `pays > 0`, `pays <= buys`
pub fn validate_promo(promo: &Promo) -> ValidationResult<()> {
    match *promo {
        Promo::FlatDiscount {
            discount_percentage,
        } => validate_discount_percentage(discount_percentage),

        Promo::ThresholdDiscount {
            discount_percentage,
            min,
        } => {
            validate_discount_percentage(discount_percentage)?;
            validate_non_negative("min", min)
        }

        Promo::BuyXPayY { buys, pays } => validate_group_sizes(buys, pays),
    }
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percentage(pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "discount_percentage".to_string(),
        });
    }

    if !(0.0..=MAX_DISCOUNT_PERCENTAGE).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "discount_percentage".to_string(),
            min: 0.0,
            max: MAX_DISCOUNT_PERCENTAGE,
        });
    }

    Ok(())
}

/// Validates Buy-X-Pay-Y group sizes.
///
/// `pays == buys` is allowed; it is simply a promo with no effect.
pub fn validate_group_sizes(buys: u32, pays: u32) -> ValidationResult<()> {
    if buys == 0 {
        return Err(ValidationError::MustBePositive {
            field: "buys".to_string(),
        });
    }

    if pays == 0 {
        return Err(ValidationError::MustBePositive {
            field: "pays".to_string(),
        });
    }

    if pays > buys {
        return Err(ValidationError::PaysExceedsBuys { buys, pays });
    }

    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    #[test]
    fn test_validate_sale_item() {
        assert!(validate_sale_item(&SaleItem::new(0.0, Product::new(0.0))).is_ok());
        assert!(validate_sale_item(&SaleItem::new(2.5, Product::new(19.99))).is_ok());

        assert_eq!(
            validate_sale_item(&SaleItem::new(-1.0, Product::new(100.0))),
            Err(ValidationError::MustBeNonNegative {
                field: "amount".to_string()
            })
        );
        assert_eq!(
            validate_sale_item(&SaleItem::new(1.0, Product::new(-100.0))),
            Err(ValidationError::MustBeNonNegative {
                field: "base_price".to_string()
            })
        );
        assert_eq!(
            validate_sale_item(&SaleItem::new(f64::NAN, Product::new(100.0))),
            Err(ValidationError::NotFinite {
                field: "amount".to_string()
            })
        );
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert!(validate_discount_percentage(0.0).is_ok());
        assert!(validate_discount_percentage(12.5).is_ok());
        assert!(validate_discount_percentage(100.0).is_ok());

        assert!(validate_discount_percentage(-0.1).is_err());
        assert!(validate_discount_percentage(100.1).is_err());
        assert!(validate_discount_percentage(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_group_sizes() {
        assert!(validate_group_sizes(2, 1).is_ok());
        assert!(validate_group_sizes(5, 3).is_ok());
        assert!(validate_group_sizes(4, 4).is_ok());

        assert!(validate_group_sizes(0, 0).is_err());
        assert!(validate_group_sizes(3, 0).is_err());
        assert_eq!(
            validate_group_sizes(2, 3),
            Err(ValidationError::PaysExceedsBuys { buys: 2, pays: 3 })
        );
    }

    #[test]
    fn test_validate_promo() {
        assert!(validate_promo(&Promo::FlatDiscount {
            discount_percentage: 10.0
        })
        .is_ok());
        assert!(validate_promo(&Promo::ThresholdDiscount {
            discount_percentage: 20.0,
            min: 2.0
        })
        .is_ok());
        assert!(validate_promo(&Promo::BuyXPayY { buys: 3, pays: 2 }).is_ok());

        assert!(validate_promo(&Promo::FlatDiscount {
            discount_percentage: 120.0
        })
        .is_err());
        assert!(validate_promo(&Promo::ThresholdDiscount {
            discount_percentage: 20.0,
            min: -1.0
        })
        .is_err());
        assert!(validate_promo(&Promo::BuyXPayY { buys: 1, pays: 2 }).is_err());
    }
}
