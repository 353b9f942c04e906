//! # Domain Types
//!
//! Value types consumed by the line pricer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    SaleItem     │   │    Product      │   │       Promo         │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  amount         │──►│  base_price     │   │  FlatDiscount       │   │
//! │  │  product        │   └─────────────────┘   │  ThresholdDiscount  │   │
//! │  └─────────────────┘                         │  BuyXPayY           │   │
//! │                                              └─────────────────────┘   │
//! │                                                                         │
//! │  All of them are immutable values: built per call, dropped after.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! ```text
//! SaleItem: {"amount": 2, "product": {"base_price": 100}}
//! Promo:    {"type": "threshold_discount", "discount_percentage": 20, "min": 2}
//! ```
//! Promos are internally tagged by `type`. The legacy tags used by older
//! checkout clients (`discount`, `discont-from-minimum`, `Buys-x-Pays`) are
//! accepted by [`Promo::from_json`] and mapped onto the canonical ones.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Promo Tags
// =============================================================================

/// Canonical tag for [`Promo::FlatDiscount`].
pub const FLAT_DISCOUNT_TAG: &str = "flat_discount";
/// Canonical tag for [`Promo::ThresholdDiscount`].
pub const THRESHOLD_DISCOUNT_TAG: &str = "threshold_discount";
/// Canonical tag for [`Promo::BuyXPayY`].
pub const BUY_X_PAY_Y_TAG: &str = "buy_x_pay_y";

/// Legacy tag for [`Promo::FlatDiscount`].
pub const LEGACY_FLAT_DISCOUNT_TAG: &str = "discount";
/// Legacy tag for [`Promo::ThresholdDiscount`] (the misspelling is what clients send).
pub const LEGACY_THRESHOLD_DISCOUNT_TAG: &str = "discont-from-minimum";
/// Legacy tag for [`Promo::BuyXPayY`].
pub const LEGACY_BUY_X_PAY_Y_TAG: &str = "Buys-x-Pays";

// =============================================================================
// Product
// =============================================================================

/// A product as the pricer sees it: just its unit price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Price of one unit. Expected to be non-negative.
    pub base_price: f64,
}

impl Product {
    /// Creates a product with the given unit price.
    #[inline]
    pub const fn new(base_price: f64) -> Self {
        Product { base_price }
    }
}

// =============================================================================
// Sale Item
// =============================================================================

/// One sale line: a quantity of a single product.
///
/// `amount` is a real number so fractional quantities (weighed goods) price
/// the same way whole units do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleItem {
    /// Quantity sold. Expected to be non-negative.
    pub amount: f64,
    /// The product being sold.
    pub product: Product,
}

impl SaleItem {
    /// Creates a sale line.
    #[inline]
    pub const fn new(amount: f64, product: Product) -> Self {
        SaleItem { amount, product }
    }

    /// Line price before any promo (`amount × base_price`).
    ///
    /// ## Example
    /// ```rust
    /// use promo_core::{Product, SaleItem};
    ///
    /// let item = SaleItem::new(3.0, Product::new(100.0));
    /// assert_eq!(item.undiscounted_price(), 300.0);
    /// ```
    #[inline]
    pub fn undiscounted_price(&self) -> f64 {
        self.amount * self.product.base_price
    }

    /// Decodes a sale item from its JSON wire format.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            debug!(error = %e, "Rejecting malformed sale item");
            CoreError::MalformedItem {
                reason: e.to_string(),
            }
        })
    }
}

// =============================================================================
// Promo
// =============================================================================

/// A promotional pricing rule for one sale line.
///
/// Exactly one promo applies per line; there is no stacking.
///
/// ## Variants
/// ```text
/// FlatDiscount       10% off, always
/// ThresholdDiscount  20% off once amount >= min
/// BuyXPayY           buys=3, pays=2  →  "3 for 2"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Promo {
    /// Percentage off the whole line.
    FlatDiscount {
        /// Expected in [0, 100].
        discount_percentage: f64,
    },

    /// Percentage off the whole line once the quantity reaches `min`.
    ThresholdDiscount {
        /// Expected in [0, 100].
        discount_percentage: f64,
        /// Minimum quantity (inclusive) for the discount to apply.
        min: f64,
    },

    /// For every `buys` units, only `pays` are charged. Leftover units that
    /// don't complete a group are charged in full.
    BuyXPayY {
        /// Group size. Expected positive.
        buys: u32,
        /// Units charged per group. Expected `<= buys`.
        pays: u32,
    },
}

impl Promo {
    /// Returns which kind of promo this is.
    #[inline]
    pub const fn kind(&self) -> PromoKind {
        match self {
            Promo::FlatDiscount { .. } => PromoKind::FlatDiscount,
            Promo::ThresholdDiscount { .. } => PromoKind::ThresholdDiscount,
            Promo::BuyXPayY { .. } => PromoKind::BuyXPayY,
        }
    }

    /// Decodes a promo from JSON.
    ///
    /// Both canonical and legacy `type` tags are accepted.
    ///
    /// ## Errors
    /// - [`CoreError::UnknownPromoKind`] if `type` is missing, not a string,
    ///   or not a known tag
    /// - [`CoreError::MalformedPromo`] if the input isn't a JSON object or the
    ///   variant's fields don't decode
    ///
    /// ## Example
    /// ```rust
    /// use promo_core::Promo;
    ///
    /// let promo = Promo::from_json(r#"{"type": "Buys-x-Pays", "buys": 2, "pays": 1}"#).unwrap();
    /// assert_eq!(promo, Promo::BuyXPayY { buys: 2, pays: 1 });
    ///
    /// assert!(Promo::from_json(r#"{"type": "bogo"}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| CoreError::MalformedPromo {
            reason: e.to_string(),
        })?;
        Promo::from_value(value)
    }

    /// Decodes a promo from an already-parsed JSON value.
    pub fn from_value(mut value: Value) -> CoreResult<Self> {
        let Some(fields) = value.as_object_mut() else {
            return Err(CoreError::MalformedPromo {
                reason: "expected a JSON object".to_string(),
            });
        };

        let tag = fields
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let kind = PromoKind::from_tag(&tag).ok_or_else(|| {
            debug!(tag = %tag, "Rejecting unknown promo kind");
            CoreError::UnknownPromoKind(tag.clone())
        })?;

        // Normalize legacy tags so serde only has to know the canonical ones
        fields.insert("type".to_string(), Value::from(kind.as_str()));

        serde_json::from_value(value).map_err(|e| {
            debug!(kind = %kind, error = %e, "Rejecting malformed promo");
            CoreError::MalformedPromo {
                reason: e.to_string(),
            }
        })
    }
}

// =============================================================================
// Promo Kind
// =============================================================================

/// The variant of a [`Promo`], without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PromoKind {
    FlatDiscount,
    ThresholdDiscount,
    BuyXPayY,
}

impl PromoKind {
    /// Every supported kind.
    pub const ALL: [PromoKind; 3] = [
        PromoKind::FlatDiscount,
        PromoKind::ThresholdDiscount,
        PromoKind::BuyXPayY,
    ];

    /// Canonical wire tag.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PromoKind::FlatDiscount => FLAT_DISCOUNT_TAG,
            PromoKind::ThresholdDiscount => THRESHOLD_DISCOUNT_TAG,
            PromoKind::BuyXPayY => BUY_X_PAY_Y_TAG,
        }
    }

    /// Tag the older checkout clients send for this kind.
    #[inline]
    pub const fn legacy_tag(&self) -> &'static str {
        match self {
            PromoKind::FlatDiscount => LEGACY_FLAT_DISCOUNT_TAG,
            PromoKind::ThresholdDiscount => LEGACY_THRESHOLD_DISCOUNT_TAG,
            PromoKind::BuyXPayY => LEGACY_BUY_X_PAY_Y_TAG,
        }
    }

    /// Resolves a canonical or legacy tag. Matching is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        PromoKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag || kind.legacy_tag() == tag)
    }
}

impl fmt::Display for PromoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
