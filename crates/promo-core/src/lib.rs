//! # promo-core: Pure Line Pricing for Promo Pricer
//!
//! Prices a single sale line under a single promotional rule. Pure functions,
//! zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Promo Pricer Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Caller (checkout, order service, receipt)             │   │
//! │  │        one SaleItem + one Promo ──► one line price              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Rust API or JSON                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ promo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   error   │  │validation │  │   │
//! │  │   │ SaleItem  │  │ LinePricer│  │ CoreError │  │  opt-in   │  │   │
//! │  │   │  Promo    │  │           │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO ROUNDING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SaleItem, Promo)
//! - [`pricing`] - Line price calculation
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in input precondition checks
//!
//! ## Example Usage
//!
//! ```rust
//! use promo_core::{calculate_line_price, Product, Promo, SaleItem};
//!
//! let item = SaleItem::new(2.0, Product::new(100.0));
//! let promo = Promo::FlatDiscount { discount_percentage: 10.0 };
//!
//! assert_eq!(calculate_line_price(&item, &promo), 180.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{
    calculate_line_price, calculate_line_price_checked, line_discount, price_line_json,
};
pub use types::{Product, Promo, PromoKind, SaleItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound accepted by [`validation::validate_discount_percentage`].
pub const MAX_DISCOUNT_PERCENTAGE: f64 = 100.0;
