//! # Error Types
//!
//! Domain-specific error types for promo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError                                                              │
//! │  ├── UnknownPromoKind   - promo "type" tag we don't know               │
//! │  ├── MalformedPromo     - known tag, unusable fields                   │
//! │  ├── MalformedItem      - sale item JSON that doesn't decode           │
//! │  └── Validation ──────► ValidationError (opt-in precondition checks)   │
//! │                                                                         │
//! │  calculate_line_price() never fails: errors only come from decoding    │
//! │  JSON input or from the checked entry points.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending tag)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised at the edges of the pricing core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The promo `type` tag matches none of the known variants.
    ///
    /// ## When This Occurs
    /// - A newer client sends a promo kind this build doesn't support
    /// - The tag is misspelled
    /// - The `type` field is missing entirely (tag is reported as `""`)
    #[error("Unknown promo kind: '{0}'")]
    UnknownPromoKind(String),

    /// The promo tag is known but its fields could not be decoded.
    #[error("Malformed promo: {reason}")]
    MalformedPromo { reason: String },

    /// A sale item could not be decoded.
    #[error("Malformed sale item: {reason}")]
    MalformedItem { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Precondition violations on pricing inputs.
///
/// The pricing function itself never produces these. Callers opt in through
/// [`crate::validation`] or [`crate::pricing::calculate_line_price_checked`].
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// A Buy-X-Pay-Y promo that would charge more than it gives away.
    #[error("pays ({pays}) must not exceed buys ({buys})")]
    PaysExceedsBuys { buys: u32, pays: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownPromoKind("bogo".to_string());
        assert_eq!(err.to_string(), "Unknown promo kind: 'bogo'");

        let err = CoreError::MalformedPromo {
            reason: "missing field `min`".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed promo: missing field `min`");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "discount_percentage".to_string(),
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "discount_percentage must be between 0 and 100"
        );

        let err = ValidationError::PaysExceedsBuys { buys: 2, pays: 3 };
        assert_eq!(err.to_string(), "pays (3) must not exceed buys (2)");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "buys".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
