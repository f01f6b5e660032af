//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  storefront-core errors (this file)                                 │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Construction-input failures                 │
//! │                                                                     │
//! │  CLI errors (apps/cli)                                              │
//! │  └── anyhow::Error    - What the terminal user sees                 │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → anyhow → styled message        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::product::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations surfaced synchronously
/// to the immediate caller. The core never logs, retries, or suppresses
/// them; the CLI is responsible for display and re-prompting.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the store.
    ///
    /// ## When This Occurs
    /// - An order line references an id that was never added
    /// - The product was removed between listing and checkout
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Purchase or update quantity is not a positive integer.
    #[error("Invalid quantity: {requested} (quantity must be a positive integer)")]
    InvalidQuantity { requested: i64 },

    /// Purchase quantity exceeds the per-line maximum.
    ///
    /// ## When This Occurs
    /// - A line requests more than [`crate::MAX_LINE_QUANTITY`] units;
    ///   non-stocked products have no stock bound, so this cap is what
    ///   keeps their line-total arithmetic inside i64
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Insufficient stock to complete a purchase.
    ///
    /// ## When This Occurs
    /// - Trying to buy more than the available stock of a stock-tracked
    ///   product (non-stocked products never raise this)
    ///
    /// ## User Workflow
    /// ```text
    /// Order line (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Google Pixel 7", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// CLI shows: "Only 3 Google Pixel 7 in stock"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Requested quantity exceeds a limited product's per-order maximum.
    ///
    /// Checked before the stock check, independent of total stock.
    #[error("Order limit exceeded for {name}: requested {requested}, maximum {max} per order")]
    OrderLimitExceeded {
        name: String,
        requested: i64,
        max: i64,
    },

    /// Adding a product whose id is already present in the store.
    #[error("Product {name} is already in the store")]
    DuplicateProduct { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Construction-input validation errors.
///
/// These errors occur when constructor arguments do not meet requirements.
/// Used for early validation before any product state exists.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
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
        let err = CoreError::InsufficientStock {
            name: "Google Pixel 7".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Google Pixel 7: available 3, requested 5"
        );

        let err = CoreError::OrderLimitExceeded {
            name: "Shipping".to_string(),
            requested: 2,
            max: 1,
        };
        assert_eq!(
            err.to_string(),
            "Order limit exceeded for Shipping: requested 2, maximum 1 per order"
        );

        let err = CoreError::QuantityTooLarge {
            requested: 2_000_000,
            max: 1_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 2000000 exceeds maximum allowed (1000000)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "max_per_order".to_string(),
        };
        assert_eq!(err.to_string(), "max_per_order must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
