//! # storefront-core: Pure Business Logic for Storefront
//!
//! This crate is the **heart** of Storefront. It models a small retail
//! inventory as pure, synchronous, in-memory logic with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  CLI (apps/cli)                               │  │
//! │  │   Menu loop ──► prompts ──► parsing ──► colored output        │  │
//! │  └───────────────────────────┬───────────────────────────────────┘  │
//! │                              │ typed calls                          │
//! │  ┌───────────────────────────▼───────────────────────────────────┐  │
//! │  │             ★ storefront-core (THIS CRATE) ★                  │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐  ┌───────────┐  ┌─────────┐  ┌────────────┐    │  │
//! │  │   │  money  │  │ promotion │  │ product │  │   store    │    │  │
//! │  │   │  Money  │  │ discount  │  │  buy()  │  │  order()   │    │  │
//! │  │   │  cents  │  │   rules   │  │  stock  │  │  catalog   │    │  │
//! │  │   └─────────┘  └───────────┘  └─────────┘  └────────────┘    │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO TERMINAL • NO COLORS • PURE FUNCTIONS           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time rule validation
//! - [`promotion`] - Pure pricing-discount rules
//! - [`product`] - Product variants and inventory mutation
//! - [`store`] - The store aggregate and multi-line orders
//!
//! ## Design Principles
//!
//! 1. **Pure Pricing**: Promotion rules are deterministic functions of
//!    (unit price, quantity) - no state, no side effects
//! 2. **No I/O**: Terminal, file system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Money, Product, Promotion, Store};
//!
//! let mut product = Product::new("MacBook Air M2", Money::from_cents(145_000), 100).unwrap();
//! product.set_promotion(Some(Promotion::percent_discount("Spring Sale", 30.0)));
//!
//! let mut store = Store::new();
//! let id = store.add_product(product).unwrap();
//!
//! let total = store.order(&[(id, 2)]).unwrap();
//! assert_eq!(total, Money::from_cents(203_000)); // 2 x $1450.00 minus 30%
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, ProductId, StockPolicy};
pub use promotion::{DiscountRule, Promotion};
pub use store::Store;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum units a single purchase line may request.
///
/// ## Business Reason
/// Non-stocked products have no inventory bound, so an absurd quantity
/// would otherwise overflow the i64 cent arithmetic behind the line
/// total. One million units keeps totals well inside `Money`'s range for
/// any realistic unit price while allowing bulk orders far beyond the
/// demo catalog's stock levels.
pub const MAX_LINE_QUANTITY: i64 = 1_000_000;
