//! # Product Module
//!
//! Products and their inventory mutation rules.
//!
//! ## Stock Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Stock Policies                                │
//! │                                                                     │
//! │  Standard      stock decreases per purchase, deactivates at zero    │
//! │  NonStocked    quantity pinned at 0, never stock-checked            │
//! │                (digital-good style, e.g. a software license)        │
//! │  Limited       Standard rules + a per-order unit cap                │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, used for store membership and order lines
//! - `name`: human-readable display identity, potentially duplicated
//!
//! Membership checks always compare ids. Two products named "Google
//! Pixel 7" are distinct entries; the same product added twice is a
//! duplicate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation;

// =============================================================================
// Product Id
// =============================================================================

/// Stable product identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Stock Policy
// =============================================================================

/// How a product's stock behaves under purchases.
///
/// A closed sum type: the behavioral differences between product variants
/// (stock checks, per-order caps, deactivation) are dispatched through
/// [`Product::buy`] rather than an inheritance chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockPolicy {
    /// Stock decreases by the purchased amount; deactivates at zero.
    Standard,
    /// No inventory constraint; quantity is fixed at 0 forever.
    NonStocked,
    /// Standard behavior plus a per-order unit cap, independent of
    /// total stock.
    Limited { max_per_order: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product in the store's inventory.
///
/// ## Invariants
/// - `quantity` is never negative; a purchase that would overdraw stock
///   fails before any mutation
/// - A stock-tracked product whose quantity reaches 0 becomes inactive
/// - A non-stocked product's quantity is always 0 and never blocks a sale
/// - At most one promotion is attached at a time (last write wins)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    id: ProductId,

    /// Display name shown in listings and error messages.
    name: String,

    /// Unit price in cents.
    price: Money,

    /// Current stock level. Semantics vary by policy; pinned at 0 for
    /// non-stocked products.
    quantity: i64,

    /// Whether the product is eligible for listing and purchase.
    active: bool,

    /// Optional pricing-discount rule (at most one).
    promotion: Option<Promotion>,

    /// Stock behavior variant.
    policy: StockPolicy,

    /// When the product was created.
    created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a standard stock-tracked product.
    ///
    /// ## Errors
    /// Fails with a validation error on an empty name, negative price,
    /// or negative quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let product = Product::new("MacBook Air M2", Money::from_cents(145_000), 100).unwrap();
    /// assert!(product.is_active());
    /// assert_eq!(product.quantity(), 100);
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        Self::with_policy(name, price, quantity, StockPolicy::Standard)
    }

    /// Creates a non-stocked product (digital-good style).
    ///
    /// Quantity is pinned at 0 and the product never deactivates due to
    /// stock; purchases are unrestricted by inventory.
    pub fn non_stocked(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Self::with_policy(name, price, 0, StockPolicy::NonStocked)
    }

    /// Creates a stock-tracked product with a per-order unit cap.
    ///
    /// ## Errors
    /// In addition to the standard construction rules, fails when
    /// `max_per_order` is not positive.
    pub fn limited(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        max_per_order: i64,
    ) -> CoreResult<Self> {
        validation::validate_order_limit(max_per_order)?;
        Self::with_policy(name, price, quantity, StockPolicy::Limited { max_per_order })
    }

    fn with_policy(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        policy: StockPolicy,
    ) -> CoreResult<Self> {
        let name = name.into();
        validation::validate_product_name(&name)?;
        validation::validate_price(price)?;
        validation::validate_stock_quantity(quantity)?;

        // A stocked product created empty starts out inactive; non-stocked
        // products are active regardless of their (zero) quantity.
        let active = quantity > 0 || matches!(policy, StockPolicy::NonStocked);

        Ok(Product {
            id: ProductId::new(),
            name,
            price,
            quantity,
            active,
            promotion: None,
            policy,
            created_at: Utc::now(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn policy(&self) -> StockPolicy {
        self.policy
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Checks if the product is active (eligible for listing/purchase).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether purchases decrement this product's quantity.
    pub fn tracks_stock(&self) -> bool {
        !matches!(self.policy, StockPolicy::NonStocked)
    }

    /// Returns the attached promotion, if any.
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    // =========================================================================
    // Administrative Mutations
    // =========================================================================

    /// Replaces or clears the attached promotion.
    ///
    /// At most one promotion is attached at a time; the previous one is
    /// dropped (no stacking).
    pub fn set_promotion(&mut self, promotion: Option<Promotion>) {
        self.promotion = promotion;
    }

    /// Updates the stock quantity.
    ///
    /// Setting the quantity to 0 deactivates the product. For non-stocked
    /// products the quantity stays pinned at 0 and the call is a no-op
    /// (after validation).
    ///
    /// ## Errors
    /// Fails with `InvalidQuantity` on a negative quantity.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        if quantity < 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        if !self.tracks_stock() {
            return Ok(());
        }

        self.quantity = quantity;
        if quantity == 0 {
            self.deactivate();
        }
        Ok(())
    }

    /// Activates the product.
    ///
    /// Returns `false` (and leaves the product inactive) for an empty
    /// stock-tracked product: sold-out items cannot be reactivated without
    /// restocking first. Non-stocked products always reactivate.
    pub fn activate(&mut self) -> bool {
        if self.tracks_stock() && self.quantity == 0 {
            return false;
        }
        self.active = true;
        true
    }

    /// Deactivates the product, hiding it from catalog listings.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    /// Buys `quantity` units, returning the line total.
    ///
    /// ## Behavior
    /// ```text
    /// buy(quantity)
    ///      │
    ///      ├── quantity <= 0?            → InvalidQuantity
    ///      │
    ///      ├── qty > MAX_LINE_QUANTITY?  → QuantityTooLarge
    ///      │
    ///      ├── Limited && qty > cap?     → OrderLimitExceeded  (before stock)
    ///      │
    ///      ├── tracked && qty > stock?   → InsufficientStock
    ///      │
    ///      ▼
    /// total = promotion.apply(price, qty)   (or price × qty)
    ///      │
    ///      ▼
    /// tracked: stock -= qty; stock == 0 → deactivate
    /// ```
    ///
    /// No mutation happens on any failure path: a failed purchase leaves
    /// quantity and active flag untouched.
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        // Non-stocked purchases have no stock bound, so the line cap is
        // the only thing keeping the cent arithmetic inside i64.
        if quantity > crate::MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: crate::MAX_LINE_QUANTITY,
            });
        }

        if let StockPolicy::Limited { max_per_order } = self.policy {
            if quantity > max_per_order {
                return Err(CoreError::OrderLimitExceeded {
                    name: self.name.clone(),
                    requested: quantity,
                    max: max_per_order,
                });
            }
        }

        if self.tracks_stock() && quantity > self.quantity {
            return Err(CoreError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        let total = match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price * quantity,
        };

        if self.tracks_stock() {
            self.quantity -= quantity;
            if self.quantity == 0 {
                self.deactivate();
            }
        }

        Ok(total)
    }
}

/// Formatted one-line summary: name, price, stock description and the
/// promotion name when attached. Plain text, no formatting codes.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Price: {}", self.name, self.price)?;
        match self.policy {
            StockPolicy::NonStocked => write!(f, ", Quantity: Unlimited")?,
            StockPolicy::Standard => write!(f, ", Quantity: {}", self.quantity)?,
            StockPolicy::Limited { max_per_order } => write!(
                f,
                ", Quantity: {}, Limited to {} per order",
                self.quantity, max_per_order
            )?,
        }
        if let Some(promotion) = &self.promotion {
            write!(f, ", Promotion: {}", promotion.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
