//! # Store Module
//!
//! The store aggregate: an insertion-ordered collection of products with
//! catalog queries and multi-line order execution.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Store::order                                  │
//! │                                                                     │
//! │  shopping list: [(id₁, qty₁), (id₂, qty₂), ...]                     │
//! │       │                                                             │
//! │       ▼  in the given order                                         │
//! │  lookup idₙ ──► Product::buy(qtyₙ) ──► accumulate total             │
//! │       │                                                             │
//! │       └── any failure stops the loop and surfaces the error;        │
//! │           earlier lines' stock decrements are NOT rolled back       │
//! │           (non-transactional, accepted behavior)                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Product, ProductId};

// =============================================================================
// Store
// =============================================================================

/// A store managing an ordered product inventory.
///
/// ## Invariants
/// - Products keep their insertion order
/// - Membership is by id: structurally equal products with distinct ids
///   are distinct entries
/// - Inactive products stay in the underlying collection; only listing
///   queries filter them out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            products: Vec::new(),
        }
    }

    /// Creates a store pre-filled with `products`, preserving their order.
    ///
    /// ## Errors
    /// Fails with `DuplicateProduct` if the same product appears twice.
    pub fn with_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut store = Store::new();
        for product in products {
            store.add_product(product)?;
        }
        Ok(store)
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Adds a product, preserving insertion order.
    ///
    /// Returns the product's id so callers can reference it in order
    /// lines later.
    ///
    /// ## Errors
    /// Fails with `DuplicateProduct` if a product with the same id is
    /// already present.
    pub fn add_product(&mut self, product: Product) -> CoreResult<ProductId> {
        if self.products.iter().any(|p| p.id() == product.id()) {
            return Err(CoreError::DuplicateProduct {
                name: product.name().to_string(),
            });
        }
        let id = product.id();
        self.products.push(product);
        Ok(id)
    }

    /// Removes the product with the given id.
    ///
    /// Returns whether a product was removed; removing an absent id is an
    /// idempotent no-op, not an error.
    pub fn remove_product(&mut self, id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the active products, in insertion order.
    ///
    /// Inactive products (sold out or administratively deactivated) are
    /// hidden from the catalog but remain in the underlying collection.
    pub fn get_all_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Total quantity over ALL products, active and inactive alike.
    pub fn get_total_quantity(&self) -> i64 {
        self.products.iter().map(|p| p.quantity()).sum()
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Looks up a product by id for administrative mutation.
    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Executes a multi-line order, returning the grand total.
    ///
    /// Each `(id, quantity)` line is delegated to the product's `buy` in
    /// the given order. The first failing line aborts the loop and
    /// surfaces its error; stock decrements already applied by earlier
    /// lines stay applied. This partial-failure semantics is deliberate,
    /// not a defect.
    pub fn order(&mut self, shopping_list: &[(ProductId, i64)]) -> CoreResult<Money> {
        let mut total = Money::zero();
        for &(id, quantity) in shopping_list {
            let product = self
                .product_mut(id)
                .ok_or(CoreError::ProductNotFound(id))?;
            total += product.buy(quantity)?;
        }
        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
