//! Collaborator Interfaces
//!
//! The add-to-cart operation delegates all business logic to three
//! collaborators, injected as trait objects at construction time:
//! catalog lookup, store resolution, and cart mutation. In-memory
//! reference implementations live in [`crate::commerce::memory`].

use super::models::{Cart, CartServiceError, LineItem, ProductVariant, Store};

/// Read-only access to the product catalog.
pub trait ProductCatalog: Send + Sync {
    /// Looks up a variant by its SKU.
    fn find_by_sku(&self, sku: &str) -> Option<ProductVariant>;

    /// Looks up a variant by its UUID.
    fn find_by_uuid(&self, uuid: &str) -> Option<ProductVariant>;
}

/// Resolves the store the current invocation runs against.
pub trait StoreResolver: Send + Sync {
    /// Returns the active store, or `None` when no store context exists.
    fn current_store(&self) -> Option<Store>;
}

/// Owns cart persistence and line-item insertion.
pub trait CartService: Send + Sync {
    /// Returns the default cart for the store, creating it when absent.
    ///
    /// Must be safe for concurrent create-or-get on the same store.
    fn get_or_create_default_cart(&self, store: &Store) -> Cart;

    /// Adds `quantity` units of `variant` to `cart`.
    ///
    /// `quantity` is a numeric string; implementations validate it. With
    /// `combine` set, a matching line item already in the cart absorbs
    /// the quantity instead of a new line item being appended.
    fn add_line_item(
        &self,
        cart: &Cart,
        variant: &ProductVariant,
        quantity: &str,
        combine: bool,
    ) -> Result<LineItem, CartServiceError>;
}
