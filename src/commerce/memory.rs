//! In-Memory Collaborator Implementations
//!
//! Reference implementations of the collaborator traits backed by
//! `DashMap`, used by the standalone server and the integration tests.
//! DashMap allows concurrent access without external Mutexes, which
//! gives `get_or_create_default_cart` safe create-or-get semantics.

use super::models::{
    Cart, CartServiceError, LineItem, ProductVariant, Store, DEFAULT_CART_TYPE,
};
use super::service::{CartService, ProductCatalog, StoreResolver};
use dashmap::DashMap;
use uuid::Uuid;

// =============================================================================
// Catalog
// =============================================================================

/// Product catalog holding a fixed set of variants, keyed by UUID.
pub struct InMemoryCatalog {
    variants: DashMap<String, ProductVariant>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            variants: DashMap::new(),
        }
    }

    /// Creates a catalog pre-seeded with `variants`.
    pub fn with_variants(variants: impl IntoIterator<Item = ProductVariant>) -> Self {
        let catalog = Self::new();
        for variant in variants {
            catalog.insert(variant);
        }
        catalog
    }

    /// Inserts or replaces a variant.
    pub fn insert(&self, variant: ProductVariant) {
        self.variants.insert(variant.uuid.clone(), variant);
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn find_by_sku(&self, sku: &str) -> Option<ProductVariant> {
        self.variants
            .iter()
            .find(|entry| entry.value().sku.as_deref() == Some(sku))
            .map(|entry| entry.value().clone())
    }

    fn find_by_uuid(&self, uuid: &str) -> Option<ProductVariant> {
        self.variants.get(uuid).map(|entry| entry.value().clone())
    }
}

// =============================================================================
// Store Resolution
// =============================================================================

/// Store resolver that always answers with the same store (or none).
pub struct FixedStoreResolver {
    store: Option<Store>,
}

impl FixedStoreResolver {
    /// Resolver pinned to a single store.
    pub fn new(store: Store) -> Self {
        Self { store: Some(store) }
    }

    /// Resolver with no store context at all.
    pub fn unresolved() -> Self {
        Self { store: None }
    }
}

impl StoreResolver for FixedStoreResolver {
    fn current_store(&self) -> Option<Store> {
        self.store.clone()
    }
}

// =============================================================================
// Cart Service
// =============================================================================

/// Per-cart storage: the cart handle plus its line items.
struct CartRecord {
    cart: Cart,
    items: Vec<LineItem>,
}

impl CartRecord {
    fn new(store: &Store) -> Self {
        Self {
            cart: Cart {
                id: Uuid::new_v4().simple().to_string(),
                cart_type: DEFAULT_CART_TYPE.to_string(),
                store_id: store.id.clone(),
            },
            items: Vec::new(),
        }
    }
}

/// Cart service holding carts keyed by (cart type, store).
pub struct InMemoryCartService {
    carts: DashMap<String, CartRecord>,
}

/// Storage key for the one cart per (cart type, store) pair.
fn cart_key(cart_type: &str, store_id: &str) -> String {
    format!("{cart_type}:{store_id}")
}

/// Parses the numeric-string quantity, rejecting zero and non-numbers.
fn parse_quantity(raw: &str) -> Result<u32, CartServiceError> {
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(CartServiceError::InvalidQuantity(raw.to_string())),
    }
}

impl Default for InMemoryCartService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCartService {
    pub fn new() -> Self {
        Self {
            carts: DashMap::new(),
        }
    }

    /// Snapshot of the line items currently in `cart` (test/inspection aid).
    pub fn line_items(&self, cart: &Cart) -> Vec<LineItem> {
        self.carts
            .get(&cart_key(&cart.cart_type, &cart.store_id))
            .map(|record| record.items.clone())
            .unwrap_or_default()
    }
}

impl CartService for InMemoryCartService {
    fn get_or_create_default_cart(&self, store: &Store) -> Cart {
        self.carts
            .entry(cart_key(DEFAULT_CART_TYPE, &store.id))
            .or_insert_with(|| CartRecord::new(store))
            .cart
            .clone()
    }

    fn add_line_item(
        &self,
        cart: &Cart,
        variant: &ProductVariant,
        quantity: &str,
        combine: bool,
    ) -> Result<LineItem, CartServiceError> {
        let requested = parse_quantity(quantity)?;

        let mut record = self
            .carts
            .get_mut(&cart_key(&cart.cart_type, &cart.store_id))
            .ok_or_else(|| CartServiceError::UnknownCart(cart.id.clone()))?;

        if combine {
            if let Some(existing) = record
                .items
                .iter_mut()
                .find(|item| item.variant_uuid == variant.uuid)
            {
                existing.quantity += requested;
                return Ok(existing.clone());
            }
        }

        let item = LineItem {
            id: Uuid::new_v4().simple().to_string(),
            variant_uuid: variant.uuid.clone(),
            title: variant.title.clone(),
            quantity: requested,
        };
        record.items.push(item.clone());
        Ok(item)
    }
}
