//! Application State
//!
//! Wires the add-to-cart operation to its collaborators and shares it
//! across request handlers.

use super::memory::{FixedStoreResolver, InMemoryCartService, InMemoryCatalog};
use super::models::{ProductVariant, Store};
use super::operation::AddToCartOperation;
use super::service::{CartService, ProductCatalog, StoreResolver};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the operation with its injected collaborators.
pub struct AppState {
    pub operation: AddToCartOperation,
}

impl AppState {
    /// Creates the state from explicit collaborator implementations.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        stores: Arc<dyn StoreResolver>,
        carts: Arc<dyn CartService>,
    ) -> Self {
        Self {
            operation: AddToCartOperation::new(catalog, stores, carts),
        }
    }

    /// State backed by in-memory collaborators seeded with a demo
    /// catalog, used by the standalone server binary.
    pub fn demo() -> Self {
        let catalog = InMemoryCatalog::with_variants([
            ProductVariant {
                uuid: "3f2c9d8e-5b7a-4e21-9c4d-8a1b2c3d4e5f".into(),
                sku: Some("SHIRT-001".into()),
                title: "Blue Shirt".into(),
                published: true,
            },
            ProductVariant {
                uuid: "71a5e9b2-0d4c-4f8e-b6a3-5c9d2e7f1a08".into(),
                sku: Some("MUG-014".into()),
                title: "Enamel Camp Mug".into(),
                published: true,
            },
            ProductVariant {
                uuid: "b8d41c6f-92e3-4a7d-8f50-6e2a9c4b7d31".into(),
                sku: Some("POSTER-2019".into()),
                title: "Archive Poster".into(),
                published: false,
            },
        ]);

        let store = Store {
            id: "main".into(),
            name: "Main Store".into(),
        };

        tracing::info!(store = %store.id, variants = 3, "seeded demo catalog");

        Self::new(
            Arc::new(catalog),
            Arc::new(FixedStoreResolver::new(store)),
            Arc::new(InMemoryCartService::new()),
        )
    }
}
