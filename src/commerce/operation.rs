//! Add-To-Cart Operation
//!
//! The single operation of this crate: a linear
//! validate → resolve → mutate → report pipeline. Every step is a
//! terminal early return on failure, and all business logic is
//! delegated to the injected collaborators.

use super::models::{
    AddToCartError, AddToCartRequest, CartAddition, ProductVariant, VariantIdentifier,
};
use super::service::{CartService, ProductCatalog, StoreResolver};
use std::sync::Arc;

/// Adds a product variant to the default cart of the current store.
///
/// Holds no state across invocations; each call performs at most one
/// cart mutation and never retries.
pub struct AddToCartOperation {
    catalog: Arc<dyn ProductCatalog>,
    stores: Arc<dyn StoreResolver>,
    carts: Arc<dyn CartService>,
}

impl AddToCartOperation {
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        stores: Arc<dyn StoreResolver>,
        carts: Arc<dyn CartService>,
    ) -> Self {
        Self {
            catalog,
            stores,
            carts,
        }
    }

    /// Executes the pipeline for one request.
    ///
    /// Produces exactly one tagged outcome per invocation; failures are
    /// returned, never raised.
    pub fn execute(&self, request: &AddToCartRequest) -> Result<CartAddition, AddToCartError> {
        // Empty strings count as absent identifiers.
        let sku = request.sku.as_deref().unwrap_or("").trim();
        let uuid = request.uuid.as_deref().unwrap_or("").trim();

        if sku.is_empty() && uuid.is_empty() {
            return Err(AddToCartError::MissingIdentifier);
        }

        // SKU takes priority when both identifiers are supplied; the
        // UUID lookup is never attempted in that case.
        let (variant, identifier) = if !sku.is_empty() {
            self.resolve(VariantIdentifier::Sku(sku.to_string()))?
        } else {
            self.resolve(VariantIdentifier::Uuid(uuid.to_string()))?
        };

        if !variant.published {
            return Err(AddToCartError::Unpurchasable);
        }

        let store = self
            .stores
            .current_store()
            .ok_or(AddToCartError::NoStoreContext)?;

        // Cart creation itself never fails the operation.
        let cart = self.carts.get_or_create_default_cart(&store);

        let line_item = self
            .carts
            .add_line_item(&cart, &variant, &request.quantity, request.combine)
            .map_err(|err| AddToCartError::CartMutationFailed(err.to_string()))?;

        tracing::debug!(
            identifier = %identifier,
            quantity = %request.quantity,
            line_item = %line_item.id,
            "added variant to cart"
        );

        Ok(CartAddition {
            quantity: request.quantity.clone(),
            variant_title: variant.title,
            identifier,
            line_item_id: line_item.id,
        })
    }

    fn resolve(
        &self,
        identifier: VariantIdentifier,
    ) -> Result<(ProductVariant, VariantIdentifier), AddToCartError> {
        let found = match &identifier {
            VariantIdentifier::Sku(sku) => self.catalog.find_by_sku(sku),
            VariantIdentifier::Uuid(uuid) => self.catalog.find_by_uuid(uuid),
        };
        match found {
            Some(variant) => Ok((variant, identifier)),
            None => Err(AddToCartError::NotFound(identifier)),
        }
    }
}
