//! Commerce Domain Models
//!
//! This module contains all data structures related to the commerce
//! domain: product variants, stores, carts, line items, and the tagged
//! outcome of the add-to-cart operation.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Catalog / Store / Cart Models
// =============================================================================

/// The cart type every operation in this crate works against.
pub const DEFAULT_CART_TYPE: &str = "default";

/// A specific purchasable configuration of a product (e.g., size/color).
///
/// Owned by the catalog collaborator; read-only from the operation's
/// perspective.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVariant {
    /// Stable UUID of the variant.
    pub uuid: String,

    /// Human-assigned stock keeping unit, when one is set.
    pub sku: Option<String>,

    /// Display title shown in result messages.
    pub title: String,

    /// Only published variants can be added to a cart.
    pub published: bool,
}

/// A storefront a cart belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: String,
    pub name: String,
}

/// Handle to a cart held by the cart collaborator.
///
/// A cart is associated with exactly one (cart type, store) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: String,
    pub cart_type: String,
    pub store_id: String,
}

/// One entry in a cart representing a variant and quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub variant_uuid: String,
    pub title: String,
    pub quantity: u32,
}

// =============================================================================
// Operation Input
// =============================================================================

/// Returns the default quantity ("1") for add-to-cart requests
fn default_quantity() -> String {
    "1".to_string()
}

/// Returns the default combine flag (true) for add-to-cart requests
fn default_combine() -> bool {
    true
}

/// Input for the add-to-cart operation.
///
/// `sku` and `uuid` are both optional, but at least one must be
/// non-empty. When both are supplied, SKU takes priority.
#[derive(Debug, Clone, Deserialize)]
pub struct AddToCartRequest {
    /// Product variant SKU (e.g., "SHIRT-001").
    #[serde(default)]
    pub sku: Option<String>,

    /// Product variant UUID.
    #[serde(default)]
    pub uuid: Option<String>,

    /// Quantity to add, as a numeric string (defaults to "1").
    #[serde(default = "default_quantity")]
    pub quantity: String,

    /// Whether to merge with a matching line item already in the cart.
    #[serde(default = "default_combine")]
    pub combine: bool,
}

impl Default for AddToCartRequest {
    fn default() -> Self {
        Self {
            sku: None,
            uuid: None,
            quantity: default_quantity(),
            combine: default_combine(),
        }
    }
}

// =============================================================================
// Operation Outcome
// =============================================================================

/// The identifier actually used to resolve a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum VariantIdentifier {
    Sku(String),
    Uuid(String),
}

impl fmt::Display for VariantIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sku(value) => write!(f, "SKU '{value}'"),
            Self::Uuid(value) => write!(f, "UUID '{value}'"),
        }
    }
}

/// Successful outcome of the add-to-cart operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartAddition {
    /// Quantity as requested (numeric string, echoed back verbatim).
    pub quantity: String,

    /// Display title of the variant that was added.
    pub variant_title: String,

    /// The identifier that resolved the variant (SKU wins over UUID).
    pub identifier: VariantIdentifier,

    /// Identifier of the line item created or merged into.
    pub line_item_id: String,
}

/// Failure outcome of the add-to-cart operation.
///
/// Every variant is recovered locally and rendered as text at the tool
/// boundary; none escapes the operation as a panic or transport error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddToCartError {
    #[error("Either 'sku' or 'uuid' must be provided.")]
    MissingIdentifier,

    #[error("Product variant with {0} not found.")]
    NotFound(VariantIdentifier),

    #[error("Product variant is not available for purchase.")]
    Unpurchasable,

    #[error("No store context available.")]
    NoStoreContext,

    /// The cart collaborator rejected the mutation; carries its message text.
    #[error("{0}")]
    CartMutationFailed(String),
}

impl AddToCartError {
    /// Stable machine-readable reason code for structured tool output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingIdentifier => "missing_identifier",
            Self::NotFound(_) => "not_found",
            Self::Unpurchasable => "unpurchasable",
            Self::NoStoreContext => "no_store_context",
            Self::CartMutationFailed(_) => "cart_mutation_failed",
        }
    }
}

/// Error surface of the cart collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartServiceError {
    #[error("invalid quantity '{0}': expected a positive whole number")]
    InvalidQuantity(String),

    #[error("unknown cart '{0}'")]
    UnknownCart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_display_names_the_kind() {
        assert_eq!(
            VariantIdentifier::Sku("SHIRT-001".into()).to_string(),
            "SKU 'SHIRT-001'"
        );
        assert_eq!(
            VariantIdentifier::Uuid("abc-123".into()).to_string(),
            "UUID 'abc-123'"
        );
    }

    #[test]
    fn not_found_embeds_identifier_and_value() {
        let err = AddToCartError::NotFound(VariantIdentifier::Uuid("nonexistent-uuid".into()));
        assert_eq!(
            err.to_string(),
            "Product variant with UUID 'nonexistent-uuid' not found."
        );
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn request_defaults_match_tool_schema() {
        let request: AddToCartRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(request.sku, None);
        assert_eq!(request.uuid, None);
        assert_eq!(request.quantity, "1");
        assert!(request.combine);
    }
}
