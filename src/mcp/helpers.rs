//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication,
//! the tool group declaration, and the presentation of operation
//! outcomes as tool output text.

use crate::commerce::models::{AddToCartError, CartAddition};
use serde_json::{json, Value};

/// Builds the grouping declaration advertised alongside the tool list.
pub fn group_declaration() -> Value {
    json!({
        "id": super::models::GROUP_ID,
        "name": super::models::GROUP_NAME,
        "description": super::models::GROUP_DESCRIPTION,
        "weight": super::models::GROUP_WEIGHT,
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Renders a tagged operation outcome into the single human-readable
/// string the tool returns.
///
/// This is the only place outcome text is produced; the operation
/// itself deals strictly in tagged values.
pub fn format_outcome(outcome: &Result<CartAddition, AddToCartError>) -> String {
    match outcome {
        Ok(addition) => format!(
            "Successfully added {} x \"{}\" ({}) to cart. Line item ID: {}",
            addition.quantity, addition.variant_title, addition.identifier, addition.line_item_id
        ),
        Err(AddToCartError::CartMutationFailed(message)) => {
            format!("Error adding to cart: {message}")
        }
        Err(failure) => format!("Error: {failure}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commerce::models::VariantIdentifier;

    #[test]
    fn rpc_envelopes() {
        let success = rpc_success(json!(1), json!("ok"));
        assert_eq!(success["result"], "ok");
        assert_eq!(success["id"], 1);

        let error = rpc_error(json!(2), -1, "fail");
        assert_eq!(error["error"]["message"], "fail");
        assert_eq!(error["id"], 2);
    }

    #[test]
    fn group_declaration_shape() {
        let group = group_declaration();
        assert_eq!(group["id"], "commerce_tools");
        assert_eq!(group["name"], "Commerce Tools");
        assert_eq!(group["weight"], -10);
    }

    #[test]
    fn success_text_embeds_all_report_fields() {
        let outcome = Ok(CartAddition {
            quantity: "2".into(),
            variant_title: "Blue Shirt".into(),
            identifier: VariantIdentifier::Sku("SHIRT-001".into()),
            line_item_id: "li-42".into(),
        });
        assert_eq!(
            format_outcome(&outcome),
            "Successfully added 2 x \"Blue Shirt\" (SKU 'SHIRT-001') to cart. Line item ID: li-42"
        );
    }

    #[test]
    fn failure_text_uses_the_error_display() {
        let outcome = Err(AddToCartError::MissingIdentifier);
        assert_eq!(
            format_outcome(&outcome),
            "Error: Either 'sku' or 'uuid' must be provided."
        );

        let outcome = Err(AddToCartError::CartMutationFailed("out of stock".into()));
        assert_eq!(
            format_outcome(&outcome),
            "Error adding to cart: out of stock"
        );
    }
}
