//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the
//! commerce cart tools. It exports `handle_tool_call` publicly to make
//! it accessible for tests.

use super::{helpers::*, models::*};
use crate::commerce::models::AddToCartRequest;
use crate::commerce::state::{AppState, SharedState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "json parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(method = method_name, id = ?id, "mcp call");

    // Dispatch Method
    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, -32602, msg), // Invalid params or internal error
            }
        }
        "ping" => rpc_success(id, json!({})), // Optional but good for health checks
        _ => {
            tracing::warn!(method = method_name, "unknown method");
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": "0.1.0"
        }
    })
}

/// Handles `tools/list` request.
///
/// Declares the add-to-cart tool together with the grouping declaration
/// it belongs to.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": TOOL_NAME,
                "title": "Add Product to Cart",
                "description": "Adds a product to the shopping cart by product variant SKU or UUID.",
                "group": GROUP_ID,
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "sku": {
                            "type": "string",
                            "description": "The product variant SKU to add to cart (e.g., 'SHIRT-001')."
                        },
                        "uuid": {
                            "type": "string",
                            "description": "The product variant UUID to add to cart."
                        },
                        "quantity": {
                            "type": "string",
                            "description": "The quantity of the product to add.",
                            "default": "1"
                        },
                        "combine": {
                            "type": "boolean",
                            "description": "Whether to combine with existing cart items if matching.",
                            "default": true
                        }
                    },
                    "additionalProperties": false
                }
            }
        ],
        "groups": [group_declaration()]
    })
}

/// Handles `tools/call` request (dispatch by tool name).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    match name {
        TOOL_NAME => handle_add_to_cart_tool(state, args),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

/// Handles the add_to_cart tool functionality.
///
/// Domain failures are part of the tool's normal output (rendered as
/// text); only malformed arguments surface as a JSON-RPC error.
fn handle_add_to_cart_tool(state: &AppState, args: Value) -> Result<Value, String> {
    let request: AddToCartRequest =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    let outcome = state.operation.execute(&request);
    let message = format_outcome(&outcome);

    let structured = match &outcome {
        Ok(addition) => json!({
            "status": "added",
            "quantity": addition.quantity,
            "variantTitle": addition.variant_title,
            "identifier": addition.identifier.to_string(),
            "lineItemId": addition.line_item_id,
        }),
        Err(failure) => json!({
            "status": "failed",
            "reason": failure.code(),
        }),
    };

    Ok(json!({
        "content": [{ "type": "text", "text": message }],
        "structuredContent": structured
    }))
}
