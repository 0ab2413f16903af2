//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification, plus the tool group
//! declaration this server advertises.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the add-to-cart tool
pub const TOOL_NAME: &str = "add_to_cart";
/// Identifier of the tool group the tool belongs to
pub const GROUP_ID: &str = "commerce_tools";
/// Display name of the tool group
pub const GROUP_NAME: &str = "Commerce Tools";
/// Description of the tool group
pub const GROUP_DESCRIPTION: &str = "Storefront tools for managing the shopping cart.";
/// Sort weight of the tool group (lower sorts first)
pub const GROUP_WEIGHT: i32 = -10;
/// Server identifier
pub const SERVER_NAME: &str = "commerce-cart-tools";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
