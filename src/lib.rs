//! Commerce Cart Tools
//!
//! This library exposes a storefront "add product to cart" operation as
//! a callable tool for AI agents over MCP (Model Context Protocol).
//! All business logic is delegated to collaborator services injected
//! into the operation; in-memory reference implementations back the
//! standalone server.

// Domain modules
pub mod commerce;
pub mod mcp;

// Infrastructure
pub mod router;
