//! Commerce Domain Module
//!
//! This module contains the add-to-cart business surface, including:
//! - Domain models (variants, stores, carts, the operation outcome)
//! - Collaborator interfaces (catalog, store resolver, cart service)
//! - In-memory collaborator implementations
//! - The add-to-cart operation itself
//! - Application state management

pub mod memory;
pub mod models;
pub mod operation;
pub mod service;
pub mod state;

// Re-export commonly used types for convenience
pub use operation::AddToCartOperation;
pub use state::{AppState, SharedState};
