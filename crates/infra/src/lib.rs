//! # PlantOps Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The generic HTTP client wrapper
//! - The ERP session client and sync engines
//! - The in-memory persistence collaborator
//!
//! ## Architecture
//! - Implements traits defined in `plantops-core`
//! - Contains all "impure" code (network, shared state)

pub mod config;
pub mod erp;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use erp::*;
pub use http::*;
pub use storage::*;
