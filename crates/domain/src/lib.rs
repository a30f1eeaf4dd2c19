//! # PlantOps Domain
//!
//! Business domain types and models for PlantOps.
//!
//! This crate contains:
//! - Local records (equipment, work orders, staff, maintenance history)
//! - ERP wire representations and OData envelopes
//! - Domain error types and Result definitions
//! - ERP configuration structures
//!
//! ## Architecture
//! - No dependencies on other PlantOps crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
