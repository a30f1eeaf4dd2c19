//! # PlantOps Core
//!
//! Pure business logic for the ERP synchronization subsystem.
//!
//! This crate contains:
//! - Port interfaces for the local persistence collaborator
//! - Field mappers between local and ERP representations
//!
//! ## Architecture
//! - Depends only on `plantops-domain`
//! - No I/O: repositories are traits, mappers are total functions

pub mod mapping;
pub mod ports;

pub use ports::*;
