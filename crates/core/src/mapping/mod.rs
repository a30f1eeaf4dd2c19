//! Field mappers between local and ERP representations
//!
//! All functions here are pure, stateless and total: unknown remote codes
//! degrade to a defined local value, unmapped local values serialize to a
//! defined remote default, and malformed dates become `None`. Nothing in
//! this module returns an error; resilience to a partially-conformant
//! remote schema is a deliberate policy, not an accident.

pub mod dates;
pub mod equipment;
pub mod work_order;

#[cfg(test)]
pub(crate) mod test_support;

pub use dates::{iso_to_packed, packed_to_iso};
pub use equipment::{equipment_from_remote, equipment_to_remote};
pub use work_order::{work_order_from_remote, work_order_to_remote};
