//! ERP synchronization subsystem
//!
//! # Architecture
//!
//! - [`ErpSession`]: authenticated HTTP access to the ERP's OData gateway
//! - [`EquipmentSync`] / [`WorkOrderSync`]: per-entity sync engines
//!   (fetch, push, reconcile) over the session and the local repositories
//! - [`SyncCoordinator`]: runs both reconciliations and aggregates one
//!   combined report
//!
//! The local↔remote join is always the external code string; local integer
//! ids never cross the boundary. Reconciliation treats the ERP as the
//! source of truth for mapped fields, push treats the local record as
//! authoritative, and neither direction ever deletes.

pub mod coordinator;
pub mod equipment_sync;
pub mod errors;
pub mod session;
pub mod work_order_sync;

pub use coordinator::SyncCoordinator;
pub use equipment_sync::EquipmentSync;
pub use errors::ErpError;
pub use session::ErpSession;
pub use work_order_sync::WorkOrderSync;

/// OData entity endpoints on the ERP gateway.
pub mod endpoints {
    pub const EQUIPMENT: &str = "/API_EQUIPMENT/Equipment";
    pub const WORK_ORDERS: &str = "/API_MAINTENANCEORDER/MaintenanceOrder";
}

/// Entity-keyed OData path of the form `Collection('key')`.
pub(crate) fn keyed_path(endpoint: &str, key: &str) -> String {
    format!("{endpoint}('{key}')")
}
