//! Port interfaces for the local persistence collaborator
//!
//! The sync engines are an additional writer next to the user-facing CRUD
//! surface; both go through these traits. Sync never deletes local records,
//! so no delete operations appear here.

use async_trait::async_trait;
use plantops_domain::{
    Equipment, MaintenanceRecord, NewEquipment, NewMaintenanceRecord, NewStaff, NewWorkOrder,
    Result, Staff, WorkOrder,
};

/// Equipment storage operations.
#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// List all equipment records.
    async fn list_equipment(&self) -> Result<Vec<Equipment>>;

    /// Get one equipment record by local id.
    async fn get_equipment(&self, id: i64) -> Result<Option<Equipment>>;

    /// Get one equipment record by its external code (the sync join key).
    async fn get_equipment_by_code(&self, code: &str) -> Result<Option<Equipment>>;

    /// Create an equipment record, assigning a fresh local id.
    async fn create_equipment(&self, new: &NewEquipment) -> Result<Equipment>;

    /// Replace the mutable fields of an existing equipment record.
    async fn update_equipment(&self, id: i64, new: &NewEquipment) -> Result<Equipment>;
}

/// Work order storage operations.
#[async_trait]
pub trait WorkOrderRepository: Send + Sync {
    /// List all work orders.
    async fn list_work_orders(&self) -> Result<Vec<WorkOrder>>;

    /// Get one work order by local id.
    async fn get_work_order(&self, id: i64) -> Result<Option<WorkOrder>>;

    /// Get one work order by its external code. Orders without an external
    /// code are never returned here.
    async fn get_work_order_by_code(&self, code: &str) -> Result<Option<WorkOrder>>;

    /// List work orders raised against one equipment record.
    async fn list_work_orders_for_equipment(&self, equipment_id: i64) -> Result<Vec<WorkOrder>>;

    /// Create a work order, assigning a fresh local id.
    async fn create_work_order(&self, new: &NewWorkOrder) -> Result<WorkOrder>;

    /// Replace the mutable fields of an existing work order.
    async fn update_work_order(&self, id: i64, new: &NewWorkOrder) -> Result<WorkOrder>;
}

/// Staff storage operations.
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// List all staff members.
    async fn list_staff(&self) -> Result<Vec<Staff>>;

    /// Get one staff member by local id.
    async fn get_staff(&self, id: i64) -> Result<Option<Staff>>;

    /// Create a staff member, assigning a fresh local id.
    async fn create_staff(&self, new: &NewStaff) -> Result<Staff>;
}

/// Maintenance history storage operations.
#[async_trait]
pub trait MaintenanceLogRepository: Send + Sync {
    /// List all maintenance records.
    async fn list_maintenance_records(&self) -> Result<Vec<MaintenanceRecord>>;

    /// List maintenance records for one equipment record.
    async fn list_maintenance_for_equipment(
        &self,
        equipment_id: i64,
    ) -> Result<Vec<MaintenanceRecord>>;

    /// Append a maintenance record, assigning a fresh local id.
    async fn create_maintenance_record(
        &self,
        new: &NewMaintenanceRecord,
    ) -> Result<MaintenanceRecord>;
}
