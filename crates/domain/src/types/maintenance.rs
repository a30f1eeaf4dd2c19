//! Maintenance history records

use serde::{Deserialize, Serialize};

/// One completed maintenance intervention on an equipment asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub equipment_id: i64,
    pub work_order_id: Option<i64>,
    pub performed_by: i64,
    /// ISO `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    pub outcome: Option<String>,
}

/// Maintenance record payload without a store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaintenanceRecord {
    pub equipment_id: i64,
    pub work_order_id: Option<i64>,
    pub performed_by: i64,
    pub date: String,
    pub description: String,
    pub outcome: Option<String>,
}
