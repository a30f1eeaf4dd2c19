//! Work order records and their fixed enumerations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Work order priority, mapped onto the ERP's single-digit 1..4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl WorkOrderPriority {
    /// Every priority value, for exhaustive mapping checks.
    pub const ALL: [Self; 4] = [Self::Urgent, Self::High, Self::Medium, Self::Low];
}

/// Work order lifecycle status.
///
/// `Cancelled` has no ERP counterpart and `Unknown` covers codes the ERP
/// sends that the local model does not track; both serialize to the default
/// remote status code on push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Open,
    InProgress,
    AwaitingParts,
    Completed,
    Closed,
    Cancelled,
    Unknown,
}

impl WorkOrderStatus {
    /// Every status value, for exhaustive mapping checks.
    pub const ALL: [Self; 7] = [
        Self::Open,
        Self::InProgress,
        Self::AwaitingParts,
        Self::Completed,
        Self::Closed,
        Self::Cancelled,
        Self::Unknown,
    ];

    /// Statuses with a distinct ERP code in both directions.
    pub const ROUND_TRIPPABLE: [Self; 5] =
        [Self::Open, Self::InProgress, Self::AwaitingParts, Self::Completed, Self::Closed];
}

/// Work order as stored locally.
///
/// `code` is the ERP order number, set once a remote counterpart exists; a
/// local order without one has never been seen by the ERP. `equipment_id`
/// may be `None` when the remote equipment code had no local match (an
/// orphaned order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: i64,
    pub code: Option<String>,
    pub title: String,
    pub description: String,
    pub equipment_id: Option<i64>,
    pub priority: WorkOrderPriority,
    pub status: WorkOrderStatus,
    /// Free text locally, mapped to the ERP's fixed order-type codes.
    pub order_type: String,
    pub assigned_to: Option<i64>,
    /// ISO `YYYY-MM-DD`
    pub created_date: Option<String>,
    pub due_date: Option<String>,
    pub completion_date: Option<String>,
    pub estimated_hours: Option<i32>,
    pub actual_hours: Option<i32>,
    pub location: Option<String>,
    /// Ordered part list; not populated by sync.
    pub parts: Vec<String>,
    pub notes: Option<String>,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub sync_status: Option<String>,
}

/// Work order payload without a store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkOrder {
    pub code: Option<String>,
    pub title: String,
    pub description: String,
    pub equipment_id: Option<i64>,
    pub priority: WorkOrderPriority,
    pub status: WorkOrderStatus,
    pub order_type: String,
    pub assigned_to: Option<i64>,
    pub created_date: Option<String>,
    pub due_date: Option<String>,
    pub completion_date: Option<String>,
    pub estimated_hours: Option<i32>,
    pub actual_hours: Option<i32>,
    pub location: Option<String>,
    pub parts: Vec<String>,
    pub notes: Option<String>,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub sync_status: Option<String>,
}
