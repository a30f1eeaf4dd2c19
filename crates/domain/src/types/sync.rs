//! Synchronization report types

use serde::{Deserialize, Serialize};

/// Outcome counters for one reconciliation pass.
///
/// Per-record failures are counted under `errors` and never abort the rest
/// of the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub added: u32,
    pub updated: u32,
    pub errors: u32,
}

/// Combined report of a full sync run.
///
/// A side that failed at the operation level (host unreachable, total auth
/// failure) leaves its report `None`; per-record errors inside a completed
/// reconciliation do not flip `success`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullSyncReport {
    pub equipment: Option<SyncReport>,
    pub work_orders: Option<SyncReport>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
