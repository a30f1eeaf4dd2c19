//! Full-sync coordinator
//!
//! Runs both entity reconciliations and folds the outcomes into one
//! [`FullSyncReport`]. A failure on one side never prevents the other from
//! running and never discards the surviving report.

use std::sync::Arc;

use plantops_domain::FullSyncReport;
use tracing::{error, info};

use super::equipment_sync::EquipmentSync;
use super::work_order_sync::WorkOrderSync;

/// Orchestrates a full synchronization run across both entities.
pub struct SyncCoordinator {
    equipment: Arc<EquipmentSync>,
    work_orders: Arc<WorkOrderSync>,
}

impl SyncCoordinator {
    pub fn new(equipment: Arc<EquipmentSync>, work_orders: Arc<WorkOrderSync>) -> Self {
        Self { equipment, work_orders }
    }

    /// Reconcile equipment and work orders concurrently.
    ///
    /// Both sides always run to completion. `success` is false when either
    /// side failed at the operation level; the first failure's message is
    /// carried in `error` and the other side's report is kept.
    pub async fn sync_all(&self) -> FullSyncReport {
        info!("full synchronization started");
        let (equipment, work_orders) =
            tokio::join!(self.equipment.reconcile_all(), self.work_orders.reconcile_all());

        let mut report = FullSyncReport { success: true, ..FullSyncReport::default() };

        match equipment {
            Ok(summary) => report.equipment = Some(summary),
            Err(err) => {
                error!(error = %err, "equipment reconciliation failed");
                report.success = false;
                report.error = Some(err.to_string());
            }
        }

        match work_orders {
            Ok(summary) => report.work_orders = Some(summary),
            Err(err) => {
                error!(error = %err, "work order reconciliation failed");
                report.success = false;
                if report.error.is_none() {
                    report.error = Some(err.to_string());
                }
            }
        }

        info!(success = report.success, "full synchronization finished");
        report
    }
}
