//! Work order synchronization engine
//!
//! Maintenance orders join on the ERP order number held in the local
//! `code` field. Remote orders reference their equipment by external code
//! and their responsible person by staff id rendered as a string; every
//! fetch path resolves both against the local store as part of mapping,
//! and an unresolvable reference degrades to `None` instead of failing
//! the record.

use std::sync::Arc;

use chrono::Utc;
use plantops_core::mapping::{work_order_from_remote, work_order_to_remote};
use plantops_core::{EquipmentRepository, StaffRepository, WorkOrderRepository};
use plantops_domain::{NewWorkOrder, ODataList, ODataSingle, RemoteWorkOrder, SyncReport};
use serde_json::Value;
use tracing::{info, warn};

use super::errors::ErpError;
use super::session::ErpSession;
use super::{endpoints, keyed_path};

/// Only orders raised against equipment are synced.
const ORDER_FILTER: &str = "MaintObjectType eq 'EQUI'";

/// Sync engine for maintenance orders.
pub struct WorkOrderSync {
    session: Arc<ErpSession>,
    orders: Arc<dyn WorkOrderRepository>,
    equipment: Arc<dyn EquipmentRepository>,
    staff: Arc<dyn StaffRepository>,
}

impl WorkOrderSync {
    pub fn new(
        session: Arc<ErpSession>,
        orders: Arc<dyn WorkOrderRepository>,
        equipment: Arc<dyn EquipmentRepository>,
        staff: Arc<dyn StaffRepository>,
    ) -> Self {
        Self { session, orders, equipment, staff }
    }

    /// Fetch one remote maintenance order by order number. A gateway 404
    /// maps to `Ok(None)`.
    pub async fn fetch_remote_by_code(
        &self,
        code: &str,
    ) -> Result<Option<RemoteWorkOrder>, ErpError> {
        let path = keyed_path(endpoints::WORK_ORDERS, code);
        match self.session.get::<ODataSingle<RemoteWorkOrder>>(&path, None).await {
            Ok(single) => Ok(single.d),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Fetch every equipment-bound maintenance order, mapped to the local
    /// shape with references resolved.
    pub async fn fetch_all(&self) -> Result<Vec<NewWorkOrder>, ErpError> {
        let remotes = self.fetch_all_remote().await?;
        self.map_batch(&remotes).await
    }

    /// Fetch the maintenance orders raised against one equipment code,
    /// mapped to the local shape with references resolved.
    pub async fn fetch_for_equipment(
        &self,
        equipment_code: &str,
    ) -> Result<Vec<NewWorkOrder>, ErpError> {
        let filter = format!("{ORDER_FILTER} and Equipment eq '{equipment_code}'");
        let list: ODataList<RemoteWorkOrder> =
            self.session.get(endpoints::WORK_ORDERS, Some(&[("$filter", filter.as_str())])).await?;
        self.map_batch(&list.into_results()).await
    }

    async fn fetch_all_remote(&self) -> Result<Vec<RemoteWorkOrder>, ErpError> {
        let list: ODataList<RemoteWorkOrder> =
            self.session.get(endpoints::WORK_ORDERS, Some(&[("$filter", ORDER_FILTER)])).await?;
        Ok(list.into_results())
    }

    /// Map one remote order, resolving the equipment code and responsible
    /// person against the local store. Unresolvable references map to
    /// `None`; only storage failures error.
    pub async fn map_remote(&self, remote: &RemoteWorkOrder) -> Result<NewWorkOrder, ErpError> {
        let equipment_id = self.resolve_equipment(&remote.equipment).await?;
        let assigned_to = self.resolve_staff(&remote.person_responsible).await?;
        Ok(work_order_from_remote(remote, equipment_id, assigned_to))
    }

    async fn map_batch(&self, remotes: &[RemoteWorkOrder]) -> Result<Vec<NewWorkOrder>, ErpError> {
        let mut mapped = Vec::with_capacity(remotes.len());
        for remote in remotes {
            mapped.push(self.map_remote(remote).await?);
        }
        Ok(mapped)
    }

    /// Push one local work order to the ERP.
    ///
    /// Orders that already carry an order number are probed and replaced
    /// with PUT when present; everything else is created with POST.
    /// Failures are logged and reported as `false`.
    pub async fn push_one(&self, id: i64) -> bool {
        match self.try_push(id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(work_order_id = id, error = %err, "work order push failed");
                false
            }
        }
    }

    async fn try_push(&self, id: i64) -> Result<(), ErpError> {
        let local = self
            .orders
            .get_work_order(id)
            .await?
            .ok_or_else(|| ErpError::Storage(format!("no work order with id {id}")))?;

        let equipment_code = match local.equipment_id {
            Some(equipment_id) => self
                .equipment
                .get_equipment(equipment_id)
                .await?
                .map(|equipment| equipment.code)
                .unwrap_or_default(),
            None => String::new(),
        };

        let remote = work_order_to_remote(&local, &equipment_code);
        let existing = match &local.code {
            Some(code) => self.fetch_remote_by_code(code).await?,
            None => None,
        };

        match (existing, &local.code) {
            (Some(_), Some(code)) => {
                let path = keyed_path(endpoints::WORK_ORDERS, code);
                let _: Value = self.session.put(&path, &remote).await?;
                info!(code = %code, "work order updated in ERP");
            }
            _ => {
                let _: Value = self.session.post(endpoints::WORK_ORDERS, &remote).await?;
                info!(work_order_id = id, "work order created in ERP");
            }
        }
        Ok(())
    }

    /// Pull every remote maintenance order and upsert it locally.
    ///
    /// Per-record failures increment the error counter; records without an
    /// order number cannot be joined and count as errors too.
    pub async fn reconcile_all(&self) -> Result<SyncReport, ErpError> {
        let remotes = self.fetch_all_remote().await?;
        let mut report = SyncReport::default();

        for remote in &remotes {
            match self.apply_remote(remote).await {
                Ok(Applied::Added) => report.added += 1,
                Ok(Applied::Updated) => report.updated += 1,
                Err(err) => {
                    warn!(code = %remote.maintenance_order, error = %err, "work order failed to apply");
                    report.errors += 1;
                }
            }
        }

        info!(
            added = report.added,
            updated = report.updated,
            errors = report.errors,
            "work order reconciliation finished"
        );
        Ok(report)
    }

    async fn apply_remote(&self, remote: &RemoteWorkOrder) -> Result<Applied, ErpError> {
        let mut payload = self.map_remote(remote).await?;
        payload.last_synced_at = Some(Utc::now());
        payload.sync_status = Some("synced".to_string());

        let code = payload
            .code
            .clone()
            .ok_or_else(|| ErpError::Storage("remote order has no order number".to_string()))?;

        match self.orders.get_work_order_by_code(&code).await? {
            Some(existing) => {
                self.orders.update_work_order(existing.id, &payload).await?;
                Ok(Applied::Updated)
            }
            None => {
                self.orders.create_work_order(&payload).await?;
                Ok(Applied::Added)
            }
        }
    }

    /// Resolve a remote equipment code to a local id. An empty code or a
    /// code with no local counterpart resolves to `None`.
    async fn resolve_equipment(&self, code: &str) -> Result<Option<i64>, ErpError> {
        if code.trim().is_empty() {
            return Ok(None);
        }
        Ok(self.equipment.get_equipment_by_code(code).await?.map(|equipment| equipment.id))
    }

    /// Resolve the remote responsible-person field to a local staff id.
    /// The field must parse as an integer and name an existing staff
    /// member; otherwise the assignment is dropped.
    async fn resolve_staff(&self, person: &str) -> Result<Option<i64>, ErpError> {
        let Ok(id) = person.trim().parse::<i64>() else {
            return Ok(None);
        };
        Ok(self.staff.get_staff(id).await?.map(|staff| staff.id))
    }
}

enum Applied {
    Added,
    Updated,
}
