//! Equipment synchronization engine
//!
//! Pull direction treats the ERP equipment master as the source of truth
//! for mapped fields; push direction treats the local record as
//! authoritative. Records are joined on the external equipment code, and
//! neither direction deletes anything.

use std::sync::Arc;

use chrono::Utc;
use plantops_core::mapping::{equipment_from_remote, equipment_to_remote};
use plantops_core::EquipmentRepository;
use plantops_domain::{NewEquipment, ODataList, ODataSingle, RemoteEquipment, SyncReport};
use serde_json::Value;
use tracing::{info, warn};

use super::errors::ErpError;
use super::session::ErpSession;
use super::{endpoints, keyed_path};

/// Skip master records the ERP itself considers incomplete.
const EQUIPMENT_FILTER: &str = "EquipmentCategory ne '' and EquipmentStatus ne ''";

/// Sync engine for equipment master records.
pub struct EquipmentSync {
    session: Arc<ErpSession>,
    store: Arc<dyn EquipmentRepository>,
}

impl EquipmentSync {
    pub fn new(session: Arc<ErpSession>, store: Arc<dyn EquipmentRepository>) -> Self {
        Self { session, store }
    }

    /// Fetch one remote equipment record by its external code.
    ///
    /// A 404 from the gateway means the record does not exist and maps to
    /// `Ok(None)`.
    pub async fn fetch_remote_by_code(
        &self,
        code: &str,
    ) -> Result<Option<RemoteEquipment>, ErpError> {
        let path = keyed_path(endpoints::EQUIPMENT, code);
        match self.session.get::<ODataSingle<RemoteEquipment>>(&path, None).await {
            Ok(single) => Ok(single.d),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Fetch every remote equipment record with a category and status set.
    pub async fn fetch_all_remote(&self) -> Result<Vec<RemoteEquipment>, ErpError> {
        let list: ODataList<RemoteEquipment> = self
            .session
            .get(endpoints::EQUIPMENT, Some(&[("$filter", EQUIPMENT_FILTER)]))
            .await?;
        Ok(list.into_results())
    }

    /// Push one local equipment record to the ERP.
    ///
    /// The record is probed by code first: an existing remote counterpart
    /// is replaced with PUT, a missing one is created with POST. Failures
    /// are logged and reported as `false` rather than propagated, matching
    /// the fire-and-forget character of a push after a local edit.
    pub async fn push_one(&self, id: i64) -> bool {
        match self.try_push(id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(equipment_id = id, error = %err, "equipment push failed");
                false
            }
        }
    }

    async fn try_push(&self, id: i64) -> Result<(), ErpError> {
        let local = self
            .store
            .get_equipment(id)
            .await?
            .ok_or_else(|| ErpError::Storage(format!("no equipment with id {id}")))?;

        let remote = equipment_to_remote(&local);
        if self.fetch_remote_by_code(&local.code).await?.is_some() {
            let path = keyed_path(endpoints::EQUIPMENT, &local.code);
            let _: Value = self.session.put(&path, &remote).await?;
            info!(code = %local.code, "equipment updated in ERP");
        } else {
            let _: Value = self.session.post(endpoints::EQUIPMENT, &remote).await?;
            info!(code = %local.code, "equipment created in ERP");
        }
        Ok(())
    }

    /// Pull every remote equipment record and upsert it locally.
    ///
    /// Per-record failures increment the error counter and leave the rest
    /// of the batch untouched; only operation-level failures (fetch of the
    /// remote list itself) abort the pass.
    pub async fn reconcile_all(&self) -> Result<SyncReport, ErpError> {
        let remotes = self.fetch_all_remote().await?;
        let mut report = SyncReport::default();

        for remote in &remotes {
            match self.apply_remote(remote).await {
                Ok(Applied::Added) => report.added += 1,
                Ok(Applied::Updated) => report.updated += 1,
                Err(err) => {
                    warn!(code = %remote.equipment, error = %err, "equipment record failed to apply");
                    report.errors += 1;
                }
            }
        }

        info!(
            added = report.added,
            updated = report.updated,
            errors = report.errors,
            "equipment reconciliation finished"
        );
        Ok(report)
    }

    async fn apply_remote(&self, remote: &RemoteEquipment) -> Result<Applied, ErpError> {
        let mut payload: NewEquipment = equipment_from_remote(remote);
        payload.last_synced_at = Some(Utc::now());
        payload.sync_status = Some("synced".to_string());

        match self.store.get_equipment_by_code(&payload.code).await? {
            Some(existing) => {
                self.store.update_equipment(existing.id, &payload).await?;
                Ok(Applied::Updated)
            }
            None => {
                self.store.create_equipment(&payload).await?;
                Ok(Applied::Added)
            }
        }
    }
}

enum Applied {
    Added,
    Updated,
}
