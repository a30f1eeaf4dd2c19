//! Route handlers
//!
//! Read endpoints fetch from the ERP and return the records mapped into
//! the local shape without persisting them; the `{id}` on GET routes is
//! the external code. Push endpoints take the local integer id.

use axum::extract::{Path, State};
use axum::Json;
use plantops_core::mapping::equipment_from_remote;
use plantops_core::{EquipmentRepository, WorkOrderRepository};
use plantops_domain::{FullSyncReport, NewEquipment, NewWorkOrder, SyncReport};
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct PushOutcome {
    pub success: bool,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn list_remote_equipment(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewEquipment>>, ApiError> {
    let remotes = state.equipment_sync.fetch_all_remote().await?;
    let mapped = remotes.iter().map(equipment_from_remote).collect();
    Ok(Json(mapped))
}

pub async fn get_remote_equipment(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<NewEquipment>, ApiError> {
    let remote = state
        .equipment_sync
        .fetch_remote_by_code(&code)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no remote equipment with code {code}")))?;
    Ok(Json(equipment_from_remote(&remote)))
}

/// Listed orders carry resolved local references but are not persisted;
/// the records are a preview of what reconciliation would ingest.
pub async fn list_remote_work_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewWorkOrder>>, ApiError> {
    Ok(Json(state.work_order_sync.fetch_all().await?))
}

pub async fn equipment_work_orders(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<NewWorkOrder>>, ApiError> {
    Ok(Json(state.work_order_sync.fetch_for_equipment(&code).await?))
}

pub async fn sync_equipment(
    State(state): State<AppState>,
) -> Result<Json<SyncReport>, ApiError> {
    let report = state.equipment_sync.reconcile_all().await?;
    Ok(Json(report))
}

pub async fn sync_work_orders(
    State(state): State<AppState>,
) -> Result<Json<SyncReport>, ApiError> {
    let report = state.work_order_sync.reconcile_all().await?;
    Ok(Json(report))
}

/// Always 200: partial failure is part of the report, not an HTTP error.
pub async fn sync_all(State(state): State<AppState>) -> Json<FullSyncReport> {
    Json(state.coordinator.sync_all().await)
}

pub async fn push_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PushOutcome>, ApiError> {
    state
        .store
        .get_equipment(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no equipment with id {id}")))?;

    if state.equipment_sync.push_one(id).await {
        info!(equipment_id = id, "equipment pushed to ERP");
        Ok(Json(PushOutcome { success: true }))
    } else {
        Err(ApiError::Upstream(format!("failed to push equipment {id}")))
    }
}

pub async fn push_work_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PushOutcome>, ApiError> {
    state
        .store
        .get_work_order(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no work order with id {id}")))?;

    if state.work_order_sync.push_one(id).await {
        info!(work_order_id = id, "work order pushed to ERP");
        Ok(Json(PushOutcome { success: true }))
    } else {
        Err(ApiError::Upstream(format!("failed to push work order {id}")))
    }
}
