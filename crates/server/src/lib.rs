//! HTTP surface for the ERP synchronization subsystem
//!
//! A thin axum layer over the sync engines: read endpoints fetch from the
//! ERP and return records mapped to the local shape without persisting
//! them, sync endpoints run reconciliations against the local store, and
//! push endpoints send one local record upstream.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use plantops_domain::ErpConfig;
use plantops_infra::erp::{EquipmentSync, ErpError, ErpSession, SyncCoordinator, WorkOrderSync};
use plantops_infra::storage::MemoryStore;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub equipment_sync: Arc<EquipmentSync>,
    pub work_order_sync: Arc<WorkOrderSync>,
    pub coordinator: Arc<SyncCoordinator>,
}

impl AppState {
    /// Wire the store, session, engines and coordinator for one ERP.
    pub fn build(config: ErpConfig) -> Result<Self, ErpError> {
        let store = Arc::new(MemoryStore::new());
        let session = Arc::new(ErpSession::new(config)?);

        let equipment_sync = Arc::new(EquipmentSync::new(session.clone(), store.clone()));
        let work_order_sync = Arc::new(WorkOrderSync::new(
            session,
            store.clone(),
            store.clone(),
            store.clone(),
        ));
        let coordinator =
            Arc::new(SyncCoordinator::new(equipment_sync.clone(), work_order_sync.clone()));

        Ok(Self { store, equipment_sync, work_order_sync, coordinator })
    }
}

/// Assemble the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/sap/equipment", get(routes::list_remote_equipment))
        .route(
            "/api/sap/equipment/{id}",
            get(routes::get_remote_equipment).post(routes::push_equipment),
        )
        .route("/api/sap/equipment/{id}/work-orders", get(routes::equipment_work_orders))
        .route("/api/sap/work-orders", get(routes::list_remote_work_orders))
        .route("/api/sap/work-orders/{id}", post(routes::push_work_order))
        .route("/api/sap/sync/equipment", post(routes::sync_equipment))
        .route("/api/sap/sync/work-orders", post(routes::sync_work_orders))
        .route("/api/sap/sync/all", post(routes::sync_all))
        .with_state(state)
}
