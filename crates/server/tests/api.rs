//! Route-level tests over the assembled router with a mocked ERP gateway.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use plantops_core::{EquipmentRepository, WorkOrderRepository};
use plantops_domain::{ErpConfig, FullSyncReport, SyncReport};
use plantops_server::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn app_against(server: &MockServer) -> (Router, AppState) {
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "expires_in": 3600,
        })))
        .mount(server)
        .await;

    let config = ErpConfig { base_url: server.uri(), ..ErpConfig::default() };
    let state = AppState::build(config).expect("state");
    (build_router(state.clone()), state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

fn post(uri: &str) -> Request<Body> {
    Request::builder().method("POST").uri(uri).body(Body::empty()).expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

fn remote_equipment(code: &str) -> Value {
    json!({
        "Equipment": code,
        "EquipmentName": "Hydraulic Press 4",
        "EquipmentCategory": "H",
        "FunctionalLocation": "PLANT-A/LINE-2",
        "EquipmentStatus": "ACTV",
        "SerialNumber": "SN-778",
        "TechnicalIdentification": "TID-12",
        "MaintenancePlant": "1000",
    })
}

#[tokio::test]
async fn health_responds_ok() {
    let server = MockServer::start().await;
    let (app, _) = app_against(&server).await;

    let response = app.oneshot(get("/health")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn remote_equipment_is_listed_in_local_shape_without_persisting() {
    let server = MockServer::start().await;
    let (app, state) = app_against(&server).await;
    Mock::given(method("GET"))
        .and(path("/sap/opu/odata/sap/API_EQUIPMENT/Equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": {"results": [remote_equipment("EQP-1")]}
        })))
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/sap/equipment")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body[0]["code"], "EQP-1");
    assert_eq!(body[0]["category"], "hydraulic");
    assert_eq!(body[0]["specifications"]["serial_number"], "SN-778");

    // Listing is a preview, not an ingest.
    assert!(state.store.list_equipment().await.expect("list").is_empty());
}

#[tokio::test]
async fn missing_remote_equipment_maps_to_404() {
    let server = MockServer::start().await;
    let (app, _) = app_against(&server).await;
    Mock::given(method("GET"))
        .and(path("/sap/opu/odata/sap/API_EQUIPMENT/Equipment('EQP-GHOST')"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/sap/equipment/EQP-GHOST")).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(json_body(response).await["error"].is_string());
}

#[tokio::test]
async fn equipment_sync_returns_counts_and_persists() {
    let server = MockServer::start().await;
    let (app, state) = app_against(&server).await;
    Mock::given(method("GET"))
        .and(path("/sap/opu/odata/sap/API_EQUIPMENT/Equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": {"results": [remote_equipment("EQP-1"), remote_equipment("EQP-2")]}
        })))
        .mount(&server)
        .await;

    let response = app.oneshot(post("/api/sap/sync/equipment")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let report: SyncReport = serde_json::from_value(json_body(response).await).expect("report");
    assert_eq!(report, SyncReport { added: 2, updated: 0, errors: 0 });
    assert_eq!(state.store.list_equipment().await.expect("list").len(), 2);
}

#[tokio::test]
async fn failed_reconciliation_is_a_bad_gateway() {
    let server = MockServer::start().await;
    let (app, _) = app_against(&server).await;
    Mock::given(method("GET"))
        .and(path("/sap/opu/odata/sap/API_MAINTENANCEORDER/MaintenanceOrder"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = app.oneshot(post("/api/sap/sync/work-orders")).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn sync_all_reports_partial_failure_with_200() {
    let server = MockServer::start().await;
    let (app, _) = app_against(&server).await;
    Mock::given(method("GET"))
        .and(path("/sap/opu/odata/sap/API_EQUIPMENT/Equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"d": {"results": []}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sap/opu/odata/sap/API_MAINTENANCEORDER/MaintenanceOrder"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let response = app.oneshot(post("/api/sap/sync/all")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let report: FullSyncReport =
        serde_json::from_value(json_body(response).await).expect("report");
    assert!(!report.success);
    assert_eq!(report.equipment, Some(SyncReport::default()));
    assert_eq!(report.work_orders, None);
    assert!(report.error.is_some());
}

#[tokio::test]
async fn pushing_unknown_local_id_is_404() {
    let server = MockServer::start().await;
    let (app, _) = app_against(&server).await;

    let response = app.oneshot(post("/api/sap/equipment/999")).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn equipment_work_orders_are_scoped_and_resolved() {
    let server = MockServer::start().await;
    let (app, state) = app_against(&server).await;

    let local = plantops_domain::NewEquipment {
        code: "EQP-1042".to_string(),
        name: "Hydraulic Press 4".to_string(),
        category: plantops_domain::EquipmentCategory::Hydraulic,
        location: "PLANT-A/LINE-2".to_string(),
        status: plantops_domain::EquipmentStatus::Active,
        manufacturer: None,
        model: None,
        install_date: None,
        specifications: Default::default(),
        notes: None,
        next_maintenance_date: None,
        last_maintenance_date: None,
        last_maintenance_status: None,
        last_synced_at: None,
        sync_status: None,
    };
    let equipment = state.store.create_equipment(&local).await.expect("seed");

    Mock::given(method("GET"))
        .and(path("/sap/opu/odata/sap/API_MAINTENANCEORDER/MaintenanceOrder"))
        .and(wiremock::matchers::query_param(
            "$filter",
            "MaintObjectType eq 'EQUI' and Equipment eq 'EQP-1042'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "d": {"results": [{
                "MaintenanceOrder": "4000123",
                "MaintenanceOrderDesc": "Replace worn seals",
                "MaintObjectType": "EQUI",
                "Equipment": "EQP-1042",
                "MaintenancePriority": "1",
                "OrderType": "PM02",
                "StatusInternalID": "I0002",
                "ShortText": "Seal replacement",
                "LongText": "Replace hydraulic seals on press 4",
            }]}
        })))
        .mount(&server)
        .await;

    let response =
        app.oneshot(get("/api/sap/equipment/EQP-1042/work-orders")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body[0]["code"], "4000123");
    assert_eq!(body[0]["priority"], "urgent");
    assert_eq!(body[0]["status"], "in_progress");
    // The listed order carries the resolved local equipment id.
    assert_eq!(body[0]["equipment_id"], json!(equipment.id));
    // Listing is a preview, not an ingest.
    assert!(state.store.list_work_orders().await.expect("list").is_empty());
}
