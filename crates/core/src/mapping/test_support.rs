//! Shared fixtures for mapper tests

use std::collections::BTreeMap;

use plantops_domain::{
    Equipment, EquipmentCategory, EquipmentStatus, WorkOrder, WorkOrderPriority, WorkOrderStatus,
};

pub(crate) fn equipment_fixture() -> Equipment {
    Equipment {
        id: 7,
        code: "EQP-1042".to_string(),
        name: "Hydraulic Press 4".to_string(),
        category: EquipmentCategory::Hydraulic,
        location: "PLANT-A/LINE-2".to_string(),
        status: EquipmentStatus::Active,
        manufacturer: Some("Acme".to_string()),
        model: Some("HP-400".to_string()),
        install_date: Some("2023-06-15".to_string()),
        specifications: BTreeMap::new(),
        notes: Some("quarterly seal check".to_string()),
        next_maintenance_date: None,
        last_maintenance_date: None,
        last_maintenance_status: None,
        last_synced_at: None,
        sync_status: None,
    }
}

pub(crate) fn work_order_fixture() -> WorkOrder {
    WorkOrder {
        id: 12,
        code: Some("4000123".to_string()),
        title: "Replace worn seals".to_string(),
        description: "Replace hydraulic seals on press 4".to_string(),
        equipment_id: Some(7),
        priority: WorkOrderPriority::High,
        status: WorkOrderStatus::Open,
        order_type: "preventive".to_string(),
        assigned_to: Some(3),
        created_date: Some("2024-01-05".to_string()),
        due_date: Some("2024-01-20".to_string()),
        completion_date: None,
        estimated_hours: Some(6),
        actual_hours: None,
        location: Some("PLANT-A/LINE-2".to_string()),
        parts: Vec::new(),
        notes: None,
        last_synced_at: None,
        sync_status: None,
    }
}
