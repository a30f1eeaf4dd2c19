//! In-memory store
//!
//! Implements every repository port over process-local tables. Ids are
//! assigned sequentially per table and external codes are write-once: the
//! equipment code is fixed at creation and a work order's order number can
//! be set exactly once, when the ERP first acknowledges the order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use plantops_core::{
    EquipmentRepository, MaintenanceLogRepository, StaffRepository, WorkOrderRepository,
};
use plantops_domain::{
    Equipment, MaintenanceRecord, NewEquipment, NewMaintenanceRecord, NewStaff, NewWorkOrder,
    PlantOpsError, Result, Staff, WorkOrder,
};
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    equipment: BTreeMap<i64, Equipment>,
    work_orders: BTreeMap<i64, WorkOrder>,
    staff: BTreeMap<i64, Staff>,
    maintenance: BTreeMap<i64, MaintenanceRecord>,
    next_equipment_id: i64,
    next_work_order_id: i64,
    next_staff_id: i64,
    next_maintenance_id: i64,
}

/// Process-local implementation of all repository ports.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EquipmentRepository for MemoryStore {
    async fn list_equipment(&self) -> Result<Vec<Equipment>> {
        Ok(self.tables.read().await.equipment.values().cloned().collect())
    }

    async fn get_equipment(&self, id: i64) -> Result<Option<Equipment>> {
        Ok(self.tables.read().await.equipment.get(&id).cloned())
    }

    async fn get_equipment_by_code(&self, code: &str) -> Result<Option<Equipment>> {
        Ok(self.tables.read().await.equipment.values().find(|equipment| equipment.code == code).cloned())
    }

    async fn create_equipment(&self, new: &NewEquipment) -> Result<Equipment> {
        if new.code.trim().is_empty() {
            return Err(PlantOpsError::InvalidInput("equipment code must not be empty".to_string()));
        }

        let mut tables = self.tables.write().await;
        if tables.equipment.values().any(|equipment| equipment.code == new.code) {
            return Err(PlantOpsError::InvalidInput(format!(
                "equipment code already exists: {}",
                new.code
            )));
        }

        tables.next_equipment_id += 1;
        let id = tables.next_equipment_id;
        let record = Equipment {
            id,
            code: new.code.clone(),
            name: new.name.clone(),
            category: new.category,
            location: new.location.clone(),
            status: new.status,
            manufacturer: new.manufacturer.clone(),
            model: new.model.clone(),
            install_date: new.install_date.clone(),
            specifications: new.specifications.clone(),
            notes: new.notes.clone(),
            next_maintenance_date: new.next_maintenance_date.clone(),
            last_maintenance_date: new.last_maintenance_date.clone(),
            last_maintenance_status: new.last_maintenance_status.clone(),
            last_synced_at: new.last_synced_at,
            sync_status: new.sync_status.clone(),
        };
        tables.equipment.insert(id, record.clone());
        Ok(record)
    }

    async fn update_equipment(&self, id: i64, new: &NewEquipment) -> Result<Equipment> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .equipment
            .get(&id)
            .ok_or_else(|| PlantOpsError::NotFound(format!("equipment {id}")))?;

        // The external code is the sync join key and never changes.
        if existing.code != new.code {
            return Err(PlantOpsError::InvalidInput(format!(
                "equipment code cannot be reassigned from {} to {}",
                existing.code, new.code
            )));
        }

        let record = Equipment {
            id,
            code: existing.code.clone(),
            name: new.name.clone(),
            category: new.category,
            location: new.location.clone(),
            status: new.status,
            manufacturer: new.manufacturer.clone(),
            model: new.model.clone(),
            install_date: new.install_date.clone(),
            specifications: new.specifications.clone(),
            notes: new.notes.clone(),
            next_maintenance_date: new.next_maintenance_date.clone(),
            last_maintenance_date: new.last_maintenance_date.clone(),
            last_maintenance_status: new.last_maintenance_status.clone(),
            last_synced_at: new.last_synced_at,
            sync_status: new.sync_status.clone(),
        };
        tables.equipment.insert(id, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl WorkOrderRepository for MemoryStore {
    async fn list_work_orders(&self) -> Result<Vec<WorkOrder>> {
        Ok(self.tables.read().await.work_orders.values().cloned().collect())
    }

    async fn get_work_order(&self, id: i64) -> Result<Option<WorkOrder>> {
        Ok(self.tables.read().await.work_orders.get(&id).cloned())
    }

    async fn get_work_order_by_code(&self, code: &str) -> Result<Option<WorkOrder>> {
        Ok(self
            .tables
            .read()
            .await
            .work_orders
            .values()
            .find(|order| order.code.as_deref() == Some(code))
            .cloned())
    }

    async fn list_work_orders_for_equipment(&self, equipment_id: i64) -> Result<Vec<WorkOrder>> {
        Ok(self
            .tables
            .read()
            .await
            .work_orders
            .values()
            .filter(|order| order.equipment_id == Some(equipment_id))
            .cloned()
            .collect())
    }

    async fn create_work_order(&self, new: &NewWorkOrder) -> Result<WorkOrder> {
        let mut tables = self.tables.write().await;
        if let Some(code) = &new.code {
            if tables.work_orders.values().any(|order| order.code.as_deref() == Some(code)) {
                return Err(PlantOpsError::InvalidInput(format!(
                    "work order code already exists: {code}"
                )));
            }
        }

        tables.next_work_order_id += 1;
        let id = tables.next_work_order_id;
        let record = work_order_record(id, new, new.code.clone());
        tables.work_orders.insert(id, record.clone());
        Ok(record)
    }

    async fn update_work_order(&self, id: i64, new: &NewWorkOrder) -> Result<WorkOrder> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .work_orders
            .get(&id)
            .ok_or_else(|| PlantOpsError::NotFound(format!("work order {id}")))?;

        // The order number is set once, when the ERP first assigns it.
        let code = match (&existing.code, &new.code) {
            (Some(current), Some(incoming)) if current != incoming => {
                return Err(PlantOpsError::InvalidInput(format!(
                    "work order code cannot be reassigned from {current} to {incoming}"
                )));
            }
            (Some(current), _) => Some(current.clone()),
            (None, incoming) => incoming.clone(),
        };

        let record = work_order_record(id, new, code);
        tables.work_orders.insert(id, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl StaffRepository for MemoryStore {
    async fn list_staff(&self) -> Result<Vec<Staff>> {
        Ok(self.tables.read().await.staff.values().cloned().collect())
    }

    async fn get_staff(&self, id: i64) -> Result<Option<Staff>> {
        Ok(self.tables.read().await.staff.get(&id).cloned())
    }

    async fn create_staff(&self, new: &NewStaff) -> Result<Staff> {
        let mut tables = self.tables.write().await;
        tables.next_staff_id += 1;
        let id = tables.next_staff_id;
        let record = Staff {
            id,
            name: new.name.clone(),
            position: new.position.clone(),
            specialization: new.specialization.clone(),
            contact_info: new.contact_info.clone(),
            active: new.active,
        };
        tables.staff.insert(id, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl MaintenanceLogRepository for MemoryStore {
    async fn list_maintenance_records(&self) -> Result<Vec<MaintenanceRecord>> {
        Ok(self.tables.read().await.maintenance.values().cloned().collect())
    }

    async fn list_maintenance_for_equipment(
        &self,
        equipment_id: i64,
    ) -> Result<Vec<MaintenanceRecord>> {
        Ok(self
            .tables
            .read()
            .await
            .maintenance
            .values()
            .filter(|record| record.equipment_id == equipment_id)
            .cloned()
            .collect())
    }

    async fn create_maintenance_record(
        &self,
        new: &NewMaintenanceRecord,
    ) -> Result<MaintenanceRecord> {
        let mut tables = self.tables.write().await;
        if !tables.equipment.contains_key(&new.equipment_id) {
            return Err(PlantOpsError::InvalidInput(format!(
                "maintenance record references unknown equipment {}",
                new.equipment_id
            )));
        }

        tables.next_maintenance_id += 1;
        let id = tables.next_maintenance_id;
        let record = MaintenanceRecord {
            id,
            equipment_id: new.equipment_id,
            work_order_id: new.work_order_id,
            performed_by: new.performed_by,
            date: new.date.clone(),
            description: new.description.clone(),
            outcome: new.outcome.clone(),
        };
        tables.maintenance.insert(id, record.clone());
        Ok(record)
    }
}

fn work_order_record(id: i64, new: &NewWorkOrder, code: Option<String>) -> WorkOrder {
    WorkOrder {
        id,
        code,
        title: new.title.clone(),
        description: new.description.clone(),
        equipment_id: new.equipment_id,
        priority: new.priority,
        status: new.status,
        order_type: new.order_type.clone(),
        assigned_to: new.assigned_to,
        created_date: new.created_date.clone(),
        due_date: new.due_date.clone(),
        completion_date: new.completion_date.clone(),
        estimated_hours: new.estimated_hours,
        actual_hours: new.actual_hours,
        location: new.location.clone(),
        parts: new.parts.clone(),
        notes: new.notes.clone(),
        last_synced_at: new.last_synced_at,
        sync_status: new.sync_status.clone(),
    }
}

#[cfg(test)]
mod tests {
    use plantops_domain::{EquipmentCategory, EquipmentStatus, WorkOrderPriority, WorkOrderStatus};

    use super::*;

    fn equipment_payload(code: &str) -> NewEquipment {
        NewEquipment {
            code: code.to_string(),
            name: "Conveyor 2".to_string(),
            category: EquipmentCategory::MaterialHandling,
            location: "PLANT-B".to_string(),
            status: EquipmentStatus::Active,
            manufacturer: None,
            model: None,
            install_date: None,
            specifications: BTreeMap::new(),
            notes: None,
            next_maintenance_date: None,
            last_maintenance_date: None,
            last_maintenance_status: None,
            last_synced_at: None,
            sync_status: None,
        }
    }

    fn order_payload(code: Option<&str>) -> NewWorkOrder {
        NewWorkOrder {
            code: code.map(str::to_string),
            title: "Belt inspection".to_string(),
            description: "Check tension and wear".to_string(),
            equipment_id: None,
            priority: WorkOrderPriority::Medium,
            status: WorkOrderStatus::Open,
            order_type: "planned".to_string(),
            assigned_to: None,
            created_date: None,
            due_date: None,
            completion_date: None,
            estimated_hours: None,
            actual_hours: None,
            location: None,
            parts: Vec::new(),
            notes: None,
            last_synced_at: None,
            sync_status: None,
        }
    }

    #[tokio::test]
    async fn equipment_ids_are_sequential_and_codes_unique() {
        let store = MemoryStore::new();
        let first = store.create_equipment(&equipment_payload("EQP-1")).await.expect("first");
        let second = store.create_equipment(&equipment_payload("EQP-2")).await.expect("second");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let duplicate = store.create_equipment(&equipment_payload("EQP-1")).await;
        assert!(matches!(duplicate, Err(PlantOpsError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn equipment_code_cannot_be_reassigned() {
        let store = MemoryStore::new();
        let created = store.create_equipment(&equipment_payload("EQP-1")).await.expect("create");

        let mut renamed = equipment_payload("EQP-99");
        renamed.name = "Conveyor 2 (renamed)".to_string();
        let result = store.update_equipment(created.id, &renamed).await;
        assert!(matches!(result, Err(PlantOpsError::InvalidInput(_))));

        let updated = store
            .update_equipment(created.id, &equipment_payload("EQP-1"))
            .await
            .expect("same-code update");
        assert_eq!(updated.code, "EQP-1");
    }

    #[tokio::test]
    async fn work_order_code_is_set_once() {
        let store = MemoryStore::new();
        let created = store.create_work_order(&order_payload(None)).await.expect("create");
        assert_eq!(created.code, None);

        // First assignment sticks.
        let updated = store
            .update_work_order(created.id, &order_payload(Some("4000123")))
            .await
            .expect("assign code");
        assert_eq!(updated.code.as_deref(), Some("4000123"));

        // Updates without a code keep the assigned one.
        let kept = store.update_work_order(created.id, &order_payload(None)).await.expect("keep");
        assert_eq!(kept.code.as_deref(), Some("4000123"));

        // Reassignment is rejected.
        let rejected = store.update_work_order(created.id, &order_payload(Some("4000999"))).await;
        assert!(matches!(rejected, Err(PlantOpsError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn lookups_by_code_and_equipment_scope() {
        let store = MemoryStore::new();
        let equipment = store.create_equipment(&equipment_payload("EQP-1")).await.expect("eq");

        let mut scoped = order_payload(Some("4000123"));
        scoped.equipment_id = Some(equipment.id);
        store.create_work_order(&scoped).await.expect("scoped");
        store.create_work_order(&order_payload(None)).await.expect("unscoped");

        let found = store.get_work_order_by_code("4000123").await.expect("query");
        assert!(found.is_some());
        assert!(store.get_work_order_by_code("missing").await.expect("query").is_none());

        let for_equipment =
            store.list_work_orders_for_equipment(equipment.id).await.expect("scope");
        assert_eq!(for_equipment.len(), 1);
    }

    #[tokio::test]
    async fn maintenance_records_require_existing_equipment() {
        let store = MemoryStore::new();
        let orphan = NewMaintenanceRecord {
            equipment_id: 42,
            work_order_id: None,
            performed_by: 1,
            date: "2024-02-01".to_string(),
            description: "Oil change".to_string(),
            outcome: Some("ok".to_string()),
        };
        let result = store.create_maintenance_record(&orphan).await;
        assert!(matches!(result, Err(PlantOpsError::InvalidInput(_))));

        let equipment = store.create_equipment(&equipment_payload("EQP-1")).await.expect("eq");
        let valid = NewMaintenanceRecord { equipment_id: equipment.id, ..orphan };
        let record = store.create_maintenance_record(&valid).await.expect("record");
        assert_eq!(record.id, 1);

        let history =
            store.list_maintenance_for_equipment(equipment.id).await.expect("history");
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn missing_update_target_is_not_found() {
        let store = MemoryStore::new();
        let result = store.update_equipment(7, &equipment_payload("EQP-7")).await;
        assert!(matches!(result, Err(PlantOpsError::NotFound(_))));
    }
}
