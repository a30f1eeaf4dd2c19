//! Work order field mapping
//!
//! Translation between the local work order record and the ERP maintenance
//! order shape. Resolving the remote equipment code to a local id (and the
//! responsible person to a staff id) is a repository concern; the sync
//! engine resolves first and passes the results in, keeping these functions
//! pure.

use plantops_domain::{NewWorkOrder, RemoteWorkOrder, WorkOrder, WorkOrderPriority, WorkOrderStatus};

use super::dates::{iso_to_packed, packed_to_iso};
use super::equipment::non_empty;

/// Local order-type values with a distinct ERP code.
pub const KNOWN_ORDER_TYPES: [&str; 5] =
    ["planned", "preventive", "repair", "improvement", "calibration"];

/// Local order type used for ERP codes outside the known set.
pub const ORDER_TYPE_OTHER: &str = "other";

/// Remote status code sent for local statuses without an ERP counterpart
/// (`Cancelled`, `Unknown`).
const REMOTE_STATUS_DEFAULT: &str = "I0001";
/// Remote order-type code sent for unrecognized local order types.
const REMOTE_ORDER_TYPE_DEFAULT: &str = "PM03";
/// Remote priority code sent for unrecognized input (medium).
const REMOTE_PRIORITY_DEFAULT: &str = "3";

/// Map an ERP priority digit to the local enumeration. `1` is the most
/// urgent; anything outside `1..=4` degrades to `Medium`.
pub fn priority_from_remote(code: &str) -> WorkOrderPriority {
    match code {
        "1" => WorkOrderPriority::Urgent,
        "2" => WorkOrderPriority::High,
        "3" => WorkOrderPriority::Medium,
        "4" => WorkOrderPriority::Low,
        _ => WorkOrderPriority::Medium,
    }
}

/// Map a local priority to its ERP digit. Total over the enumeration.
pub fn priority_to_remote(priority: WorkOrderPriority) -> &'static str {
    match priority {
        WorkOrderPriority::Urgent => "1",
        WorkOrderPriority::High => "2",
        WorkOrderPriority::Medium => REMOTE_PRIORITY_DEFAULT,
        WorkOrderPriority::Low => "4",
    }
}

/// Map an ERP internal status code to the local enumeration.
pub fn status_from_remote(code: &str) -> WorkOrderStatus {
    match code {
        "I0001" => WorkOrderStatus::Open,
        "I0002" => WorkOrderStatus::InProgress,
        "I0068" => WorkOrderStatus::AwaitingParts,
        "I0009" => WorkOrderStatus::Completed,
        "I0045" => WorkOrderStatus::Closed,
        _ => WorkOrderStatus::Unknown,
    }
}

/// Map a local status to its ERP internal code. `Cancelled` and `Unknown`
/// have no ERP counterpart and serialize to the default open status.
pub fn status_to_remote(status: WorkOrderStatus) -> &'static str {
    match status {
        WorkOrderStatus::Open => "I0001",
        WorkOrderStatus::InProgress => "I0002",
        WorkOrderStatus::AwaitingParts => "I0068",
        WorkOrderStatus::Completed => "I0009",
        WorkOrderStatus::Closed => "I0045",
        WorkOrderStatus::Cancelled | WorkOrderStatus::Unknown => REMOTE_STATUS_DEFAULT,
    }
}

/// Map an ERP order-type code to the local free-text value.
pub fn order_type_from_remote(code: &str) -> String {
    match code {
        "PM01" => "planned",
        "PM02" => "preventive",
        "PM03" => "repair",
        "PM04" => "improvement",
        "PM05" => "calibration",
        _ => ORDER_TYPE_OTHER,
    }
    .to_string()
}

/// Map the local free-text order type to an ERP code, defaulting to the
/// corrective-maintenance code for anything unrecognized.
pub fn order_type_to_remote(order_type: &str) -> &'static str {
    match order_type {
        "planned" => "PM01",
        "preventive" => "PM02",
        "repair" => "PM03",
        "improvement" => "PM04",
        "calibration" => "PM05",
        _ => REMOTE_ORDER_TYPE_DEFAULT,
    }
}

/// Build a local work order payload from the ERP shape.
///
/// `equipment_id` and `assigned_to` are resolved by the caller against the
/// local store; `None` for either is a valid mapping result, not an error.
/// An order whose equipment code has no local match stays orphaned until
/// the equipment is synced.
pub fn work_order_from_remote(
    remote: &RemoteWorkOrder,
    equipment_id: Option<i64>,
    assigned_to: Option<i64>,
) -> NewWorkOrder {
    let description = if remote.long_text.is_empty() {
        remote.short_text.clone()
    } else {
        remote.long_text.clone()
    };

    NewWorkOrder {
        code: non_empty(&remote.maintenance_order),
        title: remote.maintenance_order_desc.clone(),
        description,
        equipment_id,
        priority: priority_from_remote(&remote.maintenance_priority),
        status: status_from_remote(&remote.status_internal_id),
        order_type: order_type_from_remote(&remote.order_type),
        assigned_to,
        created_date: remote.creation_date.as_deref().and_then(packed_to_iso),
        due_date: remote.scheduled_end_date.as_deref().and_then(packed_to_iso),
        completion_date: remote.actual_end_date.as_deref().and_then(packed_to_iso),
        // Hour figures come from order operations, which are not synced.
        estimated_hours: None,
        actual_hours: None,
        location: non_empty(&remote.functional_location),
        parts: Vec::new(),
        notes: None,
        last_synced_at: None,
        sync_status: None,
    }
}

/// Build the ERP shape from a local work order.
///
/// `equipment_code` is the external code of the order's equipment, resolved
/// by the caller; an unresolvable equipment id sends an empty `Equipment`
/// field rather than omitting it.
pub fn work_order_to_remote(order: &WorkOrder, equipment_code: &str) -> RemoteWorkOrder {
    RemoteWorkOrder {
        maintenance_order: order.code.clone().unwrap_or_default(),
        maintenance_order_desc: order.title.clone(),
        maint_object_type: "EQUI".to_string(),
        functional_location: order.location.clone().unwrap_or_default(),
        equipment: equipment_code.to_string(),
        maintenance_priority: priority_to_remote(order.priority).to_string(),
        order_type: order_type_to_remote(&order.order_type).to_string(),
        status_internal_id: status_to_remote(order.status).to_string(),
        creation_date: order.created_date.as_deref().and_then(iso_to_packed),
        scheduled_end_date: order.due_date.as_deref().and_then(iso_to_packed),
        actual_end_date: order.completion_date.as_deref().and_then(iso_to_packed),
        person_responsible: order.assigned_to.map(|id| id.to_string()).unwrap_or_default(),
        short_text: order.title.clone(),
        long_text: order.description.clone(),
        ..RemoteWorkOrder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_fixture() -> RemoteWorkOrder {
        RemoteWorkOrder {
            maintenance_order: "4000123".to_string(),
            maintenance_order_desc: "Replace worn seals".to_string(),
            maint_object_type: "EQUI".to_string(),
            functional_location: "PLANT-A/LINE-2".to_string(),
            equipment: "EQP-1042".to_string(),
            maintenance_priority: "1".to_string(),
            order_type: "PM02".to_string(),
            status_internal_id: "I0002".to_string(),
            creation_date: Some("20240105".to_string()),
            scheduled_end_date: Some("20240120T080000".to_string()),
            actual_end_date: None,
            person_responsible: "3".to_string(),
            short_text: "Seal replacement".to_string(),
            long_text: "Replace hydraulic seals on press 4".to_string(),
            ..RemoteWorkOrder::default()
        }
    }

    #[test]
    fn priority_mapping_round_trips_for_every_local_value() {
        for priority in WorkOrderPriority::ALL {
            assert_eq!(priority_from_remote(priority_to_remote(priority)), priority);
        }
    }

    #[test]
    fn status_mapping_round_trips_for_codes_with_counterparts() {
        for status in WorkOrderStatus::ROUND_TRIPPABLE {
            assert_eq!(status_from_remote(status_to_remote(status)), status);
        }
    }

    #[test]
    fn statuses_without_counterpart_serialize_to_default_code() {
        assert_eq!(status_to_remote(WorkOrderStatus::Cancelled), "I0001");
        assert_eq!(status_to_remote(WorkOrderStatus::Unknown), "I0001");
    }

    #[test]
    fn order_type_round_trips_for_known_values() {
        for order_type in KNOWN_ORDER_TYPES {
            assert_eq!(order_type_from_remote(order_type_to_remote(order_type)), order_type);
        }
        assert_eq!(order_type_to_remote("something else"), "PM03");
        assert_eq!(order_type_from_remote("PM99"), ORDER_TYPE_OTHER);
    }

    #[test]
    fn defensive_defaults_for_unknown_remote_codes() {
        assert_eq!(priority_from_remote("9"), WorkOrderPriority::Medium);
        assert_eq!(priority_from_remote(""), WorkOrderPriority::Medium);
        assert_eq!(status_from_remote("I9999"), WorkOrderStatus::Unknown);
    }

    #[test]
    fn remote_order_maps_with_resolved_ids() {
        let mapped = work_order_from_remote(&remote_fixture(), Some(7), Some(3));

        assert_eq!(mapped.code.as_deref(), Some("4000123"));
        assert_eq!(mapped.equipment_id, Some(7));
        assert_eq!(mapped.assigned_to, Some(3));
        assert_eq!(mapped.priority, WorkOrderPriority::Urgent);
        assert_eq!(mapped.status, WorkOrderStatus::InProgress);
        assert_eq!(mapped.order_type, "preventive");
        assert_eq!(mapped.created_date.as_deref(), Some("2024-01-05"));
        assert_eq!(mapped.due_date.as_deref(), Some("2024-01-20"));
        assert_eq!(mapped.completion_date, None);
        assert_eq!(mapped.description, "Replace hydraulic seals on press 4");
    }

    #[test]
    fn orphaned_order_is_a_valid_mapping_result() {
        let mapped = work_order_from_remote(&remote_fixture(), None, None);

        assert_eq!(mapped.equipment_id, None);
        assert_eq!(mapped.assigned_to, None);
        assert_eq!(mapped.code.as_deref(), Some("4000123"));
    }

    #[test]
    fn short_text_backfills_empty_long_text() {
        let mut remote = remote_fixture();
        remote.long_text = String::new();

        let mapped = work_order_from_remote(&remote, None, None);
        assert_eq!(mapped.description, "Seal replacement");
    }

    #[test]
    fn local_order_maps_to_remote_shape() {
        let order = crate::mapping::test_support::work_order_fixture();
        let remote = work_order_to_remote(&order, "EQP-1042");

        assert_eq!(remote.maintenance_order, "4000123");
        assert_eq!(remote.equipment, "EQP-1042");
        assert_eq!(remote.maint_object_type, "EQUI");
        assert_eq!(remote.maintenance_priority, "2");
        assert_eq!(remote.status_internal_id, "I0001");
        assert_eq!(remote.order_type, "PM02");
        assert_eq!(remote.scheduled_end_date.as_deref(), Some("20240120"));
        assert_eq!(remote.person_responsible, "3");
    }

    #[test]
    fn unresolved_equipment_sends_empty_code() {
        let mut order = crate::mapping::test_support::work_order_fixture();
        order.equipment_id = None;
        order.assigned_to = None;

        let remote = work_order_to_remote(&order, "");
        assert_eq!(remote.equipment, "");
        assert_eq!(remote.person_responsible, "");
    }
}
