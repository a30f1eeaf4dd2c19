//! Equipment field mapping
//!
//! Translation between the local equipment record and the ERP's equipment
//! master shape: single-letter category codes, status codes, packed dates
//! and the one-way specifications enrichment.

use std::collections::BTreeMap;

use plantops_domain::{Equipment, EquipmentCategory, EquipmentStatus, NewEquipment, RemoteEquipment};

use super::dates::{iso_to_packed, packed_to_iso};

/// Specifications key for the ERP serial number.
pub const SPEC_SERIAL_NUMBER: &str = "serial_number";
/// Specifications key for the ERP technical identifier.
pub const SPEC_TECHNICAL_ID: &str = "technical_id";
/// Specifications key for the ERP maintenance plant.
pub const SPEC_MAINTENANCE_PLANT: &str = "maintenance_plant";

/// Remote category code sent for locally-uncategorized equipment.
const REMOTE_CATEGORY_OTHER: &str = "O";
/// Remote status code sent for a locally-unknown status.
const REMOTE_STATUS_UNKNOWN: &str = "UNKN";

/// Map an ERP category code to the local enumeration. Unknown codes become
/// [`EquipmentCategory::Other`].
pub fn category_from_remote(code: &str) -> EquipmentCategory {
    match code {
        "M" => EquipmentCategory::Mechanical,
        "E" => EquipmentCategory::Electrical,
        "H" => EquipmentCategory::Hydraulic,
        "P" => EquipmentCategory::MaterialHandling,
        "A" => EquipmentCategory::Automated,
        "T" => EquipmentCategory::Heating,
        "S" => EquipmentCategory::StorageTank,
        _ => EquipmentCategory::Other,
    }
}

/// Map a local category to its ERP code. Total over the enumeration.
pub fn category_to_remote(category: EquipmentCategory) -> &'static str {
    match category {
        EquipmentCategory::Mechanical => "M",
        EquipmentCategory::Electrical => "E",
        EquipmentCategory::Hydraulic => "H",
        EquipmentCategory::MaterialHandling => "P",
        EquipmentCategory::Automated => "A",
        EquipmentCategory::Heating => "T",
        EquipmentCategory::StorageTank => "S",
        EquipmentCategory::Other => REMOTE_CATEGORY_OTHER,
    }
}

/// Map an ERP status code to the local enumeration. Unknown codes become
/// [`EquipmentStatus::Unknown`].
pub fn status_from_remote(code: &str) -> EquipmentStatus {
    match code {
        "ACTV" => EquipmentStatus::Active,
        "INAC" => EquipmentStatus::Inactive,
        "INST" => EquipmentStatus::Installing,
        "MREQ" => EquipmentStatus::InspectionDue,
        "MACT" => EquipmentStatus::UnderMaintenance,
        "DISC" => EquipmentStatus::Decommissioned,
        _ => EquipmentStatus::Unknown,
    }
}

/// Map a local status to its ERP code. Total over the enumeration.
pub fn status_to_remote(status: EquipmentStatus) -> &'static str {
    match status {
        EquipmentStatus::Active => "ACTV",
        EquipmentStatus::Inactive => "INAC",
        EquipmentStatus::Installing => "INST",
        EquipmentStatus::InspectionDue => "MREQ",
        EquipmentStatus::UnderMaintenance => "MACT",
        EquipmentStatus::Decommissioned => "DISC",
        EquipmentStatus::Unknown => REMOTE_STATUS_UNKNOWN,
    }
}

/// Build a local equipment payload from the ERP shape.
///
/// Serial number, technical identifier and maintenance plant are copied
/// verbatim into the specifications map. This enrichment is one-way: the
/// reverse mapping does not reconstruct them.
pub fn equipment_from_remote(remote: &RemoteEquipment) -> NewEquipment {
    let mut specifications = BTreeMap::new();
    specifications.insert(SPEC_SERIAL_NUMBER.to_string(), remote.serial_number.clone());
    specifications.insert(SPEC_TECHNICAL_ID.to_string(), remote.technical_identification.clone());
    specifications.insert(SPEC_MAINTENANCE_PLANT.to_string(), remote.maintenance_plant.clone());

    NewEquipment {
        code: remote.equipment.clone(),
        name: remote.equipment_name.clone(),
        category: category_from_remote(&remote.equipment_category),
        location: remote.functional_location.clone(),
        status: status_from_remote(&remote.equipment_status),
        manufacturer: non_empty(&remote.manufacturer),
        model: non_empty(&remote.manufacturer_part_number),
        install_date: remote.acquisition_date.as_deref().and_then(packed_to_iso),
        specifications,
        notes: non_empty(&remote.technical_information),
        // Derived from maintenance rules locally, never taken from the ERP.
        next_maintenance_date: None,
        last_maintenance_date: remote.last_maintenance_date.as_deref().and_then(packed_to_iso),
        last_maintenance_status: non_empty(&remote.tech_obj_status_desc),
        last_synced_at: None,
        sync_status: None,
    }
}

/// Build the ERP shape from a local equipment record.
pub fn equipment_to_remote(local: &Equipment) -> RemoteEquipment {
    RemoteEquipment {
        equipment: local.code.clone(),
        equipment_name: local.name.clone(),
        equipment_category: category_to_remote(local.category).to_string(),
        functional_location: local.location.clone(),
        equipment_status: status_to_remote(local.status).to_string(),
        manufacturer: local.manufacturer.clone().unwrap_or_default(),
        manufacturer_part_number: local.model.clone().unwrap_or_default(),
        acquisition_date: local.install_date.as_deref().and_then(iso_to_packed),
        technical_information: local.notes.clone().unwrap_or_default(),
        tech_obj_status_desc: local.last_maintenance_status.clone().unwrap_or_default(),
        last_maintenance_date: local.last_maintenance_date.as_deref().and_then(iso_to_packed),
        ..RemoteEquipment::default()
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
