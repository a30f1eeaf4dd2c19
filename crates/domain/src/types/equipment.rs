//! Equipment asset records and their fixed enumerations

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Equipment category, the local side of the ERP single-letter category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Mechanical,
    Electrical,
    Hydraulic,
    MaterialHandling,
    Automated,
    Heating,
    StorageTank,
    Other,
}

impl EquipmentCategory {
    /// Every category value, for exhaustive mapping checks.
    pub const ALL: [Self; 8] = [
        Self::Mechanical,
        Self::Electrical,
        Self::Hydraulic,
        Self::MaterialHandling,
        Self::Automated,
        Self::Heating,
        Self::StorageTank,
        Self::Other,
    ];
}

/// Operational status of an equipment asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Active,
    Inactive,
    Installing,
    InspectionDue,
    UnderMaintenance,
    Decommissioned,
    Unknown,
}

impl EquipmentStatus {
    /// Every status value, for exhaustive mapping checks.
    pub const ALL: [Self; 7] = [
        Self::Active,
        Self::Inactive,
        Self::Installing,
        Self::InspectionDue,
        Self::UnderMaintenance,
        Self::Decommissioned,
        Self::Unknown,
    ];
}

/// Equipment asset as stored locally.
///
/// `code` is the external code shared with the ERP (e.g. `EQP-1042`). It is
/// unique across all equipment records and is the join key for sync; it must
/// never be reassigned once set. Internal `id` values never cross the ERP
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub location: String,
    pub status: EquipmentStatus,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    /// ISO `YYYY-MM-DD`
    pub install_date: Option<String>,
    /// Open technical specifications (serial number, plant, ...)
    pub specifications: BTreeMap<String, String>,
    pub notes: Option<String>,
    pub next_maintenance_date: Option<String>,
    pub last_maintenance_date: Option<String>,
    pub last_maintenance_status: Option<String>,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub sync_status: Option<String>,
}

/// Equipment payload without a store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEquipment {
    pub code: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub location: String,
    pub status: EquipmentStatus,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub install_date: Option<String>,
    pub specifications: BTreeMap<String, String>,
    pub notes: Option<String>,
    pub next_maintenance_date: Option<String>,
    pub last_maintenance_date: Option<String>,
    pub last_maintenance_status: Option<String>,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub sync_status: Option<String>,
}
