//! ERP wire representations
//!
//! Shapes exchanged with the ERP's OData gateway. Every field is untrusted
//! input: all of them default when absent so a partially-conformant remote
//! payload degrades instead of failing deserialization. Field names follow
//! the ERP schema verbatim.

use serde::{Deserialize, Serialize};

/// Equipment master record as the ERP sends and receives it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RemoteEquipment {
    /// External code, the sync join key (e.g. `EQP-1042`).
    pub equipment: String,
    pub equipment_name: String,
    /// Single-letter category code (`M`, `E`, `H`, `P`, `A`, `T`, `S`).
    pub equipment_category: String,
    pub functional_location: String,
    /// Status code (`ACTV`, `INAC`, `INST`, `MREQ`, `MACT`, `DISC`).
    pub equipment_status: String,
    pub manufacturer: String,
    pub manufacturer_part_number: String,
    /// Packed `YYYYMMDD[Thhmmss]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_date: Option<String>,
    pub serial_number: String,
    pub technical_identification: String,
    pub maintenance_plant: String,
    pub tech_obj_status_desc: String,
    pub technical_information: String,
    /// Packed `YYYYMMDD[Thhmmss]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<String>,
}

/// Maintenance order as the ERP sends and receives it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RemoteWorkOrder {
    /// External order number, the sync join key.
    pub maintenance_order: String,
    pub maintenance_order_desc: String,
    /// Object-type discriminator; equipment-bound orders carry `EQUI`.
    pub maint_object_type: String,
    pub functional_location: String,
    /// External code of the equipment the order is raised against.
    pub equipment: String,
    /// Single-digit priority code (`1` highest .. `4` lowest).
    pub maintenance_priority: String,
    pub order_type: String,
    #[serde(rename = "StatusInternalID")]
    pub status_internal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<String>,
    /// String form of the responsible person's identifier.
    pub person_responsible: String,
    pub short_text: String,
    pub long_text: String,
}

/// OData collection envelope (`{"d": {"results": [...]}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ODataList<T> {
    pub d: Option<ODataResults<T>>,
}

/// Inner result set of an OData collection response.
///
/// The explicit default path keeps the derived impl free of a `T: Default`
/// bound, so envelopes deserialize for any row type.
#[derive(Debug, Clone, Deserialize)]
pub struct ODataResults<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// OData single-entity envelope (`{"d": {...}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ODataSingle<T> {
    pub d: Option<T>,
}

impl<T> ODataList<T> {
    /// Flatten the envelope into its result rows; a missing `d` or missing
    /// `results` is an empty collection, not an error.
    pub fn into_results(self) -> Vec<T> {
        self.d.map(|d| d.results).unwrap_or_default()
    }
}
