//! Maintenance staff records

use serde::{Deserialize, Serialize};

/// Maintenance staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub specialization: Option<String>,
    pub contact_info: Option<String>,
    pub active: bool,
}

/// Staff payload without a store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStaff {
    pub name: String,
    pub position: String,
    pub specialization: Option<String>,
    pub contact_info: Option<String>,
    pub active: bool,
}
