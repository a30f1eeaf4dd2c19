//! Configuration structures
//!
//! Loading from the environment lives in `plantops-infra`; this module only
//! defines the shapes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection settings for the ERP gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErpConfig {
    /// Base URL of the ERP host (e.g. `https://erp.example.com`).
    pub base_url: String,
    /// OData gateway path prefix, appended to the base URL for entity calls.
    pub gateway_prefix: String,
    pub client_id: String,
    pub username: String,
    pub password: String,
    /// Per-request network timeout.
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

impl Default for ErpConfig {
    fn default() -> Self {
        Self {
            base_url: "https://erp.example.com".to_string(),
            gateway_prefix: "/sap/opu/odata/sap".to_string(),
            client_id: String::new(),
            username: String::new(),
            password: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}
