//! Configuration loader
//!
//! Loads the ERP connection settings from environment variables.
//!
//! ## Environment Variables
//! - `PLANTOPS_ERP_URL`: base URL of the ERP host (required)
//! - `PLANTOPS_ERP_CLIENT_ID`: OAuth client id (required)
//! - `PLANTOPS_ERP_USERNAME`: service account user (required)
//! - `PLANTOPS_ERP_PASSWORD`: service account password (required)
//! - `PLANTOPS_ERP_GATEWAY`: OData gateway prefix (default `/sap/opu/odata/sap`)
//! - `PLANTOPS_ERP_TIMEOUT_SECS`: per-request timeout (default 30)

use std::time::Duration;

use plantops_domain::{ErpConfig, PlantOpsError, Result};

/// Load the ERP configuration from environment variables.
///
/// # Errors
/// Returns `PlantOpsError::Config` if a required variable is missing or a
/// numeric variable fails to parse.
pub fn load_erp_config() -> Result<ErpConfig> {
    let defaults = ErpConfig::default();

    let base_url = env_var("PLANTOPS_ERP_URL")?;
    let client_id = env_var("PLANTOPS_ERP_CLIENT_ID")?;
    let username = env_var("PLANTOPS_ERP_USERNAME")?;
    let password = env_var("PLANTOPS_ERP_PASSWORD")?;

    let gateway_prefix =
        std::env::var("PLANTOPS_ERP_GATEWAY").unwrap_or(defaults.gateway_prefix);
    let timeout = match std::env::var("PLANTOPS_ERP_TIMEOUT_SECS") {
        Ok(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|e| {
            PlantOpsError::Config(format!("Invalid PLANTOPS_ERP_TIMEOUT_SECS: {e}"))
        })?),
        Err(_) => defaults.timeout,
    };

    let config = ErpConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        gateway_prefix,
        client_id,
        username,
        password,
        timeout,
    };
    tracing::info!(base_url = %config.base_url, "ERP configuration loaded from environment");
    Ok(config)
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| PlantOpsError::Config(format!("Missing environment variable: {name}")))
}
