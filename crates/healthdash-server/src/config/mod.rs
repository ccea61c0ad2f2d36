//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use healthdash_core::error::{HealthDashError, Result};

pub use schema::{DashboardSection, SamplerSection, ServerSection, ServiceConfig};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "HEALTHDASH_CONFIG";
/// Config file used when `HEALTHDASH_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "healthdash.yaml";

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HealthDashError::BadConfig(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| HealthDashError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config for the binary.
///
/// An explicit `HEALTHDASH_CONFIG` must exist. The default path is optional;
/// built-in defaults apply when it is absent.
pub fn load_from_env() -> Result<ServiceConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) => match fs::metadata(DEFAULT_CONFIG_PATH) {
            Ok(_) => load_from_file(DEFAULT_CONFIG_PATH),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = DEFAULT_CONFIG_PATH, "config file absent, using defaults");
                Ok(ServiceConfig::default())
            }
            Err(e) => Err(HealthDashError::BadConfig(format!(
                "stat config failed ({DEFAULT_CONFIG_PATH}): {e}"
            ))),
        },
    }
}
