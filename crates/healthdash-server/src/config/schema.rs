use std::net::SocketAddr;

use serde::Deserialize;

use healthdash_core::error::{HealthDashError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub dashboard: DashboardSection,

    #[serde(default)]
    pub sampler: SamplerSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            dashboard: DashboardSection::default(),
            sampler: SamplerSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HealthDashError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.dashboard.validate()?;
        self.sampler.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            HealthDashError::BadConfig(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardSection {
    #[serde(default = "default_template_path")]
    pub template_path: String,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
        }
    }
}

impl DashboardSection {
    pub fn validate(&self) -> Result<()> {
        if self.template_path.trim().is_empty() {
            return Err(HealthDashError::BadConfig(
                "dashboard.template_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerSection {
    #[serde(default = "default_cpu_interval_ms")]
    pub cpu_interval_ms: u64,
}

impl Default for SamplerSection {
    fn default() -> Self {
        Self {
            cpu_interval_ms: default_cpu_interval_ms(),
        }
    }
}

impl SamplerSection {
    pub fn validate(&self) -> Result<()> {
        if !(10..=5000).contains(&self.cpu_interval_ms) {
            return Err(HealthDashError::BadConfig(
                "sampler.cpu_interval_ms must be between 10 and 5000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_template_path() -> String {
    "templates/index.html".into()
}
fn default_cpu_interval_ms() -> u64 {
    100
}
