//! Shared application state for the healthdash server.
//!
//! Everything handlers touch lives here and is injected through axum's
//! `State`, so tests can build an isolated state with their own sampler and
//! fresh counters.

use std::sync::Arc;
use std::time::Duration;

use healthdash_core::error::Result;
use healthdash_core::UptimeClock;

use crate::config::ServiceConfig;
use crate::dashboard::{Template, PLACEHOLDERS};
use crate::obs::RequestCounter;
use crate::sampler::{HostSampler, SysinfoSampler};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    counters: Arc<RequestCounter>,
    sampler: Arc<dyn HostSampler>,
}

struct AppStateInner {
    uptime: UptimeClock,
    template: Template,
}

impl AppState {
    /// Build application state: load the dashboard template and wire the
    /// sysinfo sampler. A missing template is returned as an error so the
    /// binary refuses to start.
    pub fn new(cfg: &ServiceConfig) -> Result<Self> {
        let path = &cfg.dashboard.template_path;
        let template = Template::load(path)?;
        for name in PLACEHOLDERS {
            if !template.has_placeholder(name) {
                tracing::warn!(placeholder = name, %path, "dashboard template lacks placeholder");
            }
        }

        let interval = Duration::from_millis(cfg.sampler.cpu_interval_ms);
        let sampler = Arc::new(SysinfoSampler::new(interval));
        Ok(Self::from_parts(sampler, template))
    }

    /// Assemble state from explicit parts. The uptime clock starts here.
    pub fn from_parts(sampler: Arc<dyn HostSampler>, template: Template) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                uptime: UptimeClock::start(),
                template,
            }),
            counters: Arc::new(RequestCounter::new()),
            sampler,
        }
    }

    pub fn uptime(&self) -> &UptimeClock {
        &self.inner.uptime
    }

    pub fn template(&self) -> &Template {
        &self.inner.template
    }

    pub fn counters(&self) -> &RequestCounter {
        &self.counters
    }

    pub fn sampler(&self) -> Arc<dyn HostSampler> {
        Arc::clone(&self.sampler)
    }
}
