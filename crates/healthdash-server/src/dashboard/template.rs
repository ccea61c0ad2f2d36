//! Dashboard template, compiled once at startup into a `minijinja` environment.

use std::fs;
use std::io::ErrorKind;

use minijinja::{Environment, Value};

use healthdash_core::error::{HealthDashError, Result};

/// Name the dashboard template is registered under. The `.html` suffix turns
/// on HTML auto-escaping.
const TEMPLATE_NAME: &str = "index.html";

#[derive(Debug)]
pub struct Template {
    env: Environment<'static>,
}

impl Template {
    /// Load and compile a template file. A missing file is `TemplateNotFound`.
    pub fn load(path: &str) -> Result<Self> {
        let src = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => HealthDashError::TemplateNotFound(path.to_string()),
            _ => HealthDashError::Internal(format!("read template failed ({path}): {e}")),
        })?;
        Self::from_source(src)
    }

    /// Compile template source. Syntax errors are `BadConfig`.
    pub fn from_source(src: impl Into<String>) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template_owned(TEMPLATE_NAME, src.into())
            .map_err(|e| HealthDashError::BadConfig(format!("invalid dashboard template: {e}")))?;
        Ok(Self { env })
    }

    /// Whether the template reads top-level variable `name`.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.env
            .get_template(TEMPLATE_NAME)
            .map(|t| t.undeclared_variables(false).contains(name))
            .unwrap_or(false)
    }

    /// Render with `ctx`. Variables missing from `ctx` render as empty.
    pub fn render(&self, ctx: Value) -> Result<String> {
        self.env
            .get_template(TEMPLATE_NAME)
            .and_then(|t| t.render(ctx))
            .map_err(|e| HealthDashError::Internal(format!("render dashboard failed: {e}")))
    }
}
