//! minijinja rendering against the project configuration

use super::TemplateError;
use crate::config::ProjectConfig;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use serde::Serialize;

/// Flat template context: every configuration field plus generation time
#[derive(Debug, Serialize)]
pub struct TemplateData<'a> {
    #[serde(flatten)]
    pub config: &'a ProjectConfig,
    /// RFC 3339, second precision
    pub timestamp: String,
    pub current_year: i32,
}

impl<'a> TemplateData<'a> {
    pub fn new(config: &'a ProjectConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            config,
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            current_year: generated_at.year(),
        }
    }

    pub fn to_value(&self) -> Value {
        Value::from_serialize(self)
    }
}

/// Shared minijinja environment for file bodies and output paths
///
/// Values embedded in JSON, TOML or TypeScript go through the built-in
/// `tojson` filter; bare `{{ flag }}` prints booleans as `True`/`False`.
#[derive(Debug)]
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Render `source` (loaded from template `id`) with `data`
    pub fn render(&self, id: &str, source: &str, data: &Value) -> Result<String, TemplateError> {
        self.env
            .render_named_str(id, source, data)
            .map_err(|source| TemplateError::Render {
                id: id.to_string(),
                source,
            })
    }
}
