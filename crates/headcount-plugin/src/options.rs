// File: crates/headcount-plugin/src/options.rs
// Summary: Declarative option schema exposed to the host, and the config it sends back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PluginError;

pub const DEFAULT_CHART_TITLE: &str = "Employee Data";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    String,
    Boolean,
}

/// One entry of the host-facing configuration schema.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionSpec {
    #[serde(skip)]
    pub key: &'static str,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub label: &'static str,
    pub default: Value,
}

/// Schema for the employee status chart.
pub fn employee_chart_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec {
            key: "chart_title",
            kind: OptionKind::String,
            label: "Chart Title",
            default: Value::String(DEFAULT_CHART_TITLE.to_string()),
        },
        OptionSpec {
            key: "first_row_headers",
            kind: OptionKind::Boolean,
            label: "Align Headers To First Row",
            default: Value::Bool(false),
        },
    ]
}

/// Keyed object form the host expects: `{ "chart_title": { "type": ..., ... } }`.
pub fn options_json(specs: &[OptionSpec]) -> Result<Value, PluginError> {
    let mut map = Map::new();
    for spec in specs {
        map.insert(spec.key.to_string(), serde_json::to_value(spec)?);
    }
    Ok(Value::Object(map))
}

/// Configuration delivered with each update. Missing keys take their defaults;
/// unknown keys are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisConfig {
    pub chart_title: String,
    pub first_row_headers: bool,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self { chart_title: DEFAULT_CHART_TITLE.to_string(), first_row_headers: false }
    }
}

impl VisConfig {
    pub fn from_json(value: &Value) -> Result<Self, PluginError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.chart_title = title.into();
        self
    }
}
