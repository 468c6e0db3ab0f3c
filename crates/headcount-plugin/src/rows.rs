// File: crates/headcount-plugin/src/rows.rs
// Summary: Decodes host rows (`{ field: { "value": ... } }`) into input records.

use headcount_core::InputRecord;
use serde_json::Value;

use crate::error::PluginError;

pub const JOB_LEVEL_FIELD: &str = "job_level";
pub const EMPLOYEE_STATUS_FIELD: &str = "employee_status";

pub fn decode_rows(rows: &[Value]) -> Result<Vec<InputRecord>, PluginError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let job_level = cell_text(row, index, JOB_LEVEL_FIELD)?;
            let status = cell_text(row, index, EMPLOYEE_STATUS_FIELD)?;
            Ok(InputRecord::new(job_level, &status))
        })
        .collect()
}

/// Text of `row[field].value`. Scalars are stringified; `null` reads as "null".
fn cell_text(row: &Value, index: usize, field: &'static str) -> Result<String, PluginError> {
    let obj = row.as_object().ok_or_else(|| PluginError::InvalidRow {
        index,
        reason: "expected an object of cells".to_string(),
    })?;
    let value = obj
        .get(field)
        .and_then(|cell| cell.get("value"))
        .ok_or(PluginError::MissingField { index, field })?;
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok("null".to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => Err(PluginError::InvalidRow {
            index,
            reason: format!("`{field}` value is not a scalar"),
        }),
    }
}

/// Build a host-shaped row; handy for hosts that read flat data.
pub fn host_row(job_level: &str, employee_status: &str) -> Value {
    serde_json::json!({
        JOB_LEVEL_FIELD: { "value": job_level },
        EMPLOYEE_STATUS_FIELD: { "value": employee_status },
    })
}
