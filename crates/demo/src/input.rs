// File: crates/demo/src/input.rs
// Summary: Loads employee rows from CSV or JSON into host-shaped rows.

use anyhow::{Context, Result};
use headcount_plugin::host_row;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FlatRow {
    job_level: String,
    employee_status: String,
}

/// `.json` files hold an array of host rows; anything else is read as CSV
/// with `job_level` and `employee_status` columns.
pub fn load_rows(path: &Path) -> Result<Vec<Value>> {
    let is_json = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        parse_json_rows(&text).with_context(|| format!("parsing {}", path.display()))
    } else {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;
        read_csv_rows(rdr)
    }
}

pub fn parse_json_rows(text: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(rows) => Ok(rows),
        other => anyhow::bail!("expected a JSON array of rows, found {}", kind(&other)),
    }
}

pub fn read_csv_rows<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Value>> {
    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<FlatRow>().enumerate() {
        // header is line 1
        let row = rec.with_context(|| format!("CSV record {}", i + 2))?;
        out.push(host_row(&row.job_level, &row.employee_status));
    }
    Ok(out)
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
