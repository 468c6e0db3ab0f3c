// File: crates/headcount-core/src/aggregate.rs
// Summary: Employee record model and per-job-level aggregation.
// Notes:
// - Groups keep first-seen order; a map from job level to slot index avoids
//   re-sorting and keeps the pass linear.
// - Unrecognised statuses still create their group and are tallied in `other`,
//   which never feeds the layout total.

use std::collections::HashMap;
use std::fmt;

/// Status value carried by the host's `employee_status` column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EmployeeStatus {
    Existing,
    NewHire,
    Leaver,
    /// Any value outside the three recognised ones, kept verbatim.
    Other(String),
}

impl EmployeeStatus {
    /// Exact, case-sensitive match against the host wire values.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "existing" => Self::Existing,
            "new_hire" => Self::NewHire,
            "leaver" => Self::Leaver,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_recognised(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Existing => f.write_str("existing"),
            Self::NewHire => f.write_str("new_hire"),
            Self::Leaver => f.write_str("leaver"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// One employee observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRecord {
    pub job_level: String,
    pub employee_status: EmployeeStatus,
}

impl InputRecord {
    pub fn new(job_level: impl Into<String>, status: &str) -> Self {
        Self { job_level: job_level.into(), employee_status: EmployeeStatus::parse(status) }
    }
}

/// Per-job-level totals. `headcount`, `new_hires` and `leavers` partition the
/// recognised records of the level; `other` counts the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySummary {
    pub job_level: String,
    pub headcount: u64,
    pub new_hires: u64,
    pub leavers: u64,
    pub other: u64,
}

impl CategorySummary {
    pub fn new(job_level: impl Into<String>) -> Self {
        Self { job_level: job_level.into(), ..Self::default() }
    }

    /// Sum of the three charted counts.
    pub fn row_total(&self) -> u64 {
        self.headcount + self.new_hires + self.leavers
    }
}

/// Group records by job level in first-seen order.
pub fn aggregate(records: &[InputRecord]) -> Vec<CategorySummary> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<CategorySummary> = Vec::new();

    for rec in records {
        let idx = *slots.entry(rec.job_level.as_str()).or_insert_with(|| {
            out.push(CategorySummary::new(rec.job_level.as_str()));
            out.len() - 1
        });
        let summary = &mut out[idx];
        match &rec.employee_status {
            EmployeeStatus::Existing => summary.headcount += 1,
            EmployeeStatus::NewHire => summary.new_hires += 1,
            EmployeeStatus::Leaver => summary.leavers += 1,
            EmployeeStatus::Other(raw) => {
                log::debug!("job level {:?}: ignoring unrecognised status {:?}", rec.job_level, raw);
                summary.other += 1;
            }
        }
    }

    let dropped: u64 = out.iter().map(|s| s.other).sum();
    if dropped > 0 {
        log::debug!("aggregated {} records into {} job levels ({} with unrecognised status)", records.len(), out.len(), dropped);
    }
    out
}

/// Global total shared by every drawing pass of one render.
pub fn layout_total(summaries: &[CategorySummary]) -> u64 {
    summaries.iter().map(CategorySummary::row_total).sum()
}
