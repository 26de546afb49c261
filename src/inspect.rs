//! Plain-text debug report over a complaint CSV.
//!
//! Flags rows whose department, after trimming, is not one of the five valid
//! names and tallies the raw department values.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::dataset::{self, RawComplaintRow};
use crate::vocab::VALID_DEPARTMENTS;

pub const MAX_BAD_ROWS_SHOWN: usize = 10;
pub const MAX_VALUE_COUNTS_SHOWN: usize = 20;
const TEXT_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadRow {
    pub index: usize,
    pub text: String,
    pub department: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugReport {
    pub total_rows: usize,
    /// Raw department of row 0.
    pub sample_department: String,
    pub bad_row_count: usize,
    /// First [`MAX_BAD_ROWS_SHOWN`] offenders.
    pub bad_rows: Vec<BadRow>,
    /// Non-empty raw department values, most frequent first.
    pub department_counts: Vec<(String, usize)>,
}

fn is_valid_department(raw: &str) -> bool {
    VALID_DEPARTMENTS.contains(&raw.trim())
}

/// Fails on an empty dataset, since there is no row 0 to sample.
pub fn inspect(rows: &[RawComplaintRow]) -> Result<DebugReport> {
    let Some(first) = rows.first() else {
        bail!("dataset has no rows");
    };

    let mut bad_row_count = 0;
    let mut bad_rows = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for (index, row) in rows.iter().enumerate() {
        // empty cells are missing values, not a department
        if !row.department.is_empty() {
            *counts.entry(row.department.as_str()).or_insert(0) += 1;
        }
        if is_valid_department(&row.department) {
            continue;
        }
        bad_row_count += 1;
        if bad_rows.len() < MAX_BAD_ROWS_SHOWN {
            bad_rows.push(BadRow {
                index,
                text: row.text.clone(),
                department: row.department.clone(),
                priority: row.priority.clone(),
            });
        }
    }

    let mut department_counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    department_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(DebugReport {
        total_rows: rows.len(),
        sample_department: first.department.clone(),
        bad_row_count,
        bad_rows,
        department_counts,
    })
}

impl DebugReport {
    pub fn render(&self) -> String {
        let mut out = format!("Total rows: {}\n", self.total_rows);
        out.push_str(&format!(
            "Sample raw (row 0): {:?}\n",
            self.sample_department
        ));
        out.push_str(&format!(
            "Bad rows count (after strip): {}\n",
            self.bad_row_count
        ));

        if !self.bad_rows.is_empty() {
            out.push_str(&format!("First {MAX_BAD_ROWS_SHOWN} bad rows details:\n"));
            for row in &self.bad_rows {
                let preview: String = row.text.chars().take(TEXT_PREVIEW_CHARS).collect();
                out.push_str(&format!("Row {}:\n", row.index));
                out.push_str(&format!("  Text: {preview}...\n"));
                out.push_str(&format!("  Dept Raw: {:?}\n", row.department));
                out.push_str(&format!("  Prio: {}\n", row.priority));
                out.push_str(&"-".repeat(20));
                out.push('\n');
            }
        }

        out.push_str("\nDepartment Value Counts:\n");
        let shown = &self.department_counts
            [..self.department_counts.len().min(MAX_VALUE_COUNTS_SHOWN)];
        let width = shown.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, count) in shown {
            out.push_str(&format!("{name:<width$}  {count}\n"));
        }
        out
    }
}

/// Build the report for `csv_path` and write it to `out_path`.
///
/// Read failures and empty datasets end up in the report as `Error: ...`;
/// only a failure to write the report itself is returned.
pub fn write_report(csv_path: &Path, out_path: &Path) -> Result<()> {
    let inspected = dataset::read_raw(csv_path).and_then(|rows| {
        inspect(&rows).with_context(|| format!("cannot inspect {}", csv_path.display()))
    });
    let contents = match inspected {
        Ok(report) => {
            if report.bad_row_count > 0 {
                warn!(
                    path = %csv_path.display(),
                    bad_rows = report.bad_row_count,
                    "rows with unknown departments"
                );
            }
            info!(
                path = %csv_path.display(),
                rows = report.total_rows,
                "inspected dataset"
            );
            report.render()
        }
        Err(e) => {
            warn!(path = %csv_path.display(), err = %e, "could not inspect dataset");
            format!("Error: {e:#}")
        }
    };

    fs::write(out_path, contents)
        .with_context(|| format!("failed to write debug report to {}", out_path.display()))?;
    info!(path = %out_path.display(), "debug report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn row(text: &str, department: &str, priority: &str) -> RawComplaintRow {
        RawComplaintRow {
            text: text.to_string(),
            department: department.to_string(),
            priority: priority.to_string(),
        }
    }

    #[test]
    fn padded_departments_are_valid_after_trim() {
        let rows = vec![
            row("a", " Fire Department ", "Emergency"),
            row("b", "Water Department", "High"),
        ];
        let report = inspect(&rows).expect("inspect");
        assert_eq!(report.bad_row_count, 0);
        assert_eq!(report.sample_department, " Fire Department ");
    }

    #[test]
    fn bad_rows_are_capped_but_counted() {
        let rows: Vec<_> = (0..15).map(|i| row(&format!("t{i}"), "Police", "Low")).collect();
        let report = inspect(&rows).expect("inspect");
        assert_eq!(report.bad_row_count, 15);
        assert_eq!(report.bad_rows.len(), MAX_BAD_ROWS_SHOWN);
        assert_eq!(report.bad_rows[9].index, 9);
    }

    #[test]
    fn value_counts_sorted_by_frequency() {
        let rows = vec![
            row("a", "Water Department", "High"),
            row("b", "Fire Department", "Low"),
            row("c", "Water Department", "Low"),
        ];
        let report = inspect(&rows).expect("inspect");
        assert_eq!(
            report.department_counts,
            vec![
                ("Water Department".to_string(), 2),
                ("Fire Department".to_string(), 1)
            ]
        );
    }

    #[test]
    fn render_lists_bad_row_details() {
        let long_text = "x".repeat(80);
        let rows = vec![row(&long_text, "Fire Dept", "High")];
        let rendered = inspect(&rows).expect("inspect").render();
        assert!(rendered.starts_with("Total rows: 1\n"));
        assert!(rendered.contains("Sample raw (row 0): \"Fire Dept\""));
        assert!(rendered.contains("Bad rows count (after strip): 1"));
        assert!(rendered.contains("First 10 bad rows details:"));
        assert!(rendered.contains(&format!("  Text: {}...", "x".repeat(50))));
        assert!(rendered.contains("  Dept Raw: \"Fire Dept\""));
        assert!(rendered.contains("  Prio: High"));
        assert!(rendered.contains("\nDepartment Value Counts:\nFire Dept  1\n"));
    }

    #[test]
    fn missing_csv_writes_error_report() {
        let tmp = tempdir().expect("tempdir");
        let out = tmp.path().join("debug_output.txt");
        write_report(&tmp.path().join("missing.csv"), &out).expect("report");
        let contents = std::fs::read_to_string(&out).expect("read report");
        assert!(contents.starts_with("Error: "), "{contents}");
    }

    #[test]
    fn header_only_csv_writes_error_report() {
        let tmp = tempdir().expect("tempdir");
        let csv = tmp.path().join("complaints.csv");
        let out = tmp.path().join("debug_output.txt");
        std::fs::write(&csv, "text,department,priority,emergency_score\n").expect("write csv");

        write_report(&csv, &out).expect("report");
        let contents = std::fs::read_to_string(&out).expect("read report");
        assert!(contents.starts_with("Error: "), "{contents}");
        assert!(contents.contains("no rows"), "{contents}");
        assert!(!contents.contains("Bad rows count"));
    }

    #[test]
    fn empty_department_is_bad_but_not_counted() {
        let rows = vec![
            row("a", "", "Low"),
            row("b", "Fire Department", "High"),
        ];
        let report = inspect(&rows).expect("inspect");
        assert_eq!(report.bad_row_count, 1);
        assert_eq!(report.bad_rows[0].index, 0);
        assert_eq!(
            report.department_counts,
            vec![("Fire Department".to_string(), 1)]
        );
        assert!(report.render().ends_with("\nDepartment Value Counts:\nFire Department  1\n"));
    }
}
