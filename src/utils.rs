use std::collections::BTreeMap;
use std::path::Path;

use crate::dataset::ComplaintRecord;
use crate::priority::Priority;
use crate::vocab::Department;

/// Department x priority tally of a generated dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub counts: BTreeMap<(Department, Priority), usize>,
    pub total: usize,
}

impl GenerationSummary {
    pub fn from_records(records: &[ComplaintRecord]) -> Self {
        let mut counts = BTreeMap::new();
        for r in records {
            *counts.entry((r.department, r.priority)).or_insert(0) += 1;
        }
        Self {
            counts,
            total: records.len(),
        }
    }

    pub fn count(&self, department: Department, priority: Priority) -> usize {
        self.counts
            .get(&(department, priority))
            .copied()
            .unwrap_or(0)
    }

    pub fn render_table(&self) -> String {
        let dept_width = Department::ALL
            .iter()
            .map(|d| d.as_str().len())
            .max()
            .unwrap_or(0);
        let mut out = format!("{:<dept_width$}", "Department");
        for p in Priority::ALL {
            out.push_str(&format!(" | {:>9}", p.as_str()));
        }
        out.push('\n');
        out.push_str(&"-".repeat(dept_width + Priority::ALL.len() * 12));
        out.push('\n');
        for d in Department::ALL {
            out.push_str(&format!("{:<dept_width$}", d.as_str()));
            for p in Priority::ALL {
                out.push_str(&format!(" | {:>9}", self.count(d, p)));
            }
            out.push('\n');
        }
        out
    }
}

/// Print the generation summary table and the completion line.
pub fn print_summary(summary: &GenerationSummary, output: &Path) {
    println!();
    print!("{}", summary.render_table());
    println!();
    println!("Written to: {}", output.display());
    println!("{}-sample multi-line dataset created.", summary.total);
}
