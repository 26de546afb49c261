//! Combined `"<department> | <priority>"` class labels and their index mapping.
//!
//! Class indices follow sorted label order, so the same CSV always yields
//! the same mapping.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::dataset::RawComplaintRow;

pub fn combined_label(department: &str, priority: &str) -> String {
    format!("{department} | {priority}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    classes: Vec<String>,
}

impl LabelMap {
    /// Rows with an empty department or priority cell are rejected.
    pub fn fit(rows: &[RawComplaintRow]) -> Result<Self> {
        let mut classes = BTreeSet::new();
        for (idx, row) in rows.iter().enumerate() {
            if row.department.is_empty() || row.priority.is_empty() {
                bail!("row {idx} has an empty department or priority");
            }
            classes.insert(combined_label(&row.department, &row.priority));
        }
        Ok(Self {
            classes: classes.into_iter().collect(),
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .ok()
    }

    pub fn decode(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    /// JSON object keyed by class index, e.g. `{"0": "Cleaning Department | High"}`.
    pub fn to_json(&self) -> Result<String> {
        let mapping: BTreeMap<usize, &str> = self
            .classes
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.as_str()))
            .collect();
        serde_json::to_string(&mapping).context("failed to serialize label mapping")
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(path, self.to_json()?)
            .with_context(|| format!("failed to write label mapping to {}", path.display()))?;
        info!(path = %path.display(), classes = self.len(), "wrote label mapping");
        Ok(())
    }
}
