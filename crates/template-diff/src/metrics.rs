//! Aggregate counts over a comparison

use serde::{Deserialize, Serialize};

use crate::change::{FieldChange, FieldStatus};

/// Totals across all field changes. Not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalMetrics {
    pub fields_added: usize,
    pub fields_removed: usize,
    pub fields_modified: usize,
    pub fields_unchanged: usize,
    /// Share of the id union that is not unchanged, in [0, 100]
    pub modification_percentage: f64,
}

impl GlobalMetrics {
    /// Single pass over the change records
    pub fn aggregate(changes: &[FieldChange]) -> Self {
        let mut metrics = GlobalMetrics::default();
        for change in changes {
            match change.status {
                FieldStatus::Added => metrics.fields_added += 1,
                FieldStatus::Removed => metrics.fields_removed += 1,
                FieldStatus::Modified => metrics.fields_modified += 1,
                FieldStatus::Unchanged => metrics.fields_unchanged += 1,
            }
        }
        metrics.modification_percentage = metrics.compute_percentage();
        metrics
    }

    /// Number of distinct field ids across both versions
    pub fn total(&self) -> usize {
        self.fields_added + self.fields_removed + self.fields_modified + self.fields_unchanged
    }

    /// Fields that are not unchanged
    pub fn changed(&self) -> usize {
        self.fields_added + self.fields_removed + self.fields_modified
    }

    fn compute_percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.changed() as f64 / total as f64 * 100.0
    }
}
