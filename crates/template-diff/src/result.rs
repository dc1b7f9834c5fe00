//! Final comparison output

use serde::{Deserialize, Serialize};

use crate::change::{FieldChange, FieldStatus};
use crate::metrics::GlobalMetrics;

/// Field changes ordered by `field_id`, with aggregate metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub field_changes: Vec<FieldChange>,
    pub global_metrics: GlobalMetrics,
}

impl ComparisonResult {
    /// Orders the changes lexicographically by id and attaches metrics.
    ///
    /// Ids are unique across the union, so the order has no ties.
    pub fn assemble(mut field_changes: Vec<FieldChange>, global_metrics: GlobalMetrics) -> Self {
        field_changes.sort_unstable_by(|a, b| a.field_id.cmp(&b.field_id));
        Self {
            field_changes,
            global_metrics,
        }
    }

    /// Look up the change for one field id.
    ///
    /// Results from `assemble` are sorted and searched by bisection. A
    /// result deserialized in some other order falls back to a linear scan.
    pub fn get(&self, field_id: &str) -> Option<&FieldChange> {
        match self
            .field_changes
            .binary_search_by(|change| change.field_id.as_str().cmp(field_id))
        {
            Ok(i) => Some(&self.field_changes[i]),
            Err(_) => self
                .field_changes
                .iter()
                .find(|change| change.field_id == field_id),
        }
    }

    pub fn changes_with_status(&self, status: FieldStatus) -> impl Iterator<Item = &FieldChange> {
        self.field_changes
            .iter()
            .filter(move |change| change.status == status)
    }

    /// False when every field is unchanged (or there are no fields)
    pub fn has_changes(&self) -> bool {
        self.global_metrics.changed() > 0
    }
}
