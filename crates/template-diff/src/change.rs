//! Per-field comparison records

use serde::{Deserialize, Serialize};
use shared_types::FieldRect;

/// Overall verdict for one field id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldStatus {
    Added,
    Removed,
    Modified,
    Unchanged,
}

/// Verdict for a single compared attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffVerdict {
    Equal,
    Different,
    /// Field exists on one side only
    NotApplicable,
}

impl DiffVerdict {
    pub fn from_equal(equal: bool) -> Self {
        if equal {
            DiffVerdict::Equal
        } else {
            DiffVerdict::Different
        }
    }

    pub fn is_different(self) -> bool {
        self == DiffVerdict::Different
    }
}

/// Outcome for one field id appearing in either version.
///
/// `source_*` values are `None` when the field is absent from the source,
/// `target_*` likewise. `source_value_options: Some(vec![])` means the field
/// exists with an empty option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field_id: String,
    pub status: FieldStatus,
    pub source_page_number: Option<u32>,
    pub target_page_number: Option<u32>,
    pub page_number_changed: bool,
    pub near_text_diff: DiffVerdict,
    pub value_options_diff: DiffVerdict,
    pub position_change: DiffVerdict,
    pub source_near_text: Option<String>,
    pub target_near_text: Option<String>,
    pub source_value_options: Option<Vec<String>>,
    pub target_value_options: Option<Vec<String>>,
    pub source_position: Option<FieldRect>,
    pub target_position: Option<FieldRect>,
}

impl FieldChange {
    pub fn is_change(&self) -> bool {
        self.status != FieldStatus::Unchanged
    }
}
