//! Attribute-level comparison of a field present in both versions
//!
//! Each attribute is judged on its own, so a moved field whose label also
//! changed reports both.

use shared_types::TemplateField;

use crate::change::DiffVerdict;
use crate::policy::{NearTextPolicy, PositionTolerance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDiff {
    pub near_text: DiffVerdict,
    pub value_options: DiffVerdict,
    pub position: DiffVerdict,
    pub page_number_changed: bool,
}

impl AttributeDiff {
    /// True if any attribute differs
    pub fn any_change(&self) -> bool {
        self.near_text.is_different()
            || self.value_options.is_different()
            || self.position.is_different()
            || self.page_number_changed
    }
}

/// Compares the attributes of two versions of one field
#[derive(Debug, Clone, Copy)]
pub struct AttributeDiffer<'a> {
    near_text: &'a dyn NearTextPolicy,
    tolerance: PositionTolerance,
}

impl<'a> AttributeDiffer<'a> {
    pub fn new(near_text: &'a dyn NearTextPolicy, tolerance: PositionTolerance) -> Self {
        Self {
            near_text,
            tolerance,
        }
    }

    pub fn diff(&self, source: &TemplateField, target: &TemplateField) -> AttributeDiff {
        AttributeDiff {
            near_text: self.diff_near_text(source, target),
            value_options: diff_value_options(source, target),
            position: self.diff_position(source, target),
            page_number_changed: source.page_number != target.page_number,
        }
    }

    fn diff_near_text(&self, source: &TemplateField, target: &TemplateField) -> DiffVerdict {
        DiffVerdict::from_equal(
            self.near_text
                .equivalent(source.near_text.as_deref(), target.near_text.as_deref()),
        )
    }

    fn diff_position(&self, source: &TemplateField, target: &TemplateField) -> DiffVerdict {
        DiffVerdict::from_equal(self.tolerance.rects_equal(&source.position, &target.position))
    }
}

/// Option order matters: a reordered list is `Different`.
fn diff_value_options(source: &TemplateField, target: &TemplateField) -> DiffVerdict {
    DiffVerdict::from_equal(source.value_options == target.value_options)
}
