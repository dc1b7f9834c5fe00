//! Builds the `FieldChange` record for each id of a partition

use shared_types::TemplateField;

use crate::change::{DiffVerdict, FieldChange, FieldStatus};
use crate::differ::AttributeDiffer;

/// Field present only in the target version
pub fn classify_added(target: &TemplateField) -> FieldChange {
    FieldChange {
        field_id: target.field_id.clone(),
        status: FieldStatus::Added,
        source_page_number: None,
        target_page_number: Some(target.page_number),
        page_number_changed: false,
        near_text_diff: DiffVerdict::NotApplicable,
        value_options_diff: DiffVerdict::NotApplicable,
        position_change: DiffVerdict::NotApplicable,
        source_near_text: None,
        target_near_text: target.near_text.clone(),
        source_value_options: None,
        target_value_options: target.value_options.clone(),
        source_position: None,
        target_position: Some(target.position),
    }
}

/// Field present only in the source version
pub fn classify_removed(source: &TemplateField) -> FieldChange {
    FieldChange {
        field_id: source.field_id.clone(),
        status: FieldStatus::Removed,
        source_page_number: Some(source.page_number),
        target_page_number: None,
        page_number_changed: false,
        near_text_diff: DiffVerdict::NotApplicable,
        value_options_diff: DiffVerdict::NotApplicable,
        position_change: DiffVerdict::NotApplicable,
        source_near_text: source.near_text.clone(),
        target_near_text: None,
        source_value_options: source.value_options.clone(),
        target_value_options: None,
        source_position: Some(source.position),
        target_position: None,
    }
}

/// Field present in both versions: `Modified` if anything differs
pub fn classify_common(
    differ: &AttributeDiffer<'_>,
    source: &TemplateField,
    target: &TemplateField,
) -> FieldChange {
    let diff = differ.diff(source, target);
    let status = if diff.any_change() {
        tracing::trace!(field_id = %source.field_id, ?diff, "Field modified");
        FieldStatus::Modified
    } else {
        FieldStatus::Unchanged
    };

    FieldChange {
        field_id: source.field_id.clone(),
        status,
        source_page_number: Some(source.page_number),
        target_page_number: Some(target.page_number),
        page_number_changed: diff.page_number_changed,
        near_text_diff: diff.near_text,
        value_options_diff: diff.value_options,
        position_change: diff.position,
        source_near_text: source.near_text.clone(),
        target_near_text: target.near_text.clone(),
        source_value_options: source.value_options.clone(),
        target_value_options: target.value_options.clone(),
        source_position: Some(source.position),
        target_position: Some(target.position),
    }
}
