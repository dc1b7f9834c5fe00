//! Comparison entry points

use shared_types::TemplateField;

use crate::change::FieldChange;
use crate::classifier::{classify_added, classify_common, classify_removed};
use crate::config::CompareOptions;
use crate::differ::AttributeDiffer;
use crate::error::{CompareError, Side};
use crate::index::FieldIndex;
use crate::matcher::match_fields;
use crate::metrics::GlobalMetrics;
use crate::result::ComparisonResult;

/// Runs comparisons with a fixed set of options.
///
/// Holds no per-call state; one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare a source version's fields against a target version's.
    ///
    /// Fails only when a field list repeats a `field_id`; no partial result
    /// is produced in that case.
    pub fn compare(
        &self,
        source_fields: &[TemplateField],
        target_fields: &[TemplateField],
    ) -> Result<ComparisonResult, CompareError> {
        let source = FieldIndex::build(Side::Source, source_fields)?;
        let target = FieldIndex::build(Side::Target, target_fields)?;
        let partition = match_fields(&source, &target);

        let differ = AttributeDiffer::new(
            self.options.near_text.as_ref(),
            self.options.position_tolerance,
        );

        let mut changes: Vec<FieldChange> = Vec::with_capacity(partition.total());
        changes.extend(
            partition
                .added
                .iter()
                .filter_map(|id| target.get(id))
                .map(classify_added),
        );
        changes.extend(
            partition
                .removed
                .iter()
                .filter_map(|id| source.get(id))
                .map(classify_removed),
        );
        changes.extend(partition.common.iter().filter_map(|id| {
            let s = source.get(id)?;
            let t = target.get(id)?;
            Some(classify_common(&differ, s, t))
        }));

        let metrics = GlobalMetrics::aggregate(&changes);
        tracing::debug!(
            added = metrics.fields_added,
            removed = metrics.fields_removed,
            modified = metrics.fields_modified,
            unchanged = metrics.fields_unchanged,
            modification_percentage = metrics.modification_percentage,
            near_text_policy = self.options.near_text.name(),
            "Template comparison complete"
        );

        Ok(ComparisonResult::assemble(changes, metrics))
    }
}

/// Compare with strict defaults: exact near text, exact positions
pub fn compare(
    source_fields: &[TemplateField],
    target_fields: &[TemplateField],
) -> Result<ComparisonResult, CompareError> {
    Comparator::default().compare(source_fields, target_fields)
}
