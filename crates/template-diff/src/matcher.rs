//! Partition of the field id union into added, removed and common ids

use std::collections::HashSet;

use crate::index::FieldIndex;

/// Three disjoint id sets. No ordering is implied.
#[derive(Debug, Default)]
pub struct FieldPartition<'a> {
    /// Only in the target
    pub added: HashSet<&'a str>,
    /// Only in the source
    pub removed: HashSet<&'a str>,
    /// In both versions
    pub common: HashSet<&'a str>,
}

impl FieldPartition<'_> {
    /// Size of the id union
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.common.len()
    }
}

pub fn match_fields<'a>(source: &FieldIndex<'a>, target: &FieldIndex<'a>) -> FieldPartition<'a> {
    let mut partition = FieldPartition::default();

    for id in source.ids() {
        if target.contains(id) {
            partition.common.insert(id);
        } else {
            partition.removed.insert(id);
        }
    }
    partition.added = target.ids().filter(|id| !source.contains(id)).collect();

    tracing::debug!(
        added = partition.added.len(),
        removed = partition.removed.len(),
        common = partition.common.len(),
        "Partitioned field ids"
    );

    partition
}
