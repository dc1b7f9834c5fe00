//! Property-based tests for the comparison engine

use std::collections::BTreeSet;

use proptest::prelude::*;
use shared_types::{FieldRect, TemplateField};
use template_diff::{compare, DiffVerdict, FieldStatus};

// ============================================================
// Strategies
// ============================================================

#[derive(Debug, Clone)]
struct Attrs {
    near_text: Option<String>,
    value_options: Option<Vec<String>>,
    position: FieldRect,
    page_number: u32,
}

/// Small value spaces so that common fields are often unchanged
fn attrs() -> impl Strategy<Value = Attrs> {
    (
        prop::option::of(prop_oneof![Just(String::new()), "[AB ]{1,3}"]),
        prop::option::of(prop::collection::vec("[xy]", 0..3)),
        (0u8..2, 0u8..2, 10u8..12, 10u8..12),
        1u32..3,
    )
        .prop_map(|(near_text, value_options, (l, t, r, b), page_number)| Attrs {
            near_text,
            value_options,
            position: FieldRect::new(l as f64, t as f64, r as f64, b as f64),
            page_number,
        })
}

fn build(id: &str, attrs: &Attrs) -> TemplateField {
    TemplateField {
        field_id: id.to_string(),
        field_type: "text".to_string(),
        near_text: attrs.near_text.clone(),
        value_options: attrs.value_options.clone(),
        position: attrs.position,
        page_number: attrs.page_number,
    }
}

/// A field list with unique ids
fn field_list() -> impl Strategy<Value = Vec<TemplateField>> {
    prop::collection::btree_map("[a-e]{1,2}", attrs(), 0..12)
        .prop_map(|m| m.iter().map(|(id, a)| build(id, a)).collect())
}

/// Two versions over a shared id space: 0 = source only, 1 = target only, 2 = both
fn version_pair() -> impl Strategy<Value = (Vec<TemplateField>, Vec<TemplateField>)> {
    prop::collection::btree_map("[a-f]{1,2}", (0u8..3, attrs(), attrs()), 0..16).prop_map(
        |m| {
            let mut source = Vec::new();
            let mut target = Vec::new();
            for (id, (presence, s, t)) in &m {
                if *presence != 1 {
                    source.push(build(id, s));
                }
                if *presence != 0 {
                    target.push(build(id, t));
                }
            }
            (source, target)
        },
    )
}

fn ids(fields: &[TemplateField]) -> BTreeSet<String> {
    fields.iter().map(|f| f.field_id.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Partition
    // ============================================================

    #[test]
    fn every_id_appears_exactly_once((source, target) in version_pair()) {
        let result = compare(&source, &target).unwrap();

        let union: BTreeSet<String> = ids(&source).union(&ids(&target)).cloned().collect();
        let output: Vec<String> = result.field_changes.iter().map(|c| c.field_id.clone()).collect();
        let expected: Vec<String> = union.iter().cloned().collect();
        prop_assert_eq!(output, expected);

        let m = result.global_metrics;
        prop_assert_eq!(
            m.fields_added + m.fields_removed + m.fields_modified + m.fields_unchanged,
            union.len()
        );
    }

    #[test]
    fn status_agrees_with_presence((source, target) in version_pair()) {
        let result = compare(&source, &target).unwrap();
        let (s, t) = (ids(&source), ids(&target));

        for change in &result.field_changes {
            let expected = match (s.contains(&change.field_id), t.contains(&change.field_id)) {
                (true, false) => vec![FieldStatus::Removed],
                (false, true) => vec![FieldStatus::Added],
                _ => vec![FieldStatus::Modified, FieldStatus::Unchanged],
            };
            prop_assert!(expected.contains(&change.status));
        }
    }

    // ============================================================
    // Status rules
    // ============================================================

    #[test]
    fn not_applicable_only_for_one_sided_fields((source, target) in version_pair()) {
        let result = compare(&source, &target).unwrap();

        for change in &result.field_changes {
            let verdicts = [change.near_text_diff, change.value_options_diff, change.position_change];
            match change.status {
                FieldStatus::Added | FieldStatus::Removed => {
                    prop_assert!(verdicts.iter().all(|v| *v == DiffVerdict::NotApplicable));
                    prop_assert!(!change.page_number_changed);
                }
                FieldStatus::Modified => {
                    prop_assert!(verdicts.iter().all(|v| *v != DiffVerdict::NotApplicable));
                    prop_assert!(
                        verdicts.contains(&DiffVerdict::Different) || change.page_number_changed
                    );
                }
                FieldStatus::Unchanged => {
                    prop_assert!(verdicts.iter().all(|v| *v == DiffVerdict::Equal));
                    prop_assert!(!change.page_number_changed);
                }
            }
        }
    }

    #[test]
    fn one_sided_records_null_the_missing_side((source, target) in version_pair()) {
        let result = compare(&source, &target).unwrap();

        for change in result.changes_with_status(FieldStatus::Added) {
            prop_assert!(change.source_page_number.is_none());
            prop_assert!(change.source_near_text.is_none());
            prop_assert!(change.source_value_options.is_none());
            prop_assert!(change.source_position.is_none());
            prop_assert!(change.target_page_number.is_some());
            prop_assert!(change.target_position.is_some());
        }
        for change in result.changes_with_status(FieldStatus::Removed) {
            prop_assert!(change.target_page_number.is_none());
            prop_assert!(change.target_near_text.is_none());
            prop_assert!(change.target_value_options.is_none());
            prop_assert!(change.target_position.is_none());
            prop_assert!(change.source_page_number.is_some());
            prop_assert!(change.source_position.is_some());
        }
    }

    // ============================================================
    // Identity and duality
    // ============================================================

    #[test]
    fn comparing_with_itself_is_all_unchanged(fields in field_list()) {
        let result = compare(&fields, &fields).unwrap();
        let m = result.global_metrics;

        prop_assert_eq!(m.fields_added, 0);
        prop_assert_eq!(m.fields_removed, 0);
        prop_assert_eq!(m.fields_modified, 0);
        prop_assert_eq!(m.fields_unchanged, fields.len());
        prop_assert_eq!(m.modification_percentage, 0.0);
        prop_assert!(result.field_changes.iter().all(|c| c.status == FieldStatus::Unchanged));
    }

    #[test]
    fn against_empty_is_all_removed_or_added(fields in field_list()) {
        let removed = compare(&fields, &[]).unwrap();
        let added = compare(&[], &fields).unwrap();

        prop_assert!(removed.field_changes.iter().all(|c| c.status == FieldStatus::Removed));
        prop_assert!(added.field_changes.iter().all(|c| c.status == FieldStatus::Added));
        prop_assert_eq!(removed.global_metrics.fields_removed, fields.len());
        prop_assert_eq!(added.global_metrics.fields_added, fields.len());

        let expected_pct = if fields.is_empty() { 0.0 } else { 100.0 };
        prop_assert_eq!(removed.global_metrics.modification_percentage, expected_pct);
        prop_assert_eq!(added.global_metrics.modification_percentage, expected_pct);
    }

    #[test]
    fn swapping_versions_swaps_added_and_removed((source, target) in version_pair()) {
        let forward = compare(&source, &target).unwrap().global_metrics;
        let backward = compare(&target, &source).unwrap().global_metrics;

        prop_assert_eq!(forward.fields_added, backward.fields_removed);
        prop_assert_eq!(forward.fields_removed, backward.fields_added);
        prop_assert_eq!(forward.fields_modified, backward.fields_modified);
        prop_assert_eq!(forward.fields_unchanged, backward.fields_unchanged);
    }

    // ============================================================
    // Metrics and ordering
    // ============================================================

    #[test]
    fn percentage_matches_counts((source, target) in version_pair()) {
        let m = compare(&source, &target).unwrap().global_metrics;
        let total = m.fields_added + m.fields_removed + m.fields_modified + m.fields_unchanged;

        prop_assert!((0.0..=100.0).contains(&m.modification_percentage));
        if total == 0 {
            prop_assert_eq!(m.modification_percentage, 0.0);
        } else {
            let expected = (m.fields_added + m.fields_removed + m.fields_modified) as f64
                / total as f64
                * 100.0;
            prop_assert_eq!(m.modification_percentage, expected);
        }
    }

    #[test]
    fn shuffled_input_gives_identical_output(
        (source, target, shuffled_source, shuffled_target) in version_pair().prop_flat_map(|(s, t)| {
            (Just(s.clone()), Just(t.clone()), Just(s).prop_shuffle(), Just(t).prop_shuffle())
        })
    ) {
        let ordered = compare(&source, &target).unwrap();
        let shuffled = compare(&shuffled_source, &shuffled_target).unwrap();
        prop_assert_eq!(&ordered, &shuffled);

        let ids: Vec<&str> = ordered.field_changes.iter().map(|c| c.field_id.as_str()).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn duplicate_ids_always_fail(fields in field_list().prop_filter("non-empty", |f| !f.is_empty())) {
        let mut with_duplicate = fields.clone();
        with_duplicate.push(fields[0].clone());
        prop_assert!(compare(&with_duplicate, &fields).is_err());
        prop_assert!(compare(&fields, &with_duplicate).is_err());
    }
}
