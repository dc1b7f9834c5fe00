//! Content fingerprints for template field lists
//!
//! Used by callers that memoize comparisons or look up duplicate uploads.
//! The fingerprint ignores input order: fields are hashed sorted by id.

use sha2::{Digest, Sha256};

use crate::template::TemplateField;

/// SHA-256 over the fields sorted by `field_id`, hex encoded
pub fn fingerprint_fields(fields: &[TemplateField]) -> String {
    let mut sorted: Vec<&TemplateField> = fields.iter().collect();
    sorted.sort_by(|a, b| a.field_id.cmp(&b.field_id));

    let mut hasher = Sha256::new();
    hasher.update((sorted.len() as u64).to_le_bytes());
    for field in sorted {
        hash_field(&mut hasher, field);
    }
    hex::encode(hasher.finalize())
}

fn hash_field(hasher: &mut Sha256, field: &TemplateField) {
    hash_str(hasher, &field.field_id);
    hash_str(hasher, &field.field_type);

    match &field.near_text {
        Some(text) => {
            hasher.update([1u8]);
            hash_str(hasher, text);
        }
        None => hasher.update([0u8]),
    }

    match &field.value_options {
        Some(options) => {
            hasher.update([1u8]);
            hasher.update((options.len() as u64).to_le_bytes());
            for option in options {
                hash_str(hasher, option);
            }
        }
        None => hasher.update([0u8]),
    }

    for bound in field.position.bounds() {
        hasher.update(bound.to_bits().to_le_bytes());
    }
    hasher.update(field.page_number.to_le_bytes());
}

// Length prefix keeps ("ab", "c") and ("a", "bc") apart
fn hash_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}
