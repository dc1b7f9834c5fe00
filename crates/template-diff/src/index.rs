//! Field lookup keyed by `field_id`

use std::collections::HashMap;

use shared_types::TemplateField;

use crate::error::{CompareError, Side};

/// One version's fields keyed by id, borrowed from the caller's list
#[derive(Debug)]
pub struct FieldIndex<'a> {
    side: Side,
    fields: HashMap<&'a str, &'a TemplateField>,
}

impl<'a> FieldIndex<'a> {
    /// Index a field list, failing on the first repeated `field_id`
    pub fn build(side: Side, fields: &'a [TemplateField]) -> Result<Self, CompareError> {
        let mut map = HashMap::with_capacity(fields.len());
        for field in fields {
            if map.insert(field.field_id.as_str(), field).is_some() {
                tracing::warn!(
                    side = %side,
                    field_id = %field.field_id,
                    "Duplicate field_id, aborting comparison"
                );
                return Err(CompareError::DuplicateFieldId {
                    side,
                    field_id: field.field_id.clone(),
                });
            }
        }
        Ok(Self { side, fields: map })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn get(&self, field_id: &str) -> Option<&'a TemplateField> {
        self.fields.get(field_id).copied()
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.fields.contains_key(field_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
