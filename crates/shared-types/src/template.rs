//! Template field records produced by field extraction
//!
//! One `TemplateField` exists per form field per template version. The
//! comparison engine reads these and never mutates them.

use serde::{Deserialize, Serialize};

/// Bounding box of a field in page coordinate space.
///
/// Bounds stored as JSON must be finite: JSON has no NaN or infinity, so
/// serde_json writes them as `null` and cannot read them back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl FieldRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// True if every bound can be stored as JSON
    pub fn is_finite(&self) -> bool {
        self.bounds().iter().all(|b| b.is_finite())
    }

    /// Bounds in (left, top, right, bottom) order
    pub fn bounds(&self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

/// A single extracted form field of one template version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateField {
    /// Unique within one template version
    pub field_id: String,
    /// Opaque category tag, e.g. "text", "checkbox", "choice"
    pub field_type: String,
    /// Label text nearest the field. `Some("")` and `None` are distinct.
    #[serde(default)]
    pub near_text: Option<String>,
    /// Choices for selectable fields, `None` for fields without options
    #[serde(default)]
    pub value_options: Option<Vec<String>>,
    pub position: FieldRect,
    /// 1-indexed
    pub page_number: u32,
}

impl TemplateField {
    /// Create a field with no near text and no options
    pub fn new(
        field_id: impl Into<String>,
        field_type: impl Into<String>,
        position: FieldRect,
        page_number: u32,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            field_type: field_type.into(),
            near_text: None,
            value_options: None,
            position,
            page_number,
        }
    }

    pub fn with_near_text(mut self, near_text: impl Into<String>) -> Self {
        self.near_text = Some(near_text.into());
        self
    }

    pub fn with_value_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// True if the field carries a selectable option list (possibly empty)
    pub fn is_selectable(&self) -> bool {
        self.value_options.is_some()
    }
}
