pub mod fingerprint;
pub mod template;

pub use fingerprint::fingerprint_fields;
pub use template::{FieldRect, TemplateField};
