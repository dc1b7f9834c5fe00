//! Template field comparison engine
//!
//! Compares the extracted fields of two versions of a PDF form template and
//! reports, per field id, whether the field was added, removed, modified or
//! left unchanged, together with aggregate change metrics.
//!
//! ```
//! use shared_types::{FieldRect, TemplateField};
//! use template_diff::{compare, FieldStatus};
//!
//! let v1 = vec![TemplateField::new("name", "text", FieldRect::new(0.0, 0.0, 10.0, 10.0), 1)
//!     .with_near_text("Name")];
//! let v2 = vec![TemplateField::new("name", "text", FieldRect::new(0.0, 0.0, 10.0, 10.0), 1)
//!     .with_near_text("Full Name")];
//!
//! let result = compare(&v1, &v2).unwrap();
//! assert_eq!(result.field_changes[0].status, FieldStatus::Modified);
//! assert_eq!(result.global_metrics.modification_percentage, 100.0);
//! ```
//!
//! The engine is a pure function of its inputs. Callers wanting memoization
//! use [`CachedComparator`], which wraps a [`Comparator`] from outside.

pub mod cache;
pub mod change;
pub mod classifier;
pub mod comparator;
pub mod config;
pub mod differ;
pub mod error;
pub mod index;
pub mod matcher;
pub mod metrics;
pub mod policy;
pub mod result;

pub use cache::{CacheStats, CachedComparator};
pub use change::{DiffVerdict, FieldChange, FieldStatus};
pub use comparator::{compare, Comparator};
pub use config::{CompareConfig, CompareOptions};
pub use error::{CompareError, ConfigError, Side};
pub use metrics::GlobalMetrics;
pub use policy::{
    CollapseWhitespace, CollapseWhitespaceIgnoreCase, ExactText, IgnoreCase,
    NearTextNormalization, NearTextPolicy, PositionTolerance,
};
pub use result::ComparisonResult;
