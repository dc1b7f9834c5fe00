//! Near-text equivalence policies and position tolerance
//!
//! The defaults (`ExactText`, zero epsilon) give strict equality. The other
//! policies exist for callers who want to ignore cosmetic label edits or
//! sub-pixel drift after a template is re-rendered.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use shared_types::FieldRect;

use crate::error::ConfigError;

/// Decides whether two near-text values count as the same label
pub trait NearTextPolicy: Send + Sync + fmt::Debug {
    /// Short identifier used in logs and config
    fn name(&self) -> &'static str;

    /// Canonical form of a present near-text value
    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Absent and present values never match, whatever the normalization.
    fn equivalent(&self, source: Option<&str>, target: Option<&str>) -> bool {
        match (source, target) {
            (None, None) => true,
            (Some(a), Some(b)) => self.normalize(a) == self.normalize(b),
            _ => false,
        }
    }
}

/// Byte-for-byte comparison, whitespace included
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactText;

impl NearTextPolicy for ExactText {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Trims and collapses runs of whitespace into a single space
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapseWhitespace;

impl NearTextPolicy for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        collapse_whitespace(text)
    }
}

/// Unicode lowercase comparison
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreCase;

impl NearTextPolicy for IgnoreCase {
    fn name(&self) -> &'static str {
        "ignore_case"
    }

    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(text.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CollapseWhitespaceIgnoreCase;

impl NearTextPolicy for CollapseWhitespaceIgnoreCase {
    fn name(&self) -> &'static str {
        "collapse_whitespace_ignore_case"
    }

    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(collapse_whitespace(text).to_lowercase())
    }
}

fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    let already_collapsed = !text.starts_with(char::is_whitespace)
        && !text.ends_with(char::is_whitespace)
        && text
            .split(' ')
            .all(|word| !word.is_empty() && !word.contains(char::is_whitespace));

    if already_collapsed || text.is_empty() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

/// Named policies selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NearTextNormalization {
    #[default]
    Exact,
    CollapseWhitespace,
    IgnoreCase,
    CollapseWhitespaceIgnoreCase,
}

impl NearTextNormalization {
    pub fn policy(self) -> Arc<dyn NearTextPolicy> {
        match self {
            NearTextNormalization::Exact => Arc::new(ExactText),
            NearTextNormalization::CollapseWhitespace => Arc::new(CollapseWhitespace),
            NearTextNormalization::IgnoreCase => Arc::new(IgnoreCase),
            NearTextNormalization::CollapseWhitespaceIgnoreCase => {
                Arc::new(CollapseWhitespaceIgnoreCase)
            }
        }
    }
}

impl FromStr for NearTextNormalization {
    type Err = ConfigError;

    /// Accepts exactly the names the TOML config accepts
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let deserializer: StrDeserializer<'_, serde::de::value::Error> = s.into_deserializer();
        NearTextNormalization::deserialize(deserializer)
            .map_err(|_| ConfigError::UnknownNormalization(s.to_string()))
    }
}

/// Maximum per-bound difference still treated as the same position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionTolerance {
    epsilon: f64,
}

impl PositionTolerance {
    /// Exact bound equality
    pub const EXACT: PositionTolerance = PositionTolerance { epsilon: 0.0 };

    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        Ok(Self { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Bit-identical bounds are always equal, so a NaN bound matches itself
    /// the same way the field fingerprint treats it.
    pub fn bounds_equal(&self, a: f64, b: f64) -> bool {
        a.to_bits() == b.to_bits() || a == b || (a - b).abs() <= self.epsilon
    }

    pub fn rects_equal(&self, a: &FieldRect, b: &FieldRect) -> bool {
        a.bounds()
            .iter()
            .zip(b.bounds().iter())
            .all(|(x, y)| self.bounds_equal(*x, *y))
    }
}
