//! Comparison configuration
//!
//! Options can come from a TOML file, a TOML string or environment
//! variables. Every setting defaults to strict comparison.
//!
//! ```toml
//! [near_text]
//! normalization = "collapse_whitespace"
//!
//! [position]
//! epsilon = 0.5
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::policy::{NearTextNormalization, NearTextPolicy, PositionTolerance};

pub const ENV_NEAR_TEXT: &str = "TEMPLATE_DIFF_NEAR_TEXT";
pub const ENV_POSITION_EPSILON: &str = "TEMPLATE_DIFF_POSITION_EPSILON";

/// Serializable comparison settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareConfig {
    #[serde(default)]
    pub near_text: NearTextConfig,
    #[serde(default)]
    pub position: PositionConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearTextConfig {
    #[serde(default)]
    pub normalization: NearTextNormalization,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionConfig {
    /// Per-bound tolerance in page units, 0 means exact
    #[serde(default)]
    pub epsilon: f64,
}

impl CompareConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: CompareConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `TEMPLATE_DIFF_NEAR_TEXT` and
    /// `TEMPLATE_DIFF_POSITION_EPSILON` when set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CompareConfig::default();

        if let Some(normalization) = var(ENV_NEAR_TEXT) {
            config.near_text.normalization = normalization.parse()?;
        }
        if let Some(epsilon) = var(ENV_POSITION_EPSILON) {
            config.position.epsilon = epsilon
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    key: ENV_POSITION_EPSILON,
                    value: epsilon.clone(),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        PositionTolerance::new(self.position.epsilon)?;
        Ok(())
    }
}

/// Runtime options used by a `Comparator`
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub near_text: Arc<dyn NearTextPolicy>,
    pub position_tolerance: PositionTolerance,
}

impl CompareOptions {
    pub fn with_near_text<P: NearTextPolicy + 'static>(mut self, policy: P) -> Self {
        self.near_text = Arc::new(policy);
        self
    }

    pub fn with_position_tolerance(mut self, tolerance: PositionTolerance) -> Self {
        self.position_tolerance = tolerance;
        self
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            near_text: NearTextNormalization::Exact.policy(),
            position_tolerance: PositionTolerance::EXACT,
        }
    }
}

impl TryFrom<&CompareConfig> for CompareOptions {
    type Error = ConfigError;

    fn try_from(config: &CompareConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            near_text: config.near_text.normalization.policy(),
            position_tolerance: PositionTolerance::new(config.position.epsilon)?,
        })
    }
}
