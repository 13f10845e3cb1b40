//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_engine::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_items(1000)
//!     .target_fpr(0.01)
//!     .case_insensitive(true)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.expected_items, 1000);
//! ```

use std::env;

use serde::{Deserialize, Serialize};

use super::parameters::validate_parameters;
use crate::error::FilterError;

/// Environment variable for the capacity hint
pub const ENV_EXPECTED_ITEMS: &str = "BLOOM_EXPECTED_ITEMS";
/// Environment variable for the target false positive rate
pub const ENV_FALSE_POSITIVE_RATE: &str = "BLOOM_FALSE_POSITIVE_RATE";
/// Environment variable for case-insensitive matching
pub const ENV_CASE_INSENSITIVE: &str = "BLOOM_CASE_INSENSITIVE";

/// Construction parameters of the process-wide filter
///
/// Read once at startup; not changeable at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Expected number of insertions
    pub expected_items: usize,
    /// Target false positive rate, in (0, 1)
    pub target_fpr: f64,
    /// Lower-case items before hashing
    pub case_insensitive: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_items: 10_000,
            target_fpr: 0.01,
            case_insensitive: false,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(
        expected_items: usize,
        target_fpr: f64,
        case_insensitive: bool,
    ) -> Result<Self, FilterError> {
        let config = Self {
            expected_items,
            target_fpr,
            case_insensitive,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate against the domain of the sizing formulas
    pub fn validate(&self) -> Result<(), FilterError> {
        validate_parameters(self.expected_items, self.target_fpr)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BLOOM_EXPECTED_ITEMS`: capacity hint (default: 10000)
    /// - `BLOOM_FALSE_POSITIVE_RATE`: target rate (default: 0.01)
    /// - `BLOOM_CASE_INSENSITIVE`: `true`/`1` to fold case (default: false)
    ///
    /// Unparsable values fall back to the default. Range checks are left to
    /// `validate()`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            expected_items: lookup(ENV_EXPECTED_ITEMS)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.expected_items),

            target_fpr: lookup(ENV_FALSE_POSITIVE_RATE)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.target_fpr),

            case_insensitive: lookup(ENV_CASE_INSENSITIVE)
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.case_insensitive),
        }
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
    case_insensitive: Option<bool>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity hint (must be > 0)
    pub fn expected_items(mut self, items: usize) -> Self {
        self.expected_items = Some(items);
        self
    }

    /// Set target false positive rate (must be in (0, 1))
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = Some(enabled);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        FilterConfig::new(
            self.expected_items.unwrap_or(defaults.expected_items),
            self.target_fpr.unwrap_or(defaults.target_fpr),
            self.case_insensitive.unwrap_or(defaults.case_insensitive),
        )
    }
}
