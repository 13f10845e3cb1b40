//! Serializable filter state
//!
//! The JSON shape is shared with snapshots written by earlier deployments of
//! the service:
//!
//! ```json
//! {
//!   "bitArray": [0, 1, 0, ...],
//!   "expectedItems": 1000,
//!   "falsePositiveRate": 0.01,
//!   "caseInsensitive": false,
//!   "itemCount": 3,
//!   "hashFunctions": 7
//! }
//! ```
//!
//! `hashFunctions` is absent from legacy snapshots.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Full state of a filter, as produced by `BloomFilter::serialize`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSnapshot {
    /// One entry per bit, each 0 or 1
    pub bit_array: Vec<u8>,
    pub expected_items: usize,
    /// Target false positive rate the filter was built for
    pub false_positive_rate: f64,
    pub case_insensitive: bool,
    pub item_count: usize,
    /// Hash rounds of the originating filter
    #[serde(default)]
    pub hash_functions: Option<usize>,
}

impl FilterSnapshot {
    /// Check structural validity without touching any filter
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.bit_array.is_empty() {
            return Err(FilterError::InvalidInput(
                "snapshot bit array is empty".to_string(),
            ));
        }

        if let Some((index, value)) = self
            .bit_array
            .iter()
            .enumerate()
            .find(|&(_, &bit)| bit > 1)
        {
            return Err(FilterError::InvalidInput(format!(
                "snapshot bit {index} has non-bit value {value}"
            )));
        }

        if self.expected_items == 0 {
            return Err(FilterError::InvalidInput(
                "snapshot expectedItems must be > 0".to_string(),
            ));
        }

        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(FilterError::InvalidInput(format!(
                "snapshot falsePositiveRate {} is outside (0, 1)",
                self.false_positive_rate
            )));
        }

        if self.hash_functions == Some(0) {
            return Err(FilterError::InvalidInput(
                "snapshot hashFunctions must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Encode as JSON text
    pub fn to_json(&self) -> Result<String, FilterError> {
        serde_json::to_string(self).map_err(|e| FilterError::Serialization(e.to_string()))
    }

    /// Decode from JSON text
    ///
    /// Missing fields and wrongly typed values are reported as `InvalidInput`.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| FilterError::InvalidInput(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Decode from an already parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, FilterError> {
        let snapshot: Self =
            serde_json::from_value(value).map_err(|e| FilterError::InvalidInput(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode with bincode
    pub fn to_bytes(&self) -> Result<Vec<u8>, FilterError> {
        bincode::serialize(self).map_err(|e| FilterError::Serialization(e.to_string()))
    }

    /// Decode from bincode bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        let snapshot: Self =
            bincode::deserialize(bytes).map_err(|e| FilterError::Serialization(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
