//! Outgoing response shapes
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::BloomFilter;

/// Statistics snapshot returned by every route
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    /// Number of `add` calls, duplicates included
    pub item_count: usize,
    pub false_positive_rate: f64,
    pub bit_array_size: usize,
    pub hash_functions: usize,
    pub expected_items: usize,
    pub configuration: FilterConfiguration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfiguration {
    pub case_insensitive: bool,
}

impl FilterStats {
    /// Capture statistics from live filter state
    pub fn from_filter(filter: &BloomFilter) -> Self {
        Self {
            item_count: filter.items_inserted(),
            false_positive_rate: filter.estimated_false_positive_rate(),
            bit_array_size: filter.size_bits(),
            hash_functions: filter.hash_count(),
            expected_items: filter.expected_items(),
            configuration: FilterConfiguration {
                case_insensitive: filter.is_case_insensitive(),
            },
        }
    }
}

/// Reply to a successful add
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddItemResponse {
    pub success: bool,
    pub message: String,
    pub stats: FilterStats,
}

/// Reply to a successful check
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItemResponse {
    pub exists: bool,
    pub false_positive_rate: f64,
    pub stats: FilterStats,
}

/// Reply to a clear
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
    pub stats: FilterStats,
}

/// Error reply
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Underlying failure message, present for server errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
