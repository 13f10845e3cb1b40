//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - The Bloom filter engine
//! - Hash functions
//! - Parameter calculations
//! - Snapshots
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No locks; sharing is the service layer's job

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;
pub mod snapshot;

pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
pub use snapshot::FilterSnapshot;
