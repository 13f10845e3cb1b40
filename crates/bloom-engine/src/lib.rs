//! # Bloom Engine
//!
//! Probabilistic set membership over text items: a fixed-size bit array and
//! a family of seeded hash rounds. Zero false negatives, tunable false
//! positive rate, insert-only.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O, no locks
//!   - `BloomFilter`: the filter engine
//!   - `FilterSnapshot`: serializable state, JSON and binary codecs
//!   - `FilterConfig`: construction parameters with validation
//!
//! - **Ports Layer** (`ports/`): `MembershipFilterApi` driving port
//!
//! - **Service Layer** (`service/`): `FilterService` owns the shared filter
//!   behind one mutex
//!
//! - **Events Layer** (`events/`): request parameters and response shapes
//!
//! - **Handler Layer** (`handler/`): `FilterRequestHandler`, the transport
//!   independent add / check / clear / stats contract
//!
//! ## Invariants
//!
//! - FPR estimate = (1 - e^(-kn/m))^k, where n counts `add` calls
//! - No false negatives: if added, `might_contain()` MUST return true
//!
//! ## Usage Example
//!
//! ```
//! use bloom_engine::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 0.01, false)?;
//! assert_eq!(filter.size_bits(), 9586);
//! assert_eq!(filter.hash_count(), 7);
//!
//! filter.add("alpha");
//! assert!(filter.might_contain("alpha"));
//! # Ok::<(), bloom_engine::FilterError>(())
//! ```
//!
//! ## Wiring a shared filter
//!
//! ```
//! use bloom_engine::{FilterConfig, FilterRequestHandler, FilterRoute, FilterService};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let service = Arc::new(FilterService::new(&FilterConfig::from_env())?);
//! let handler = FilterRequestHandler::new(service);
//!
//! let reply = handler.handle(FilterRoute::Add, &json!({ "item": "alpha" }));
//! assert_eq!(reply.status.http_code(), 200);
//! # Ok::<(), bloom_engine::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod events;
pub mod handler;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod telemetry;

// Re-exports for convenience
pub use domain::{BloomFilter, FilterConfig, FilterConfigBuilder, FilterSnapshot};
pub use error::{FilterError, ReplyStatus, RequestError};
pub use events::{FilterRoute, FilterStats};
pub use handler::{FilterReply, FilterRequestHandler};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{CheckOutcome, MembershipFilterApi};
pub use service::FilterService;
pub use telemetry::{init_tracing, LogConfig, TelemetryError};
