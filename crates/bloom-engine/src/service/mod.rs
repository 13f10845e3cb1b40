//! Service Layer
//!
//! Owns the process-wide filter and serializes access to it.

pub mod filter_service;

pub use filter_service::FilterService;
