//! Ports Layer
//!
//! Defines the driving port through which a request layer (HTTP, IPC, a
//! test harness) talks to the shared filter.

pub mod inbound;

pub use inbound::{CheckOutcome, MembershipFilterApi};
