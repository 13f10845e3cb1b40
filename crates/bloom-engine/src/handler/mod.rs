//! Handler Layer
//!
//! Transport-agnostic implementation of the request contract: validates
//! parameters, calls the filter port and shapes replies.

pub mod request_handler;

pub use request_handler::{FilterReply, FilterRequestHandler};
