//! Request middleware.

pub mod request_trace;

pub use request_trace::{TRACE_ID_HEADER, trace_requests};
