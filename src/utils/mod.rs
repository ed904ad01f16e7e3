//! Utility functions for request processing.

pub mod request_fields;
