//! HTTP middleware for request processing.
//!
//! Provides the registration token gate and request tracing.

pub mod auth;
pub mod tracing;
