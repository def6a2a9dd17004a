//! Helpers shared by the workflows and handlers.
//!
//! - [`slug_generator`] - Slug and token generation
//! - [`destination`] - Destination validation
//! - [`content_negotiation`] - JSON content negotiation header checks
//! - [`highlight`] - Optional colored log messages

pub mod content_negotiation;
pub mod destination;
pub mod highlight;
pub mod slug_generator;
