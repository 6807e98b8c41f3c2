//! Business logic
//!
//! Schema compilation, patch rules, the preparation plan, and the
//! sequential pipeline driver. Network and filesystem access go through
//! [`crate::infra`].

pub mod patch;
pub mod pipeline;
pub mod plan;
pub mod schema;
