//! Shared building blocks for the material price catalog services.
//!
//! - [`config`]: environment-driven service configuration
//! - [`errors`]: load-time and request-time error types
//! - [`extract`]: validated query-string extractor
//! - [`middleware`]: request ID propagation
//! - [`models`]: price records and request parameter models
//! - [`response`]: response body types

pub mod config;
pub mod errors;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod response;
