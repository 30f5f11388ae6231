//! Shared data models for all microservices.

pub mod price;
pub mod query;

// Re-export commonly used types
pub use price::PriceRecord;
pub use query::{PredictQuery, VarietesQuery, YEAR_MAX, YEAR_MIN};
