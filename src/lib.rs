//! `trip-budget` - itemized trip cost estimates over HTTP
//!
//! This library provides destination resolution, the rate card and the
//! budget estimator, plus the axum service and configuration around them.

pub mod api;
pub mod cli;
pub mod config;
pub mod destination;
pub mod error;
pub mod models;
pub mod pricing;
pub mod telemetry;
pub mod validation;
pub mod web;

// Re-export core types for public API
pub use config::TripBudgetConfig;
pub use destination::{DestinationProfile, DestinationTable, MatchKind, Region};
pub use error::TripBudgetError;
pub use models::{BudgetBreakdown, BudgetEstimate, EstimateDetails, TravelMode, TravelStyle, TripRequest};
pub use pricing::{BudgetEstimator, RateCard};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripBudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
