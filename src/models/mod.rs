//! Data models for the trip budget service
//!
//! - Trip: the validated request and its style / mode vocabularies
//! - Budget: the itemized breakdown and the full estimate

pub mod budget;
pub mod trip;

// Re-export all public types for convenient access
pub use budget::{BudgetBreakdown, BudgetEstimate, EstimateDetails};
pub use trip::{TravelMode, TravelStyle, TripRequest};
