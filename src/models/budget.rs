//! Budget breakdown and the estimate returned to callers

use serde::{Deserialize, Serialize};

use crate::destination::{MatchKind, Region};
use crate::models::{TravelMode, TravelStyle};

/// Itemized trip cost, whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BudgetBreakdown {
    pub travel: u64,
    /// Accommodation
    pub stay: u64,
    pub food: u64,
    pub activities: u64,
    pub local_transport: u64,
    pub miscellaneous: u64,
}

impl BudgetBreakdown {
    /// Sum of every line
    #[must_use]
    pub fn total(&self) -> u64 {
        self.travel
            + self.stay
            + self.food
            + self.activities
            + self.local_transport
            + self.miscellaneous
    }
}

/// The inputs as the estimator interpreted them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDetails {
    pub destination: String,
    /// Destination table key used, absent when the default profile applied
    pub matched_destination: Option<String>,
    #[serde(rename = "match")]
    pub match_kind: MatchKind,
    pub region: Region,
    pub destination_multiplier: f64,
    /// Style applied, after the mid-range fallback
    pub travel_style: TravelStyle,
    /// Mode whose fare was applied, after the flight fallback
    pub travel_mode: TravelMode,
    pub people: u32,
    pub days: u32,
}

/// A complete budget estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub budget: BudgetBreakdown,
    pub total: u64,
    pub currency: String,
    pub details: EstimateDetails,
}
