//! Trip request model and the travel style / travel mode vocabularies

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated trip request
///
/// Style and mode are kept as received (trimmed) so that unknown labels still
/// reach the estimator's fallbacks instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Free-text destination
    pub destination: String,
    /// Requested travel style label
    pub travel_style: String,
    /// Requested travel mode label
    pub travel_mode: String,
    /// Number of travelers, at least 1
    pub people: u32,
    /// Trip length in days, at least 1
    pub days: u32,
}

impl TripRequest {
    /// Parsed travel style, `None` for labels outside the vocabulary
    #[must_use]
    pub fn style(&self) -> Option<TravelStyle> {
        TravelStyle::from_label(&self.travel_style)
    }

    /// Parsed travel mode, `None` for labels outside the vocabulary
    #[must_use]
    pub fn mode(&self) -> Option<TravelMode> {
        TravelMode::from_label(&self.travel_mode)
    }
}

/// Traveler budget tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelStyle {
    #[serde(rename = "budget")]
    Budget,
    #[serde(rename = "mid-range")]
    MidRange,
    #[serde(rename = "luxury")]
    Luxury,
}

impl TravelStyle {
    /// Parse a style label, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "budget" => Some(Self::Budget),
            "mid-range" | "midrange" | "mid range" => Some(Self::MidRange),
            "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the travelers get to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Flight,
    Train,
    Bus,
    Car,
}

impl TravelMode {
    /// Parse a mode label, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "flight" => Some(Self::Flight),
            "train" => Some(Self::Train),
            "bus" => Some(Self::Bus),
            "car" => Some(Self::Car),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Car => "car",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
