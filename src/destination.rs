//! Destination Resolution Module
//!
//! Maps free-text destinations onto a cost profile (multiplier and region).
//! Lookup is exact first, then the first table entry that overlaps the input
//! as a substring in either direction, then a fixed default. Resolution never
//! fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Geographic pricing tier of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Domestic,
    SouthAsia,
    SoutheastAsia,
    EastAsia,
    MiddleEast,
    Europe,
    Americas,
    Africa,
    Oceania,
    International,
}

impl Region {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Domestic => "domestic",
            Region::SouthAsia => "south_asia",
            Region::SoutheastAsia => "southeast_asia",
            Region::EastAsia => "east_asia",
            Region::MiddleEast => "middle_east",
            Region::Europe => "europe",
            Region::Americas => "americas",
            Region::Africa => "africa",
            Region::Oceania => "oceania",
            Region::International => "international",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost multiplier and region of a destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DestinationProfile {
    pub multiplier: f64,
    pub region: Region,
}

impl DestinationProfile {
    #[must_use]
    pub const fn new(multiplier: f64, region: Region) -> Self {
        Self { multiplier, region }
    }
}

/// Profile used when nothing in the table matches
pub const DEFAULT_PROFILE: DestinationProfile = DestinationProfile::new(1.5, Region::International);

/// How a destination was matched against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Partial,
    Default,
}

/// Outcome of resolving one destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub profile: DestinationProfile,
    /// Table key that produced the profile, `None` for the default
    pub matched: Option<&'a str>,
    pub kind: MatchKind,
}

// Canonical order. Partial matching scans in this order, so moving entries
// changes which profile ambiguous inputs get.
const STANDARD_DESTINATIONS: &[(&str, f64, Region)] = &[
    ("goa", 1.0, Region::Domestic),
    ("kerala", 0.9, Region::Domestic),
    ("manali", 0.85, Region::Domestic),
    ("shimla", 0.85, Region::Domestic),
    ("jaipur", 0.8, Region::Domestic),
    ("udaipur", 0.9, Region::Domestic),
    ("delhi", 1.0, Region::Domestic),
    ("mumbai", 1.2, Region::Domestic),
    ("bangalore", 1.1, Region::Domestic),
    ("rishikesh", 0.7, Region::Domestic),
    ("ladakh", 1.3, Region::Domestic),
    ("andaman", 1.4, Region::Domestic),
    ("darjeeling", 0.85, Region::Domestic),
    ("varanasi", 0.7, Region::Domestic),
    ("agra", 0.75, Region::Domestic),
    ("ooty", 0.8, Region::Domestic),
    ("pondicherry", 0.9, Region::Domestic),
    ("kashmir", 1.1, Region::Domestic),
    ("india", 1.0, Region::Domestic),
    ("nepal", 0.7, Region::SouthAsia),
    ("kathmandu", 0.7, Region::SouthAsia),
    ("bhutan", 1.3, Region::SouthAsia),
    ("sri lanka", 0.9, Region::SouthAsia),
    ("maldives", 2.5, Region::SouthAsia),
    ("bangladesh", 0.7, Region::SouthAsia),
    ("thailand", 1.1, Region::SoutheastAsia),
    ("bangkok", 1.1, Region::SoutheastAsia),
    ("phuket", 1.2, Region::SoutheastAsia),
    ("bali", 1.2, Region::SoutheastAsia),
    ("indonesia", 1.1, Region::SoutheastAsia),
    ("vietnam", 0.9, Region::SoutheastAsia),
    ("singapore", 2.0, Region::SoutheastAsia),
    ("malaysia", 1.2, Region::SoutheastAsia),
    ("kuala lumpur", 1.2, Region::SoutheastAsia),
    ("cambodia", 0.8, Region::SoutheastAsia),
    ("philippines", 1.0, Region::SoutheastAsia),
    ("japan", 2.5, Region::EastAsia),
    ("tokyo", 2.6, Region::EastAsia),
    ("south korea", 2.0, Region::EastAsia),
    ("seoul", 2.0, Region::EastAsia),
    ("china", 1.6, Region::EastAsia),
    ("hong kong", 2.2, Region::EastAsia),
    ("dubai", 2.2, Region::MiddleEast),
    ("uae", 2.2, Region::MiddleEast),
    ("abu dhabi", 2.1, Region::MiddleEast),
    ("qatar", 2.0, Region::MiddleEast),
    ("oman", 1.6, Region::MiddleEast),
    ("turkey", 1.5, Region::MiddleEast),
    ("istanbul", 1.5, Region::MiddleEast),
    ("paris", 3.0, Region::Europe),
    ("france", 2.8, Region::Europe),
    ("london", 3.2, Region::Europe),
    ("united kingdom", 3.0, Region::Europe),
    ("switzerland", 3.5, Region::Europe),
    ("italy", 2.7, Region::Europe),
    ("rome", 2.8, Region::Europe),
    ("spain", 2.4, Region::Europe),
    ("germany", 2.6, Region::Europe),
    ("amsterdam", 3.0, Region::Europe),
    ("greece", 2.2, Region::Europe),
    ("europe", 2.8, Region::Europe),
    ("new york", 3.5, Region::Americas),
    ("usa", 3.2, Region::Americas),
    ("united states", 3.2, Region::Americas),
    ("canada", 3.0, Region::Americas),
    ("mexico", 1.8, Region::Americas),
    ("brazil", 1.8, Region::Americas),
    ("peru", 1.6, Region::Americas),
    ("kenya", 1.8, Region::Africa),
    ("south africa", 2.0, Region::Africa),
    ("egypt", 1.4, Region::Africa),
    ("morocco", 1.5, Region::Africa),
    ("tanzania", 1.9, Region::Africa),
    ("mauritius", 2.0, Region::Africa),
    ("australia", 3.0, Region::Oceania),
    ("sydney", 3.1, Region::Oceania),
    ("new zealand", 3.0, Region::Oceania),
    ("fiji", 2.5, Region::Oceania),
];

/// Ordered destination lookup table
#[derive(Debug, Clone)]
pub struct DestinationTable {
    entries: Vec<(String, DestinationProfile)>,
    fallback: DestinationProfile,
}

impl DestinationTable {
    /// Build a table from `(key, profile)` pairs, keeping their order.
    /// Keys are normalized the same way inputs are.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, DestinationProfile)>,
        K: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, profile)| (normalize(key.as_ref()), profile))
                .collect(),
            fallback: DEFAULT_PROFILE,
        }
    }

    /// The built-in destination table
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            STANDARD_DESTINATIONS
                .iter()
                .map(|&(key, multiplier, region)| (key, DestinationProfile::new(multiplier, region))),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a raw destination into a profile
    #[must_use]
    pub fn resolve(&self, destination: &str) -> Resolution<'_> {
        let needle = normalize(destination);

        let found = if needle.is_empty() {
            None
        } else {
            self.exact(&needle).or_else(|| self.partial(&needle))
        };
        let resolution = found.unwrap_or(Resolution {
            profile: self.fallback,
            matched: None,
            kind: MatchKind::Default,
        });

        debug!(
            "Resolved destination '{}' as {:?} (key: {:?}, region: {}, multiplier: {})",
            destination,
            resolution.kind,
            resolution.matched,
            resolution.profile.region,
            resolution.profile.multiplier
        );

        resolution
    }

    fn exact(&self, needle: &str) -> Option<Resolution<'_>> {
        self.entries
            .iter()
            .find(|(key, _)| key == needle)
            .map(|(key, profile)| Resolution {
                profile: *profile,
                matched: Some(key.as_str()),
                kind: MatchKind::Exact,
            })
    }

    fn partial(&self, needle: &str) -> Option<Resolution<'_>> {
        self.entries
            .iter()
            .find(|(key, _)| needle.contains(key.as_str()) || key.contains(needle))
            .map(|(key, profile)| Resolution {
                profile: *profile,
                matched: Some(key.as_str()),
                kind: MatchKind::Partial,
            })
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
