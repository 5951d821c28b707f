//! Static rate card: regional base fares, style multipliers and daily base rates

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::destination::{DestinationTable, Region};
use crate::models::{TravelMode, TravelStyle};

/// Rate card shared by every request, built once on first use
pub static STANDARD_RATES: LazyLock<RateCard> = LazyLock::new(RateCard::standard);

/// Currency label attached to every estimate
pub const CURRENCY: &str = "INR";

/// Flat per-region fares for each travel mode
#[derive(Debug, Clone, Default)]
pub struct FareTable {
    fares: HashMap<Region, HashMap<TravelMode, u32>>,
}

impl FareTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the fare row of a region
    #[must_use]
    pub fn with_region(mut self, region: Region, row: &[(TravelMode, u32)]) -> Self {
        self.fares.insert(region, row.iter().copied().collect());
        self
    }

    /// Base fare for a region and mode.
    ///
    /// Unknown regions use the domestic row; modes missing from the row (or
    /// `None`) use the row's flight fare. `None` only when that chain is empty.
    #[must_use]
    pub fn base_fare(&self, region: Region, mode: Option<TravelMode>) -> Option<u32> {
        self.lookup(region, mode).map(|(_, fare)| fare)
    }

    /// Like [`FareTable::base_fare`], also reporting which mode's fare applied
    #[must_use]
    pub fn lookup(&self, region: Region, mode: Option<TravelMode>) -> Option<(TravelMode, u32)> {
        let row = self
            .fares
            .get(&region)
            .or_else(|| self.fares.get(&Region::Domestic))?;

        mode.and_then(|mode| row.get(&mode).map(|fare| (mode, *fare)))
            .or_else(|| row.get(&TravelMode::Flight).map(|fare| (TravelMode::Flight, *fare)))
    }

    fn standard() -> Self {
        use TravelMode::{Bus, Car, Flight, Train};

        Self::new()
            .with_region(
                Region::Domestic,
                &[(Flight, 8000), (Train, 2500), (Bus, 1500), (Car, 4000)],
            )
            .with_region(
                Region::SouthAsia,
                &[(Flight, 15000), (Train, 6000), (Bus, 4000), (Car, 8000)],
            )
            .with_region(Region::SoutheastAsia, &[(Flight, 22000)])
            .with_region(Region::EastAsia, &[(Flight, 35000)])
            .with_region(Region::MiddleEast, &[(Flight, 20000)])
            .with_region(Region::Europe, &[(Flight, 55000)])
            .with_region(Region::Americas, &[(Flight, 80000)])
            .with_region(Region::Africa, &[(Flight, 60000)])
            .with_region(Region::Oceania, &[(Flight, 75000)])
            .with_region(Region::International, &[(Flight, 50000)])
    }
}

/// Scaling of the style-dependent cost lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleMultipliers {
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
}

/// Multipliers for every travel style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleTable {
    pub budget: StyleMultipliers,
    pub mid_range: StyleMultipliers,
    pub luxury: StyleMultipliers,
}

impl StyleTable {
    /// Multipliers for a style; unrecognized styles get mid-range
    #[must_use]
    pub fn multipliers(&self, style: Option<TravelStyle>) -> StyleMultipliers {
        match style {
            Some(TravelStyle::Budget) => self.budget,
            Some(TravelStyle::Luxury) => self.luxury,
            Some(TravelStyle::MidRange) | None => self.mid_range,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            budget: StyleMultipliers {
                accommodation: 0.6,
                food: 0.7,
                activities: 0.5,
            },
            mid_range: StyleMultipliers {
                accommodation: 1.0,
                food: 1.0,
                activities: 1.0,
            },
            luxury: StyleMultipliers {
                accommodation: 2.5,
                food: 2.0,
                activities: 2.0,
            },
        }
    }
}

/// Per-person-per-day base rates and the flat adjustment factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRates {
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
    pub local_transport: f64,
    /// Share of travel, stay, food and activities added as miscellaneous
    pub contingency: f64,
    /// Per-person accommodation factor for groups larger than one
    pub group_discount: f64,
}

impl Default for DailyRates {
    fn default() -> Self {
        Self {
            accommodation: 2500.0,
            food: 1200.0,
            activities: 800.0,
            local_transport: 400.0,
            contingency: 0.15,
            group_discount: 0.8,
        }
    }
}

/// Everything the estimator needs to price a trip
#[derive(Debug, Clone)]
pub struct RateCard {
    pub destinations: DestinationTable,
    pub fares: FareTable,
    pub styles: StyleTable,
    pub daily: DailyRates,
}

impl RateCard {
    /// The built-in rate card
    #[must_use]
    pub fn standard() -> Self {
        Self {
            destinations: DestinationTable::standard(),
            fares: FareTable::standard(),
            styles: StyleTable::default(),
            daily: DailyRates::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_region_and_mode() {
        let fares = FareTable::standard();
        assert_eq!(fares.base_fare(Region::Domestic, Some(TravelMode::Flight)), Some(8000));
        assert_eq!(fares.base_fare(Region::Domestic, Some(TravelMode::Train)), Some(2500));
        assert_eq!(fares.base_fare(Region::SouthAsia, Some(TravelMode::Bus)), Some(4000));
    }

    #[test]
    fn test_unknown_mode_uses_flight_fare() {
        let fares = FareTable::standard();
        assert_eq!(fares.base_fare(Region::Europe, None), Some(55000));
        assert_eq!(fares.base_fare(Region::Domestic, None), Some(8000));
    }

    #[test]
    fn test_mode_missing_from_row_uses_flight_fare() {
        let fares = FareTable::standard();
        assert_eq!(fares.base_fare(Region::Oceania, Some(TravelMode::Car)), Some(75000));
    }

    #[test]
    fn test_lookup_reports_applied_mode() {
        let fares = FareTable::standard();
        assert_eq!(
            fares.lookup(Region::SouthAsia, Some(TravelMode::Train)),
            Some((TravelMode::Train, 6000))
        );
        assert_eq!(
            fares.lookup(Region::Europe, Some(TravelMode::Train)),
            Some((TravelMode::Flight, 55000))
        );
    }

    #[test]
    fn test_missing_region_uses_domestic_row() {
        let fares = FareTable::new()
            .with_region(Region::Domestic, &[(TravelMode::Flight, 100), (TravelMode::Bus, 10)]);
        assert_eq!(fares.base_fare(Region::Africa, Some(TravelMode::Bus)), Some(10));
        assert_eq!(fares.base_fare(Region::Africa, Some(TravelMode::Train)), Some(100));
    }

    #[test]
    fn test_empty_table_has_no_fare() {
        let fares = FareTable::new();
        assert_eq!(fares.base_fare(Region::Domestic, Some(TravelMode::Flight)), None);

        let no_flight = FareTable::new().with_region(Region::Domestic, &[(TravelMode::Bus, 10)]);
        assert_eq!(no_flight.base_fare(Region::Domestic, Some(TravelMode::Car)), None);
    }

    #[test]
    fn test_every_region_has_a_flight_fare() {
        let fares = FareTable::standard();
        for region in [
            Region::Domestic,
            Region::SouthAsia,
            Region::SoutheastAsia,
            Region::EastAsia,
            Region::MiddleEast,
            Region::Europe,
            Region::Americas,
            Region::Africa,
            Region::Oceania,
            Region::International,
        ] {
            assert!(fares.base_fare(region, Some(TravelMode::Flight)).is_some(), "{region}");
        }
    }

    #[test]
    fn test_style_fallback_is_mid_range() {
        let styles = StyleTable::default();
        assert_eq!(styles.multipliers(None), styles.mid_range);
        assert_eq!(styles.multipliers(Some(TravelStyle::Budget)).accommodation, 0.6);
        assert_eq!(styles.multipliers(Some(TravelStyle::Luxury)).food, 2.0);
    }

    #[test]
    fn test_standard_rates_are_shared() {
        let first: *const RateCard = &*STANDARD_RATES;
        let second: *const RateCard = &*STANDARD_RATES;
        assert_eq!(first, second);
        assert_eq!(STANDARD_RATES.daily.contingency, 0.15);
    }
}
