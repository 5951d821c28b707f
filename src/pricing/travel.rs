//! Travel cost: getting the whole group to the destination and back

use tracing::debug;

use super::rates::FareTable;
use super::round_amount;
use crate::destination::Region;
use crate::models::TravelMode;
use crate::{Result, TripBudgetError};

/// `round(base fare × people × destination multiplier)`
///
/// The fare comes from [`FareTable::base_fare`], so unknown regions and modes
/// fall back to the domestic row and the flight fare.
pub fn travel_cost(
    fares: &FareTable,
    region: Region,
    mode: Option<TravelMode>,
    people: u32,
    destination_multiplier: f64,
) -> Result<u64> {
    let base_fare = fares.base_fare(region, mode).ok_or_else(|| {
        TripBudgetError::calculation(format!(
            "No base fare for region '{region}' and no domestic or flight fallback"
        ))
    })?;

    debug!(
        "Base fare {} for region {} (requested mode: {:?})",
        base_fare, region, mode
    );

    round_amount(
        "Travel",
        f64::from(base_fare) * f64::from(people) * destination_multiplier,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::STANDARD_RATES;

    #[test]
    fn test_domestic_flight_for_two() {
        let cost = travel_cost(&STANDARD_RATES.fares, Region::Domestic, Some(TravelMode::Flight), 2, 1.0);
        assert_eq!(cost.unwrap(), 16000);
    }

    #[test]
    fn test_multiplier_and_rounding() {
        // 2500 × 3 × 0.85 = 6375
        let cost = travel_cost(&STANDARD_RATES.fares, Region::Domestic, Some(TravelMode::Train), 3, 0.85);
        assert_eq!(cost.unwrap(), 6375);

        // 1500 × 1 × 0.7 = 1050
        let cost = travel_cost(&STANDARD_RATES.fares, Region::Domestic, Some(TravelMode::Bus), 1, 0.7);
        assert_eq!(cost.unwrap(), 1050);
    }

    #[test]
    fn test_unrecognized_mode_prices_as_flight() {
        let flight = travel_cost(&STANDARD_RATES.fares, Region::Europe, Some(TravelMode::Flight), 2, 3.0).unwrap();
        let unknown = travel_cost(&STANDARD_RATES.fares, Region::Europe, None, 2, 3.0).unwrap();
        assert_eq!(unknown, flight);
        assert_eq!(unknown, 330_000);
    }

    #[test]
    fn test_empty_fare_table_is_an_error() {
        let err = travel_cost(&FareTable::new(), Region::Domestic, None, 1, 1.0).unwrap_err();
        assert!(matches!(err, TripBudgetError::Calculation { .. }));
    }
}
