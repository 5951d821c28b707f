//! Budget aggregation
//!
//! Combines the destination profile, style multipliers and daily base rates
//! into the six cost lines. Each line is rounded on its own; miscellaneous is
//! a contingency share of the already rounded travel, stay, food and
//! activities lines.

use tracing::{debug, instrument};

use super::rates::{CURRENCY, RateCard, STANDARD_RATES};
use super::{round_amount, travel_cost};
use crate::Result;
use crate::models::{BudgetBreakdown, BudgetEstimate, EstimateDetails, TravelMode, TravelStyle, TripRequest};

/// Prices trips against a rate card
#[derive(Debug, Clone, Copy)]
pub struct BudgetEstimator<'a> {
    rates: &'a RateCard,
}

impl BudgetEstimator<'static> {
    /// Estimator over the built-in rate card
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&STANDARD_RATES)
    }
}

impl<'a> BudgetEstimator<'a> {
    #[must_use]
    pub fn new(rates: &'a RateCard) -> Self {
        Self { rates }
    }

    /// Estimate the budget of a validated trip
    #[instrument(skip(self, trip), fields(destination = %trip.destination, people = trip.people, days = trip.days))]
    pub fn estimate(&self, trip: &TripRequest) -> Result<BudgetEstimate> {
        let resolution = self.rates.destinations.resolve(&trip.destination);
        let profile = resolution.profile;
        let style = trip.style();
        let mode = trip.mode();
        let multipliers = self.rates.styles.multipliers(style);
        let daily = &self.rates.daily;

        let people = f64::from(trip.people);
        let days = f64::from(trip.days);
        let destination = profile.multiplier;

        let travel = travel_cost(&self.rates.fares, profile.region, mode, trip.people, destination)?;
        let stay = round_amount(
            "Stay",
            daily.accommodation
                * days
                * group_factor(trip.people, daily.group_discount)
                * destination
                * multipliers.accommodation,
        )?;
        let food = round_amount(
            "Food",
            daily.food * days * people * destination * multipliers.food,
        )?;
        let activities = round_amount(
            "Activities",
            daily.activities * days * people * destination * multipliers.activities,
        )?;
        let local_transport = round_amount(
            "LocalTransport",
            daily.local_transport * days * people * destination,
        )?;
        let miscellaneous = round_amount(
            "Miscellaneous",
            daily.contingency * (travel + stay + food + activities) as f64,
        )?;

        let budget = BudgetBreakdown {
            travel,
            stay,
            food,
            activities,
            local_transport,
            miscellaneous,
        };
        debug!("Computed breakdown: {:?}", budget);

        Ok(BudgetEstimate {
            total: budget.total(),
            budget,
            currency: CURRENCY.to_string(),
            details: EstimateDetails {
                destination: trip.destination.clone(),
                matched_destination: resolution.matched.map(str::to_string),
                match_kind: resolution.kind,
                region: profile.region,
                destination_multiplier: profile.multiplier,
                travel_style: style.unwrap_or(TravelStyle::MidRange),
                travel_mode: self
                    .rates
                    .fares
                    .lookup(profile.region, mode)
                    .map_or(TravelMode::Flight, |(applied, _)| applied),
                people: trip.people,
                days: trip.days,
            },
        })
    }
}

/// Accommodation headcount: groups share rooms, solo travelers don't
#[must_use]
pub fn group_factor(people: u32, discount: f64) -> f64 {
    if people > 1 {
        f64::from(people) * discount
    } else {
        f64::from(people)
    }
}
