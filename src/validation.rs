//! Request validation
//!
//! Strict policy: every field must be present and usable. Text fields must be
//! non-empty strings once trimmed. `people` and `days` accept JSON numbers or
//! numeric strings, are truncated toward zero and must land in `1..=u32::MAX`.
//! Nothing is defaulted.

use serde_json::Value;
use thiserror::Error;

use crate::TripBudgetError;
use crate::models::TripRequest;

/// Field names every estimate request must carry, in wire spelling
pub const REQUIRED_FIELDS: [&str; 5] = ["destination", "travelStyle", "travelMode", "people", "days"];

/// Fields that were absent, empty or unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required fields: {}", .missing.join(", "))]
pub struct MissingFields {
    pub missing: Vec<&'static str>,
}

impl From<MissingFields> for TripBudgetError {
    fn from(err: MissingFields) -> Self {
        TripBudgetError::validation(err.to_string())
    }
}

/// Validate a raw request payload into a [`TripRequest`]
pub fn validate(payload: &Value) -> Result<TripRequest, MissingFields> {
    let field = |name: &str| payload.get(name).unwrap_or(&Value::Null);

    let destination = text(field("destination"));
    let travel_style = text(field("travelStyle"));
    let travel_mode = text(field("travelMode"));
    let people = count(field("people"));
    let days = count(field("days"));

    match (destination, travel_style, travel_mode, people, days) {
        (Some(destination), Some(travel_style), Some(travel_mode), Some(people), Some(days)) => {
            Ok(TripRequest {
                destination,
                travel_style,
                travel_mode,
                people,
                days,
            })
        }
        (destination, travel_style, travel_mode, people, days) => {
            let present = [
                destination.is_some(),
                travel_style.is_some(),
                travel_mode.is_some(),
                people.is_some(),
                days.is_some(),
            ];
            let missing = REQUIRED_FIELDS
                .iter()
                .zip(present)
                .filter(|(_, ok)| !ok)
                .map(|(name, _)| *name)
                .collect();
            Err(MissingFields { missing })
        }
    }
}

fn text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn count(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() {
        return None;
    }
    let whole = number.trunc();
    if whole < 1.0 || whole > f64::from(u32::MAX) {
        return None;
    }
    Some(whole as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "destination": "Goa",
            "travelStyle": "Budget",
            "travelMode": "flight",
            "people": 2,
            "days": 3
        })
    }

    #[test]
    fn test_valid_payload() {
        let trip = validate(&valid()).unwrap();
        assert_eq!(
            trip,
            TripRequest {
                destination: "Goa".to_string(),
                travel_style: "Budget".to_string(),
                travel_mode: "flight".to_string(),
                people: 2,
                days: 3,
            }
        );
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let mut payload = valid();
        payload["destination"] = json!("  North Goa  ");
        assert_eq!(validate(&payload).unwrap().destination, "North Goa");
    }

    #[rstest]
    #[case(json!("4"), 4)]
    #[case(json!(" 4 "), 4)]
    #[case(json!(4.9), 4)]
    #[case(json!("2.5"), 2)]
    #[case(json!(1), 1)]
    fn test_numeric_coercion(#[case] people: Value, #[case] expected: u32) {
        let mut payload = valid();
        payload["people"] = people;
        assert_eq!(validate(&payload).unwrap().people, expected);
    }

    #[rstest]
    #[case(json!(0))]
    #[case(json!(-3))]
    #[case(json!(0.5))]
    #[case(json!("many"))]
    #[case(json!(""))]
    #[case(json!(null))]
    #[case(json!(true))]
    #[case(json!([2]))]
    #[case(json!(1e12))]
    fn test_unusable_days_rejected(#[case] days: Value) {
        let mut payload = valid();
        payload["days"] = days;
        assert_eq!(
            validate(&payload).unwrap_err(),
            MissingFields {
                missing: vec!["days"]
            }
        );
    }

    #[rstest]
    #[case("destination")]
    #[case("travelStyle")]
    #[case("travelMode")]
    #[case("people")]
    #[case("days")]
    fn test_each_missing_field_reported(#[case] field: &'static str) {
        let mut payload = valid();
        payload.as_object_mut().unwrap().remove(field);
        assert_eq!(validate(&payload).unwrap_err().missing, vec![field]);
    }

    #[test]
    fn test_blank_and_non_string_text_rejected() {
        let mut payload = valid();
        payload["destination"] = json!("   ");
        payload["travelMode"] = json!(42);
        assert_eq!(
            validate(&payload).unwrap_err().missing,
            vec!["destination", "travelMode"]
        );
    }

    #[test]
    fn test_empty_and_non_object_payloads_list_everything() {
        for payload in [json!({}), json!([]), json!("Goa"), Value::Null] {
            assert_eq!(validate(&payload).unwrap_err().missing, REQUIRED_FIELDS.to_vec());
        }
    }

    #[test]
    fn test_error_message_and_conversion() {
        let err = validate(&json!({"destination": "Goa"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: travelStyle, travelMode, people, days"
        );

        let converted: TripBudgetError = err.into();
        assert!(matches!(converted, TripBudgetError::Validation { .. }));
    }
}
