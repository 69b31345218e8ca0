use std::fmt;

use crate::constants::US_STATE_CODES;
use crate::error::InputError;
use crate::models::CoordinateInput;

/// A validated, upper-case US state or territory code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCode(&'static str);

impl StateCode {
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let normalized = input.to_ascii_uppercase();
        US_STATE_CODES
            .iter()
            .copied()
            .find(|code| *code == normalized)
            .map(Self)
            .ok_or_else(|| InputError::InvalidStateCode(input.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A latitude/longitude pair known to be within range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn parse(latitude: &CoordinateInput, longitude: &CoordinateInput) -> Result<Self, InputError> {
        let (Some(lat), Some(lon)) = (as_number(latitude), as_number(longitude)) else {
            return Err(InputError::InvalidCoordinates {
                latitude: latitude.to_string(),
                longitude: longitude.to_string(),
            });
        };

        // NaN fails both range checks
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(InputError::CoordinatesOutOfRange {
                latitude: lat,
                longitude: lon,
            });
        }

        Ok(Self {
            latitude: lat,
            longitude: lon,
        })
    }

    /// Path segment for the points endpoint, e.g. `37.0,-122.0`.
    pub fn points_path(&self) -> String {
        format!("{},{}", decimal(self.latitude), decimal(self.longitude))
    }
}

fn as_number(input: &CoordinateInput) -> Option<f64> {
    match input {
        CoordinateInput::Number(value) => Some(*value),
        CoordinateInput::Text(text) => text.trim().parse().ok(),
    }
}

/// Renders whole numbers with a trailing `.0` so the path reads like a decimal literal.
fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_code_is_normalized() {
        assert_eq!(StateCode::parse("ca").unwrap().as_str(), "CA");
        assert_eq!(StateCode::parse("Ny").unwrap().as_str(), "NY");
        assert_eq!(StateCode::parse("PR").unwrap().as_str(), "PR");
    }

    #[test]
    fn state_code_rejects_names_and_unknown_codes() {
        for input in ["California", "XX", "", "C", "CAL", " ny "] {
            let err = StateCode::parse(input).unwrap_err();
            assert!(err.to_string().contains("Invalid state code"), "{input}");
        }
    }

    #[test]
    fn coordinates_accept_numbers_and_numeric_text() {
        let coords = Coordinates::parse(&"37.5".into(), &(-122.25).into()).unwrap();
        assert_eq!(coords.latitude, 37.5);
        assert_eq!(coords.longitude, -122.25);

        assert!(Coordinates::parse(&90.into(), &(-180).into()).is_ok());
    }

    #[test]
    fn coordinates_reject_non_numeric_text() {
        let err = Coordinates::parse(&"abc".into(), &"def".into()).unwrap_err();
        assert!(err.to_string().contains("Invalid latitude/longitude"));
    }

    #[test]
    fn coordinates_reject_out_of_range_and_nan() {
        let err = Coordinates::parse(&1000.into(), &2000.into()).unwrap_err();
        assert!(err.to_string().starts_with("Latitude must be between"));

        assert!(Coordinates::parse(&10.into(), &(-180.5).into()).is_err());
        assert!(Coordinates::parse(&"NaN".into(), &0.into()).is_err());
    }

    #[test]
    fn points_path_keeps_decimal_form() {
        let coords = Coordinates::parse(&37.0.into(), &(-122.0).into()).unwrap();
        assert_eq!(coords.points_path(), "37.0,-122.0");

        let coords = Coordinates::parse(&37.7749.into(), &(-122.4194).into()).unwrap();
        assert_eq!(coords.points_path(), "37.7749,-122.4194");
    }
}
