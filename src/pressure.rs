//! Pressure values and the pressure/angle mapping.
//!
//! The dial spans 160 degrees across its upper half: pressure 0 sits at
//! -170 degrees and pressure 100 at -10 degrees, with 0 degrees pointing
//! along +x and angles growing clockwise in screen space.

use std::fmt;

use crate::error::InputError;

/// Lowest accepted pressure.
pub const MIN_PRESSURE: u8 = 0;
/// Highest accepted pressure.
pub const MAX_PRESSURE: u8 = 100;

/// Angle of pressure 0, in degrees.
pub const START_ANGLE: f64 = -170.0;
/// Degrees of needle travel per pressure unit.
pub const DEGREES_PER_UNIT: f64 = 1.6;
/// Angle of pressure 100, in degrees.
pub const END_ANGLE: f64 = START_ANGLE + DEGREES_PER_UNIT * MAX_PRESSURE as f64;

/// A committed pressure, always within `MIN_PRESSURE..=MAX_PRESSURE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pressure(u8);

impl Pressure {
    pub const ZERO: Pressure = Pressure(MIN_PRESSURE);

    pub fn new(value: i64) -> Result<Self, InputError> {
        if (MIN_PRESSURE as i64..=MAX_PRESSURE as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InputError::Range(value))
        }
    }

    /// Parse user text. Surrounding whitespace is ignored; anything that is
    /// not a 64-bit integer is a parse error, anything out of bounds a range
    /// error.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let trimmed = text.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| InputError::Parse(trimmed.to_string()))?;
        Self::new(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Needle angle for this pressure.
    pub fn angle(self) -> f64 {
        angle_of(self)
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `1.6 * pressure - 170`.
pub fn angle_of(pressure: Pressure) -> f64 {
    DEGREES_PER_UNIT * pressure.0 as f64 + START_ANGLE
}

/// Readout value for an in-flight angle. Not clamped: a bouncing needle may
/// read a hair outside the pressure range.
pub fn pressure_of(angle: f64) -> i64 {
    ((angle - START_ANGLE) / DEGREES_PER_UNIT).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn anchor_angles() {
        assert_eq!(angle_of(Pressure::ZERO), -170.0);
        assert_eq!(angle_of(Pressure::new(50).unwrap()), -90.0);
        assert_eq!(angle_of(Pressure::new(100).unwrap()), -10.0);
        assert_eq!(END_ANGLE, -10.0);
    }

    #[test]
    fn readout_inverts_the_endpoints() {
        assert_eq!(pressure_of(START_ANGLE), 0);
        assert_eq!(pressure_of(END_ANGLE), 100);
    }

    #[test]
    fn parse_classifies_failures() {
        assert_eq!(Pressure::parse("42"), Ok(Pressure(42)));
        assert_eq!(Pressure::parse(" 7\n"), Ok(Pressure(7)));
        assert_eq!(Pressure::parse("150"), Err(InputError::Range(150)));
        assert_eq!(Pressure::parse("-1"), Err(InputError::Range(-1)));
        assert_eq!(Pressure::parse("abc"), Err(InputError::Parse("abc".into())));
        assert_eq!(Pressure::parse(""), Err(InputError::Parse(String::new())));
        assert_eq!(Pressure::parse("4.5"), Err(InputError::Parse("4.5".into())));
        assert!(matches!(
            Pressure::parse("99999999999999999999"),
            Err(InputError::Parse(_))
        ));
    }

    proptest! {
        #[test]
        fn readout_inverts_every_pressure(p in 0u8..=100) {
            let pressure = Pressure::new(p as i64).unwrap();
            prop_assert_eq!(pressure_of(angle_of(pressure)), p as i64);
        }

        #[test]
        fn angles_stay_on_the_dial(p in 0u8..=100) {
            let angle = angle_of(Pressure::new(p as i64).unwrap());
            prop_assert!((START_ANGLE..=END_ANGLE).contains(&angle));
        }
    }
}
