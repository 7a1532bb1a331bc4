//! # Sexagesimal angles
//!
//! The cross-reference catalog stores right ascension as `HH MM SS.S` (hour angle) and
//! declination as `±DD MM SS` (degrees), each split over three fixed-width columns.
//! [`SexagesimalAngle`] keeps the three components as read together with the unit they
//! are expressed in, and converts to decimal degrees or hours on demand.
//!
//! The sign is kept apart from the major component so that declinations between
//! `-1°` and `0°` (stored as `-00`) do not lose it.
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour};

/// Unit of the major component of a sexagesimal angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Hours, minutes and seconds of time (15° per hour)
    HourAngle,
    /// Degrees, arcminutes and arcseconds
    Degree,
}

/// An angle written as three positional components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SexagesimalAngle {
    pub negative: bool,
    pub major: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub unit: AngleUnit,
}

impl SexagesimalAngle {
    /// Build an hour-angle value (right ascension).
    pub fn hours(hours: u32, minutes: u32, seconds: f64) -> Self {
        SexagesimalAngle {
            negative: false,
            major: hours,
            minutes,
            seconds,
            unit: AngleUnit::HourAngle,
        }
    }

    /// Build a degree value (declination).
    pub fn degrees(negative: bool, degrees: u32, minutes: u32, seconds: f64) -> Self {
        SexagesimalAngle {
            negative,
            major: degrees,
            minutes,
            seconds,
            unit: AngleUnit::Degree,
        }
    }

    /// Signed decimal value in the angle's own unit.
    fn decimal(&self) -> f64 {
        let magnitude = self.major as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn to_degrees(&self) -> Degree {
        match self.unit {
            AngleUnit::HourAngle => self.decimal() * 15.0,
            AngleUnit::Degree => self.decimal(),
        }
    }

    pub fn to_hours(&self) -> Hour {
        match self.unit {
            AngleUnit::HourAngle => self.decimal(),
            AngleUnit::Degree => self.decimal() / 15.0,
        }
    }
}

impl std::fmt::Display for SexagesimalAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            AngleUnit::HourAngle => write!(
                f,
                "{:02}h{:02}m{:04.1}s",
                self.major, self.minutes, self.seconds
            ),
            AngleUnit::Degree => write!(
                f,
                "{}{:02}°{:02}'{:02.0}\"",
                if self.negative { '-' } else { '+' },
                self.major,
                self.minutes,
                self.seconds
            ),
        }
    }
}
