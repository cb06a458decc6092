use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// An angle, stored in both units. Equality compares radians only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
    degrees: f64,
}

impl Angle {
    pub fn degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * PI / 180.0,
            degrees,
        }
    }

    pub fn radians(radians: f64) -> Self {
        Self {
            radians,
            degrees: radians / PI * 180.0,
        }
    }

    pub fn zero() -> Self {
        Self::radians(0.0)
    }

    #[inline]
    pub fn as_radians(&self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn as_degrees(&self) -> f64 {
        self.degrees
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.radians == other.radians
    }
}
