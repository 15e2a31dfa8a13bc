use crate::{constants::DEFAULT_VOID_RATIO, error::Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trial pit (soakaway) dimensions, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PitGeometry {
    /// Pit length [m]
    pub length_m: f64,
    /// Pit width [m]
    pub width_m: f64,
    /// Pit depth [m].
    /// Collected along the other dimensions, but the BRE 365 formulas
    /// only involve the plan area: this value does not contribute.
    pub depth_m: f64,
}

impl Default for PitGeometry {
    fn default() -> Self {
        Self {
            length_m: 1.20,
            width_m: 0.35,
            depth_m: 1.00,
        }
    }
}

impl PitGeometry {
    /// Builds new [PitGeometry], all dimensions must be finite and strictly positive.
    pub fn new(length_m: f64, width_m: f64, depth_m: f64) -> Result<Self, Error> {
        let s = Self {
            length_m,
            width_m,
            depth_m,
        };
        s.validate()?;
        Ok(s)
    }

    /// Verifies this [PitGeometry]. Required when built by other means
    /// than [PitGeometry::new] (for example, deserialized).
    pub fn validate(&self) -> Result<(), Error> {
        for (value, err) in [
            (self.length_m, "length must be a positive number"),
            (self.width_m, "width must be a positive number"),
            (self.depth_m, "depth must be a positive number"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidGeometry(err));
            }
        }
        Ok(())
    }

    /// Pit plan area (m²)
    pub fn plan_area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// Pit perimeter (m)
    pub fn perimeter_m(&self) -> f64 {
        2.0 * self.length_m + 2.0 * self.width_m
    }
}

/// Fraction of the gravel filled pit volume that is void space.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct VoidRatio(f64);

impl Default for VoidRatio {
    fn default() -> Self {
        Self(DEFAULT_VOID_RATIO)
    }
}

impl VoidRatio {
    /// Builds new [VoidRatio], within [0, 1].
    pub fn new(ratio: f64) -> Result<Self, Error> {
        if ratio.is_finite() && (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(Error::InvalidVoidRatio(ratio))
        }
    }

    /// Empty pit (no gravel fill)
    pub fn empty_pit() -> Self {
        Self(1.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for VoidRatio {
    type Error = Error;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VoidRatio> for f64 {
    fn from(ratio: VoidRatio) -> f64 {
        ratio.0
    }
}
