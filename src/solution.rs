#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Infiltration test solution (BRE Digest 365).
/// Depths are expressed in meters below ground level,
/// times in seconds elapsed since the first reading.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfiltrationResult {
    /// Initial water level [mbgl]
    pub start_depth: f64,
    /// Lower reference level: final recorded depth [mbgl]
    pub h75: f64,
    /// Upper reference level [mbgl]
    pub h25: f64,
    /// h75 - h25 [m]
    pub delta_h: f64,
    /// Interpolated time at h75 [s]
    pub t75: f64,
    /// Interpolated time at h25 [s]
    pub t25: f64,
    /// t75 - t25 [s]
    pub delta_t: f64,
    /// Effective volume drained between h75 and h25 [m³]
    pub v7525: f64,
    /// Effective infiltration area: pit base and sides over the depth drop [m²]
    pub ap50: f64,
    /// Infiltration rate [m.s⁻¹]
    pub f: f64,
}

impl InfiltrationResult {
    /// Infiltration rate [m.s⁻¹]
    pub fn infiltration_rate_m_s(&self) -> f64 {
        self.f
    }

    /// True when the rate could not be determined (null time or area)
    /// and was forced to zero.
    pub fn is_degenerate(&self) -> bool {
        self.ap50 * self.delta_t == 0.0
    }
}
