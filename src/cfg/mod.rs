#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{constants::REFERENCE_DROP_M, error::Error};

fn default_reference_drop() -> f64 {
    REFERENCE_DROP_M
}

fn default_reject_non_monotonic() -> bool {
    false
}

/// [Calculator] configuration.
///
/// [Calculator]: crate::prelude::Calculator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Rise of h25 above h75 [m]. BRE Digest 365 uses a fixed 150 mm.
    #[cfg_attr(feature = "serde", serde(default = "default_reference_drop"))]
    pub reference_drop_m: f64,
    /// Reject series where the depth decreases at some point, instead
    /// of warning and proceeding. Interpolation over such series is undefined.
    #[cfg_attr(feature = "serde", serde(default = "default_reject_non_monotonic"))]
    pub reject_non_monotonic: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_drop_m: default_reference_drop(),
            reject_non_monotonic: default_reject_non_monotonic(),
        }
    }
}

impl Config {
    /// Strict preset: non-monotonic series are rejected.
    pub fn strict() -> Self {
        Self::default().with_non_monotonic_rejection(true)
    }

    /// Copies and returns [Config] with updated reference drop [m]
    pub fn with_reference_drop(&self, drop_m: f64) -> Self {
        let mut s = *self;
        s.reference_drop_m = drop_m;
        s
    }

    /// Copies and returns [Config] with non-monotonic series rejection
    pub fn with_non_monotonic_rejection(&self, reject: bool) -> Self {
        let mut s = *self;
        s.reject_non_monotonic = reject;
        s
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.reference_drop_m.is_finite() && self.reference_drop_m > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidReferenceDrop(self.reference_drop_m))
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::error::Error;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.reference_drop_m, 0.150);
        assert!(!cfg.reject_non_monotonic);
        assert!(cfg.validate().is_ok());
        assert!(Config::strict().reject_non_monotonic);
    }

    #[test]
    fn invalid_reference_drop() {
        for drop_m in [0.0, -0.150, f64::INFINITY] {
            let cfg = Config::default().with_reference_drop(drop_m);
            assert_eq!(cfg.validate(), Err(Error::InvalidReferenceDrop(drop_m)));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserialization() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());

        let cfg: Config = serde_json::from_str(
            r#"{
                "reference_drop_m": 0.1,
                "reject_non_monotonic": true
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.reference_drop_m, 0.1);
        assert!(cfg.reject_non_monotonic);
    }
}
