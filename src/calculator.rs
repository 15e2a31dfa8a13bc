//! BRE Digest 365 infiltration rate calculator
use log::{debug, warn};

use crate::{
    cfg::Config,
    constants::{MIN_READINGS, SECONDS_PER_MINUTE},
    error::Error,
    interp::interp,
    pit::{PitGeometry, VoidRatio},
    reading::ReadingSeries,
    solution::InfiltrationResult,
};

/// Stateless infiltration rate [Calculator]. Each run only depends on its inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Calculator {
    /// [Config] used for every run
    pub cfg: Config,
}

impl Calculator {
    /// Builds new [Calculator] from given [Config]
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Resolves the infiltration rate from a single test.
    /// The [ReadingSeries] is expected in chronological order: first and last
    /// entries are the initial and final water levels.
    pub fn run(
        &self,
        geometry: &PitGeometry,
        void_ratio: VoidRatio,
        readings: &ReadingSeries,
    ) -> Result<InfiltrationResult, Error> {
        self.cfg.validate()?;
        geometry.validate()?;

        let valid = readings.valid();
        if valid.len() < readings.len() {
            debug!(
                "dropped {} reading(s) with non finite time or depth",
                readings.len() - valid.len()
            );
        }

        let (first, last) = match (valid.first(), valid.last()) {
            (Some(first), Some(last)) if valid.len() >= MIN_READINGS => (first, last),
            _ => return Err(Error::InsufficientData { found: valid.len() }),
        };

        if let Some(index) = valid.first_non_monotonic() {
            if self.cfg.reject_non_monotonic {
                return Err(Error::NonMonotonicDepth(index));
            }
            warn!(
                "depth decreases at reading #{} ({}): interpolated times are unreliable",
                index,
                valid.iter().nth(index).map(|r| r.to_string()).unwrap_or_default(),
            );
        }

        let start_depth = first.depth_m;
        let h75 = last.depth_m;
        let h25 = h75 - self.cfg.reference_drop_m;
        let delta_h = h75 - h25;

        let depths = valid.depths_m();
        let times = valid.times_min();

        let t75 = Self::time_at_depth_s(h75, &depths, &times, valid.len())?;
        let t25 = Self::time_at_depth_s(h25, &depths, &times, valid.len())?;
        let delta_t = t75 - t25;

        let v7525 = geometry.plan_area_m2() * delta_h * void_ratio.value();
        let ap50 = geometry.perimeter_m() * delta_h + geometry.plan_area_m2();

        let denominator = ap50 * delta_t;

        let f = if denominator != 0.0 {
            v7525 / denominator
        } else {
            debug!("null time or area: infiltration rate forced to zero");
            0.0
        };

        debug!(
            "h75={:.3}m t75={:.1}s | h25={:.3}m t25={:.1}s | v7525={:.5}m3 ap50={:.4}m2 | f={:e}m/s",
            h75, t75, h25, t25, v7525, ap50, f
        );

        Ok(InfiltrationResult {
            start_depth,
            h75,
            h25,
            delta_h,
            t75,
            t25,
            delta_t,
            v7525,
            ap50,
            f,
        })
    }

    /// Interpolates the time [s] at which water reached given depth.
    fn time_at_depth_s(
        depth_m: f64,
        depths: &[f64],
        times_min: &[f64],
        found: usize,
    ) -> Result<f64, Error> {
        interp(depth_m, depths, times_min)
            .map(|t_min| t_min * SECONDS_PER_MINUTE)
            .ok_or(Error::InsufficientData { found })
    }
}

/// Resolves the infiltration rate of a single test, using the default [Config].
pub fn calculate(
    geometry: &PitGeometry,
    void_ratio: VoidRatio,
    readings: &ReadingSeries,
) -> Result<InfiltrationResult, Error> {
    Calculator::default().run(geometry, void_ratio, readings)
}

#[cfg(test)]
mod test {
    use super::{calculate, Calculator};
    use crate::{
        cfg::Config,
        error::Error,
        pit::{PitGeometry, VoidRatio},
        reading::{Reading, ReadingSeries},
    };

    fn series(rows: &[(f64, f64)]) -> ReadingSeries {
        rows.iter().map(|(t, d)| Reading::new(*t, *d)).collect()
    }

    #[test]
    fn insufficient_data() {
        let pit = PitGeometry::default();
        for rows in [vec![], vec![(0.0, 0.7)]] {
            let readings = series(&rows);
            assert_eq!(
                calculate(&pit, VoidRatio::default(), &readings),
                Err(Error::InsufficientData { found: rows.len() })
            );
        }
    }

    #[test]
    fn degenerate_denominator() {
        let readings = series(&[(3.0, 0.8), (3.0, 0.8)]);
        let solution = calculate(&PitGeometry::default(), VoidRatio::default(), &readings).unwrap();
        assert_eq!(solution.delta_t, 0.0);
        assert_eq!(solution.f, 0.0);
        assert!(solution.is_degenerate());
    }

    #[test]
    fn non_monotonic_rejection() {
        let readings = series(&[(0.0, 0.7), (1.0, 0.9), (2.0, 0.8)]);
        let pit = PitGeometry::default();

        let calculator = Calculator::new(Config::strict());
        assert_eq!(
            calculator.run(&pit, VoidRatio::default(), &readings),
            Err(Error::NonMonotonicDepth(2))
        );

        // tolerated by default
        assert!(calculate(&pit, VoidRatio::default(), &readings).is_ok());
    }

    #[test]
    fn invalid_inputs() {
        let readings = ReadingSeries::default();
        let pit = PitGeometry {
            length_m: -1.0,
            width_m: 0.35,
            depth_m: 1.0,
        };
        assert!(matches!(
            calculate(&pit, VoidRatio::default(), &readings),
            Err(Error::InvalidGeometry(_))
        ));

        let calculator = Calculator::new(Config::default().with_reference_drop(0.0));
        assert_eq!(
            calculator.run(&PitGeometry::default(), VoidRatio::default(), &readings),
            Err(Error::InvalidReferenceDrop(0.0))
        );
    }

    #[test]
    fn custom_reference_drop() {
        let readings = ReadingSeries::default();
        let calculator = Calculator::new(Config::default().with_reference_drop(0.1));
        let solution = calculator
            .run(&PitGeometry::default(), VoidRatio::default(), &readings)
            .unwrap();
        assert!((solution.delta_h - 0.1).abs() < 1.0E-12);
        // 0.825 lies between 0.80 (10') and 0.86 (15')
        let expected_t25 = (10.0 + 5.0 * (0.825 - 0.80) / (0.86 - 0.80)) * 60.0;
        assert!((solution.t25 - expected_t25).abs() < 1.0E-6);
    }
}
