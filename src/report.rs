//! Text rendering of [InfiltrationResult]s
use crate::solution::InfiltrationResult;

/// Formats `value` in exponent notation, with `precision` decimals
/// and a signed exponent of at least two digits (`1.95e-05`).
pub(crate) fn format_exponent(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            },
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// Human readable [InfiltrationResult] summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report<'a> {
    solution: &'a InfiltrationResult,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a InfiltrationResult) -> Self {
        Self { solution }
    }

    /// Effective volume [m³], 4 decimals
    pub fn volume(&self) -> String {
        format!("{:.4}", self.solution.v7525)
    }

    /// Effective area [m²], 3 decimals
    pub fn area(&self) -> String {
        format!("{:.3}", self.solution.ap50)
    }

    /// Infiltration rate [m.s⁻¹], exponent notation
    pub fn rate(&self) -> String {
        format_exponent(self.solution.f, 2)
    }

    /// Intermediate terms, one per line
    pub fn breakdown(&self) -> [String; 3] {
        let s = self.solution;
        [
            format!("h75: {:.3} m at t75: {:.0} s", s.h75, s.t75),
            format!("h25: {:.3} m at t25: {:.0} s", s.h25, s.t25),
            format!("Δh: {:.3} m, Δt: {:.0} s", s.delta_h, s.delta_t),
        ]
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(fmt, "Effective Volume (m³): {}", self.volume())?;
        writeln!(fmt, "Effective Area (m²): {}", self.area())?;
        writeln!(fmt, "Infiltration Rate (m/s): {}", self.rate())?;
        for line in self.breakdown() {
            writeln!(fmt, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{format_exponent, Report};
    use crate::solution::InfiltrationResult;

    #[test]
    fn exponent_formatting() {
        for (value, expected) in [
            (1.9503E-5, "1.95e-05"),
            (0.0, "0.00e+00"),
            (123456.0, "1.23e+05"),
            (-2.5E-7, "-2.50e-07"),
            (1.0E-120, "1.00e-120"),
        ] {
            assert_eq!(format_exponent(value, 2), expected);
        }
    }

    #[test]
    fn report_rendering() {
        let solution = InfiltrationResult {
            start_depth: 0.70,
            h75: 0.925,
            h25: 0.775,
            delta_h: 0.150,
            t75: 1500.0,
            t25: 405.0,
            delta_t: 1095.0,
            v7525: 0.0189,
            ap50: 0.885,
            f: 1.9503E-5,
        };

        let report = Report::new(&solution);
        assert_eq!(report.volume(), "0.0189");
        assert_eq!(report.area(), "0.885");
        assert_eq!(report.rate(), "1.95e-05");
        assert_eq!(
            report.to_string(),
            "Effective Volume (m³): 0.0189
Effective Area (m²): 0.885
Infiltration Rate (m/s): 1.95e-05
h75: 0.925 m at t75: 1500 s
h25: 0.775 m at t25: 405 s
Δh: 0.150 m, Δt: 1095 s
"
        );
    }
}
