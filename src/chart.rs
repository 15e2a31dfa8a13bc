//! Renderer agnostic soakage plot description
use crate::{reading::ReadingSeries, solution::InfiltrationResult};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Horizontal reference level drawn across the plot
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ReferenceLine {
    /// Legend entry
    pub label: String,
    /// Depth [mbgl]
    pub depth_m: f64,
    /// Named color
    pub color: &'static str,
    pub dashed: bool,
}

/// Water level drop over time: readings as markers linked by a line,
/// h75 and h25 as horizontal reference levels. Deeper levels are drawn lower.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SoakageChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Legend entry of the readings
    pub series_label: &'static str,
    /// (time [min], depth [mbgl])
    pub points: Vec<(f64, f64)>,
    pub references: Vec<ReferenceLine>,
    /// Depth axis increases downwards
    pub inverted_y: bool,
    pub grid: bool,
}

impl SoakageChart {
    pub fn new(readings: &ReadingSeries, solution: &InfiltrationResult) -> Self {
        Self {
            title: "Water Level Drop Over Time",
            x_label: "Time (min)",
            y_label: "Depth to Water (mbgl)",
            series_label: "Water Depth (mbgl)",
            points: readings.iter().map(|r| (r.time_min, r.depth_m)).collect(),
            references: vec![
                ReferenceLine {
                    label: format!("h75 = {:.3} m", solution.h75),
                    depth_m: solution.h75,
                    color: "red",
                    dashed: true,
                },
                ReferenceLine {
                    label: format!("h25 = {:.3} m", solution.h25),
                    depth_m: solution.h25,
                    color: "green",
                    dashed: true,
                },
            ],
            inverted_y: true,
            grid: true,
        }
    }

    /// Returns ((t_min, t_max), (depth_min, depth_max)) covering
    /// all points and reference lines, None when there is nothing to draw.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let (t_first, _) = self.points.first()?;

        let (mut t_min, mut t_max) = (*t_first, *t_first);
        let (mut d_min, mut d_max) = (f64::INFINITY, f64::NEG_INFINITY);

        for (t, d) in self.points.iter() {
            t_min = t_min.min(*t);
            t_max = t_max.max(*t);
            d_min = d_min.min(*d);
            d_max = d_max.max(*d);
        }

        for reference in self.references.iter() {
            d_min = d_min.min(reference.depth_m);
            d_max = d_max.max(reference.depth_m);
        }

        Some(((t_min, t_max), (d_min, d_max)))
    }
}
