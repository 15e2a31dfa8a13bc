use itertools::Itertools;
use log::debug;

use crate::{constants::DEFAULT_READINGS, error::Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Single water level observation
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Elapsed time since test start [min]
    pub time_min: f64,
    /// Depth to water [mbgl]
    pub depth_m: f64,
}

impl Reading {
    pub fn new(time_min: f64, depth_m: f64) -> Self {
        Self { time_min, depth_m }
    }

    /// True when both time and depth are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.time_min.is_finite() && self.depth_m.is_finite()
    }

    /// Builds a [Reading] from a possibly incomplete row.
    /// Rows with a missing or non finite field are rejected.
    pub fn from_row(time_min: Option<f64>, depth_m: Option<f64>) -> Option<Self> {
        match (time_min, depth_m) {
            (Some(t), Some(d)) => Some(Self::new(t, d)).filter(Self::is_valid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "t={} min depth={} mbgl", self.time_min, self.depth_m)
    }
}

/// Splits one table row into its cells, preserving empty cells
/// when an explicit delimiter is used.
fn cells(line: &str) -> Vec<&str> {
    match [',', ';', '\t'].into_iter().find(|c| line.contains(*c)) {
        Some(delim) => line.split(delim).map(str::trim).collect(),
        None => line.split_whitespace().collect(),
    }
}

fn parse_cell(cell: Option<&&str>) -> Option<f64> {
    cell.and_then(|c| c.parse::<f64>().ok())
}

impl std::str::FromStr for Reading {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = cells(s.trim());
        if cells.len() != 2 {
            return Err(Error::ReadingParsing(s.to_string()));
        }
        Self::from_row(parse_cell(cells.first()), parse_cell(cells.get(1)))
            .ok_or_else(|| Error::ReadingParsing(s.to_string()))
    }
}

/// Time ordered series of [Reading]s, as collected during a single test.
/// First and last entries are the initial and final water levels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReadingSeries {
    readings: Vec<Reading>,
}

impl Default for ReadingSeries {
    fn default() -> Self {
        Self::from_iter(
            DEFAULT_READINGS
                .iter()
                .map(|(t, d)| Reading::new(*t, *d)),
        )
    }
}

impl FromIterator<Reading> for ReadingSeries {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Reading>> for ReadingSeries {
    fn from(readings: Vec<Reading>) -> Self {
        Self { readings }
    }
}

impl ReadingSeries {
    /// Builds a [ReadingSeries] from (time [min], depth [mbgl]) rows.
    /// Rows with any missing field are dropped, never defaulted. Order is preserved.
    pub fn from_rows<I: IntoIterator<Item = (Option<f64>, Option<f64>)>>(rows: I) -> Self {
        let mut dropped = 0;
        let readings = rows
            .into_iter()
            .filter_map(|(t, d)| {
                let reading = Reading::from_row(t, d);
                if reading.is_none() {
                    dropped += 1;
                }
                reading
            })
            .collect::<Vec<_>>();

        if dropped > 0 {
            debug!("dropped {} incomplete row(s)", dropped);
        }

        Self { readings }
    }

    /// Parses a two column (time [min], depth [mbgl]) table.
    /// Cells may be separated by commas, semicolons, tabs or whitespaces.
    /// Blank lines are ignored, header and incomplete rows are dropped.
    pub fn from_csv_str(content: &str) -> Self {
        Self::from_rows(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| {
                    let cells = cells(line);
                    (parse_cell(cells.first()), parse_cell(cells.get(1)))
                }),
        )
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Initial reading (by position)
    pub fn first(&self) -> Option<&Reading> {
        self.readings.first()
    }

    /// Final reading (by position)
    pub fn last(&self) -> Option<&Reading> {
        self.readings.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    /// Time column [min]
    pub fn times_min(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.time_min).collect()
    }

    /// Depth column [mbgl]
    pub fn depths_m(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.depth_m).collect()
    }

    /// Appends a new [Reading]
    pub fn push(&mut self, reading: Reading) {
        self.readings.push(reading);
    }

    /// Returns a copy of this series, restricted to valid readings.
    /// Readings inserted without row filtering may hold non finite values.
    pub fn valid(&self) -> Self {
        self.readings
            .iter()
            .filter(|r| r.is_valid())
            .copied()
            .collect()
    }

    /// Returns a copy of this series with all times multiplied by `factor`.
    pub fn scale_time(&self, factor: f64) -> Self {
        self.readings
            .iter()
            .map(|r| Reading::new(r.time_min * factor, r.depth_m))
            .collect()
    }

    /// Index of the first reading whose depth is lower than its predecessor's.
    pub fn first_non_monotonic(&self) -> Option<usize> {
        self.readings
            .iter()
            .tuple_windows()
            .position(|(prev, next)| next.depth_m < prev.depth_m)
            .map(|i| i + 1)
    }

    /// True when depth never decreases along this series.
    pub fn is_depth_monotonic(&self) -> bool {
        self.first_non_monotonic().is_none()
    }
}

impl<'a> IntoIterator for &'a ReadingSeries {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;
    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}
