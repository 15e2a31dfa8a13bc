#![doc = include_str!("../README.md")]

// private modules
mod calculator;
mod cfg;
mod chart;
mod constants;
mod error;
mod interp;
mod pit;
mod reading;
mod report;
mod solution;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::calculator::{calculate, Calculator};
    pub use crate::cfg::Config;
    pub use crate::chart::{ReferenceLine, SoakageChart};
    pub use crate::constants::{MIN_READINGS, REFERENCE_DROP_M, SECONDS_PER_MINUTE};
    pub use crate::error::Error;
    pub use crate::pit::{PitGeometry, VoidRatio};
    pub use crate::reading::{Reading, ReadingSeries};
    pub use crate::report::Report;
    pub use crate::solution::InfiltrationResult;
}

// pub export
pub use error::Error;
