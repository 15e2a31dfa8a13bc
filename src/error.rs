use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Percolation tests need at least two valid (time, depth) readings:
    /// no attempt is made below that.
    #[error("insufficient data: {found} valid reading(s), at least 2 required")]
    InsufficientData { found: usize },

    /// Pit dimensions must be finite and strictly positive.
    #[error("invalid pit geometry: {0}")]
    InvalidGeometry(&'static str),

    /// Void ratio is a fraction of the pit volume, within [0, 1].
    #[error("invalid void ratio {0}: must lie within [0, 1]")]
    InvalidVoidRatio(f64),

    /// Depth readings must not decrease when [Config::reject_non_monotonic]
    /// is turned on. Index of the first offending reading.
    ///
    /// [Config::reject_non_monotonic]: crate::prelude::Config
    #[error("depth is not monotonic at reading #{0}")]
    NonMonotonicDepth(usize),

    /// Reference drop between h75 and h25 must be finite and positive.
    #[error("invalid reference drop {0} m")]
    InvalidReferenceDrop(f64),

    #[error("failed to parse reading: \"{0}\"")]
    ReadingParsing(String),
}
