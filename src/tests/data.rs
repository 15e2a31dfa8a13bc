use crate::prelude::{PitGeometry, Reading, ReadingSeries, VoidRatio};

/// Reference trial pit: 1.20 x 0.35 x 1.00 m, gravel filled
pub fn reference_pit() -> (PitGeometry, VoidRatio) {
    (
        PitGeometry::new(1.20, 0.35, 1.00).unwrap(),
        VoidRatio::new(0.3).unwrap(),
    )
}

/// Reference readings: (time [min], depth [mbgl])
pub const REFERENCE_READINGS: [(f64, f64); 14] = [
    (0.0, 0.70),
    (1.0, 0.71),
    (2.0, 0.72),
    (3.0, 0.73),
    (4.0, 0.75),
    (5.0, 0.75),
    (6.0, 0.76),
    (7.0, 0.78),
    (8.0, 0.79),
    (9.0, 0.79),
    (10.0, 0.80),
    (15.0, 0.86),
    (20.0, 0.88),
    (25.0, 0.925),
];

pub fn reference_readings() -> ReadingSeries {
    readings_from(&REFERENCE_READINGS)
}

pub fn readings_from(rows: &[(f64, f64)]) -> ReadingSeries {
    rows.iter().map(|(t, d)| Reading::new(*t, *d)).collect()
}
