/// Fixed rise of h25 above h75, in meters (150 mm)
pub const REFERENCE_DROP_M: f64 = 0.150;

/// Minimal number of readings for any calculation attempt
pub const MIN_READINGS: usize = 2;

/// Readings are sampled in minutes, rates are expressed in m.s⁻¹
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Default gravel void ratio
pub const DEFAULT_VOID_RATIO: f64 = 0.3;

/// Pre-filled reading series: (time [min], depth to water [mbgl])
pub const DEFAULT_READINGS: [(f64, f64); 14] = [
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
