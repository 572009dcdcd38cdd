//! International Standard Atmosphere base levels
//!
//! Seven layers bounded by eight base levels from the surface to 86 km.
//! Lapse rates apply between consecutive base levels.

/// Number of base levels
pub const LEVELS: usize = 8;

/// Base geopotential height, m
pub const GEOPOTENTIAL_HEIGHT: [f64; LEVELS] = [
    0.0, 11.0e3, 20.0e3, 32.0e3, 47.0e3, 51.0e3, 71.0e3, 84.852e3,
];

/// Base geometric height, m
pub const GEOMETRIC_HEIGHT: [f64; LEVELS] = [
    0.0, 11.019e3, 20.063e3, 32.0162e3, 47.350e3, 51.413e3, 71.802e3, 86.0e3,
];

/// Lapse rate in each layer, K m⁻¹
pub const LAPSE_RATE: [f64; LEVELS - 1] = [-6.5e-3, 0.0, 1.0e-3, 2.8e-3, 0.0e-3, -2.8e-3, -2.0e-3];

/// Base temperature, °C
pub const TEMPERATURE: [f64; LEVELS] = [15.0, -56.5, -56.5, -44.5, -2.5, -2.5, -58.5, -86.28];

/// Base pressure, Pa
pub const PRESSURE: [f64; LEVELS] = [
    101325.0, 22632.0, 5474.9, 868.02, 110.91, 66.939, 3.9564, 0.3734,
];
