//! Figure and rotation of the Earth

use std::f64::consts::PI;

/// Mean radius, m
pub const RADIUS: f64 = 6.371e6;

/// 24 h in seconds
pub const DAY_SECONDS: f64 = 86400.0;

/// Angular velocity, rad s⁻¹
pub const OMEGA: f64 = 2.0 * PI / DAY_SECONDS;

/// Standard gravity, m s⁻²
pub const GRAVITY: f64 = 9.80665;
