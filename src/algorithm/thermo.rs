//! Moist thermodynamics and below-surface extrapolation
//!
//! The extrapolation functions continue a model column beneath its
//! surface, where `sig = p / ps > 1`, using the standard-atmosphere lapse
//! rate with the orography corrections of the ECMWF post-processing
//! scheme: above 2000 m the lapse rate is limited so the extrapolated
//! sea-level temperature does not exceed 298 K, blending linearly between
//! 2000 m and 2500 m.

use crate::constants::{air, earth, isa};

/// Virtual temperature, K, from temperature `t` (K) and specific
/// humidity `q` (kg/kg)
pub fn virtual_temperature(t: f64, q: f64) -> f64 {
    t * (1.0 + (1.0 - air::EPS) / air::EPS * q)
}

/// `gamma * Rd / g * ln(sig)`, the expansion variable of the
/// extrapolation formulas
fn lapse_log_depth(gamma: f64, sig: f64) -> f64 {
    gamma * air::RD / earth::GRAVITY * sig.ln()
}

/// Surface temperature extrapolated from the lowest full level.
///
/// `t_lowest` is the temperature at the lowest full level and
/// `sig_lowest` its `p / ps`.
pub fn surface_temperature(t_lowest: f64, sig_lowest: f64) -> f64 {
    let rgg = isa::LAPSE_RATE[0] * air::RD / earth::GRAVITY;
    t_lowest * (1.0 + rgg * (sig_lowest - 1.0))
}

/// Geopotential height, m, extrapolated to `sig = p / ps` below the
/// surface.
///
/// `zs` is the surface geopotential height and `ts` the surface
/// temperature from [`surface_temperature`].
pub fn extrapolate_height(zs: f64, ts: f64, sig: f64) -> f64 {
    let rdg = air::RD / earth::GRAVITY;
    let gamma = -isa::LAPSE_RATE[0];
    let y = lapse_log_depth(gamma, sig);
    zs - rdg * ts * sig.ln() * (1.0 + (0.5 + y / 6.0) * y)
}

/// Temperature, K, extrapolated to `sig = p / ps` below the surface.
///
/// Applies the high-orography lapse-rate limit: above 2000 m the rate is
/// reduced so the implied sea-level temperature stays at or below 298 K,
/// with a linear blend up to 2500 m.
pub fn extrapolate_temperature(zs: f64, ts: f64, sig: f64) -> f64 {
    let mut gamma = -isa::LAPSE_RATE[0];
    if zs > 2000.0 {
        let t1 = ts + gamma * zs;
        let t0 = t1.min(298.0);
        let t0 = if zs <= 2500.0 {
            (t0 - t1) / (2500.0 - 2000.0) * (zs - 2000.0) + t1
        } else {
            t0
        };
        gamma = (t0 - ts).max(0.0) / zs;
    }
    let y = lapse_log_depth(gamma, sig);
    ts * (1.0 + (1.0 + (0.5 + y / 6.0) * y) * y)
}
