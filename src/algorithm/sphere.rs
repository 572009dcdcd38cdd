//! Quasi-uniform point distributions on the sphere
//!
//! Three classic constructions, each returning longitudes in `[0, 2π)`
//! and colatitudes in `[0, π]`:
//!
//! - [`helix`]: points along a spherical helix whose colatitude cosines
//!   are equally spaced (Nishio et al. 2006)
//! - [`generalized_spiral`]: the spiral of Rakhmanov, Saff and Zhou with
//!   poles pinned at both ends (Saff and Kuijlaars 1997)
//! - [`fibonacci_lattice`]: golden-ratio longitude increments
//!   (Swinbank and Purser 2006)
//!
//! The helix and Fibonacci sets are generated in parallel when the
//! `rayon` feature is enabled; the spiral carries its longitude forward
//! point to point and stays serial.
//!
//! # References
//!
//! - Bauer, R., 2000: Distribution of points on a sphere with application
//!   to star catalogs. J. Guid. Control Dyn., 23, 130–137.
//! - Saff, E. B. and A. B. J. Kuijlaars, 1997: Distributing many points
//!   on a sphere. Math. Intelligencer, 19, 5–11.
//! - Swinbank, R. and R. J. Purser, 2006: Fibonacci grids: a novel
//!   approach to global modelling. Q. J. R. Meteorol. Soc., 132,
//!   1769–1793.

use std::f64::consts::{PI, TAU};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A point on the unit sphere
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpherePoint {
    /// Longitude, rad, in `[0, 2π)`
    pub lon: f64,
    /// Colatitude, rad, in `[0, π]`
    pub colat: f64,
}

/// Great-circle angular distance between two points, rad
pub fn orthodrome(lon1: f64, colat1: f64, lon2: f64, colat2: f64) -> f64 {
    let c = colat1.cos() * colat2.cos() + colat1.sin() * colat2.sin() * (lon1 - lon2).cos();
    c.clamp(-1.0, 1.0).acos()
}

#[inline]
fn helix_point(n: f64, k: f64, i: usize) -> SpherePoint {
    let colat = (1.0 - (2.0 * i as f64 + 1.0) / n).acos();
    SpherePoint {
        lon: (k * colat).rem_euclid(TAU),
        colat,
    }
}

/// Spherical helix with equally spaced colatitude cosines.
///
/// The longitude advances along the helix `λ = mod(kθ, 2π)` with
/// `k = √(nπ)`, so consecutive points are roughly one mean point spacing
/// apart along the curve.
#[cfg(feature = "rayon")]
pub fn helix(n: usize) -> Vec<SpherePoint> {
    let k = (n as f64 * PI).sqrt();
    (0..n)
        .into_par_iter()
        .map(|i| helix_point(n as f64, k, i))
        .collect()
}

/// Spherical helix with equally spaced colatitude cosines.
///
/// The longitude advances along the helix `λ = mod(kθ, 2π)` with
/// `k = √(nπ)`, so consecutive points are roughly one mean point spacing
/// apart along the curve.
#[cfg(not(feature = "rayon"))]
pub fn helix(n: usize) -> Vec<SpherePoint> {
    let k = (n as f64 * PI).sqrt();
    (0..n).map(|i| helix_point(n as f64, k, i)).collect()
}

/// Generalized spiral with both poles included.
///
/// Interior longitudes advance by `c / √(n(1 - h²))` with `c = 3.6`,
/// which spaces neighbours on the spiral near the mean point distance.
pub fn generalized_spiral(n: usize) -> Vec<SpherePoint> {
    const C: f64 = 3.6;

    let mut pts = Vec::with_capacity(n);
    if n == 0 {
        return pts;
    }
    pts.push(SpherePoint {
        lon: 0.0,
        colat: PI,
    });
    let mut lon = 0.0;
    for k in 1..n.saturating_sub(1) {
        let h = -1.0 + 2.0 * k as f64 / (n as f64 - 1.0);
        lon = (lon + C / (n as f64 * (1.0 - h * h)).sqrt()).rem_euclid(TAU);
        pts.push(SpherePoint {
            lon,
            colat: h.acos(),
        });
    }
    if n > 1 {
        pts.push(SpherePoint {
            lon: 0.0,
            colat: 0.0,
        });
    }
    pts
}

#[inline]
fn fibonacci_point(n: f64, m: f64, i: usize) -> SpherePoint {
    let h = 1.0 - (2.0 * i as f64 + 1.0) / n;
    SpherePoint {
        lon: (-m * h).rem_euclid(TAU),
        colat: h.acos(),
    }
}

/// Fibonacci lattice: longitudes step by the golden angle.
#[cfg(feature = "rayon")]
pub fn fibonacci_lattice(n: usize) -> Vec<SpherePoint> {
    let phi_r = 2.0 / (1.0 + 5.0_f64.sqrt());
    let m = n as f64 * PI * phi_r;
    (0..n)
        .into_par_iter()
        .map(|i| fibonacci_point(n as f64, m, i))
        .collect()
}

/// Fibonacci lattice: longitudes step by the golden angle.
#[cfg(not(feature = "rayon"))]
pub fn fibonacci_lattice(n: usize) -> Vec<SpherePoint> {
    let phi_r = 2.0 / (1.0 + 5.0_f64.sqrt());
    let m = n as f64 * PI * phi_r;
    (0..n).map(|i| fibonacci_point(n as f64, m, i)).collect()
}
