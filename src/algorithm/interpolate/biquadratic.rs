//! Biquadratic interpolation
//!
//! Given function values at the four corners, the four edge midpoints and
//! the cell centre, the interpolated surface is
//!
//! ```text
//! p(t, u) = Σ_{i=0}^{2} Σ_{j=0}^{2} c[3i + j] t^i u^j
//! ```
//!
//! The nine samples determine the nine coefficients exactly.
//!
//! # Reference
//!
//! - Kidner, Dorey and Smith (1999): What's the point? Interpolation and
//!   extrapolation with a regular grid DEM

/// Weights mapping cell samples to polynomial coefficients
#[rustfmt::skip]
const WEIGHTS: [[f64; 9]; 9] = [
    [ 1.0,   0.0,  0.0,  0.0,  0.0,  0.0,  0.0,   0.0,   0.0],
    [-3.0,   0.0,  0.0,  0.0,  0.0,  0.0, -1.0,   4.0,   0.0],
    [ 2.0,   0.0,  0.0,  0.0,  0.0,  0.0,  2.0,  -4.0,   0.0],
    [-3.0,   4.0, -1.0,  0.0,  0.0,  0.0,  0.0,   0.0,   0.0],
    [ 9.0, -12.0,  3.0, -4.0,  1.0, -4.0,  3.0, -12.0,  16.0],
    [-6.0,   8.0, -2.0,  4.0, -2.0,  8.0, -6.0,  12.0, -16.0],
    [ 2.0,  -4.0,  2.0,  0.0,  0.0,  0.0,  0.0,   0.0,   0.0],
    [-6.0,  12.0, -6.0,  8.0, -2.0,  4.0, -2.0,   8.0, -16.0],
    [ 4.0,  -8.0,  4.0, -8.0,  4.0, -8.0,  4.0,  -8.0,  16.0],
];

/// Coefficients from cell samples.
///
/// `f` stores the samples counterclockwise from the bottom-left corner,
/// then the centre:
///
/// ```text
/// (0, 0), (0.5, 0), (1, 0),
/// (1, 0.5), (1, 1), (0.5, 1),
/// (0, 1), (0, 0.5), (0.5, 0.5)
/// ```
pub fn coefficients(f: &[f64; 9]) -> [f64; 9] {
    let mut c = [0.0; 9];
    for (ci, row) in c.iter_mut().zip(WEIGHTS.iter()) {
        *ci = row.iter().zip(f.iter()).map(|(w, v)| w * v).sum();
    }
    c
}

/// Interpolate at `(t, u)`
pub fn evaluate(c: &[f64; 9], t: f64, u: f64) -> f64 {
    let mut fi = 0.0;
    for i in (0..3).rev() {
        fi = t * fi + (c[3 * i + 2] * u + c[3 * i + 1]) * u + c[3 * i];
    }
    fi
}

/// Interpolate the t-derivative at `(t, u)`
pub fn evaluate_x(c: &[f64; 9], t: f64, u: f64) -> f64 {
    let mut fi = 0.0;
    for i in (1..3).rev() {
        fi = t * fi + i as f64 * ((c[3 * i + 2] * u + c[3 * i + 1]) * u + c[3 * i]);
    }
    fi
}

/// Interpolate the u-derivative at `(t, u)`
pub fn evaluate_y(c: &[f64; 9], t: f64, u: f64) -> f64 {
    let mut fi = 0.0;
    for i in (0..3).rev() {
        fi = t * fi + 2.0 * c[3 * i + 2] * u + c[3 * i + 1];
    }
    fi
}

/// Interpolate the mixed tu-derivative at `(t, u)`
pub fn evaluate_xy(c: &[f64; 9], t: f64, u: f64) -> f64 {
    let mut fi = 0.0;
    for i in (1..3).rev() {
        fi = t * fi + i as f64 * (2.0 * c[3 * i + 2] * u + c[3 * i + 1]);
    }
    fi
}

#[cfg(test)]
mod tests {
    use super::*;

    // sample order: corners/midpoints counterclockwise, then centre
    const POINTS: [(f64, f64); 9] = [
        (0.0, 0.0),
        (0.5, 0.0),
        (1.0, 0.0),
        (1.0, 0.5),
        (1.0, 1.0),
        (0.5, 1.0),
        (0.0, 1.0),
        (0.0, 0.5),
        (0.5, 0.5),
    ];

    fn sample(f: impl Fn(f64, f64) -> f64) -> [f64; 9] {
        let mut out = [0.0; 9];
        for (o, &(t, u)) in out.iter_mut().zip(POINTS.iter()) {
            *o = f(t, u);
        }
        out
    }

    #[test]
    fn test_reproduces_plane() {
        let c = coefficients(&sample(|t, u| 1.0 + 2.0 * t - 3.0 * u));
        for &(t, u) in &[(0.2, 0.8), (0.7, 0.1), (0.5, 0.5)] {
            let want = 1.0 + 2.0 * t - 3.0 * u;
            assert!((evaluate(&c, t, u) - want).abs() < 1e-12, "p({t},{u})");
            assert!((evaluate_x(&c, t, u) - 2.0).abs() < 1e-12, "p_t({t},{u})");
            assert!((evaluate_y(&c, t, u) + 3.0).abs() < 1e-12, "p_u({t},{u})");
            assert!((evaluate_xy(&c, t, u)).abs() < 1e-12, "p_tu({t},{u})");
        }
    }

    #[test]
    fn test_reproduces_quadratic() {
        let f = |t: f64, u: f64| t * t - 0.5 * u * u + 2.0 * t * u;
        let c = coefficients(&sample(f));
        for &(t, u) in &[(0.25, 0.75), (0.9, 0.3)] {
            assert!((evaluate(&c, t, u) - f(t, u)).abs() < 1e-12, "p({t},{u})");
            assert!(
                (evaluate_x(&c, t, u) - (2.0 * t + 2.0 * u)).abs() < 1e-12,
                "p_t({t},{u})"
            );
            assert!(
                (evaluate_y(&c, t, u) - (-u + 2.0 * t)).abs() < 1e-12,
                "p_u({t},{u})"
            );
            assert!((evaluate_xy(&c, t, u) - 2.0).abs() < 1e-12, "p_tu({t},{u})");
        }
    }

    #[test]
    fn test_matches_samples() {
        let f = |t: f64, u: f64| (2.7 * t - 1.1 * u + 0.3).sin();
        let c = coefficients(&sample(f));
        for &(t, u) in POINTS.iter() {
            assert!(
                (evaluate(&c, t, u) - f(t, u)).abs() < 1e-12,
                "sample at ({t},{u})"
            );
        }
    }
}
