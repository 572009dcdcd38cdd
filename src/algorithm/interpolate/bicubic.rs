//! Bicubic interpolation
//!
//! Given function values and derivatives at the four cell corners, the
//! interpolated surface is
//!
//! ```text
//! p(t, u) = Σ_{i=0}^{3} Σ_{j=0}^{3} c[4i + j] t^i u^j
//! ```
//!
//! The sixteen coefficients are fixed by matching `f`, `f_x Δx`,
//! `f_y Δy` and `f_xy Δx Δy` at the corners.
//!
//! # Reference
//!
//! - Numerical Recipes in C, 3.6: Interpolation in Two or More Dimensions

/// Weights mapping corner samples to polynomial coefficients
#[rustfmt::skip]
const WEIGHTS: [[f64; 16]; 16] = [
    [ 1.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0],
    [ 0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  1.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 3.0,  0.0, 0.0, 0.0, 0.0, -2.0, 0.0, 0.0,-1.0,  0.0, 0.0, 0.0, 0.0],
    [ 2.0, 0.0, 0.0,-2.0,  0.0, 0.0, 0.0, 0.0,  1.0, 0.0, 0.0, 1.0,  0.0, 0.0, 0.0, 0.0],
    [ 0.0, 0.0, 0.0, 0.0,  1.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0],
    [ 0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  1.0, 0.0, 0.0, 0.0],
    [ 0.0, 0.0, 0.0, 0.0, -3.0, 0.0, 0.0, 3.0,  0.0, 0.0, 0.0, 0.0, -2.0, 0.0, 0.0,-1.0],
    [ 0.0, 0.0, 0.0, 0.0,  2.0, 0.0, 0.0,-2.0,  0.0, 0.0, 0.0, 0.0,  1.0, 0.0, 0.0, 1.0],
    [-3.0, 3.0, 0.0, 0.0, -2.0,-1.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0],
    [ 0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0, -3.0, 3.0, 0.0, 0.0, -2.0,-1.0, 0.0, 0.0],
    [ 9.0,-9.0, 9.0,-9.0,  6.0, 3.0,-3.0,-6.0,  6.0,-6.0,-3.0, 3.0,  4.0, 2.0, 1.0, 2.0],
    [-6.0, 6.0,-6.0, 6.0, -4.0,-2.0, 2.0, 4.0, -3.0, 3.0, 3.0,-3.0, -2.0,-1.0,-1.0,-2.0],
    [ 2.0,-2.0, 0.0, 0.0,  1.0, 1.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0],
    [ 0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0, 0.0,  2.0,-2.0, 0.0, 0.0,  1.0, 1.0, 0.0, 0.0],
    [-6.0, 6.0,-6.0, 6.0, -3.0,-3.0, 3.0, 3.0, -4.0, 4.0, 2.0,-2.0, -2.0,-2.0,-1.0,-1.0],
    [ 4.0,-4.0, 4.0,-4.0,  2.0, 2.0,-2.0,-2.0,  2.0,-2.0,-2.0, 2.0,  1.0, 1.0, 1.0, 1.0],
];

/// Coefficients from corner samples.
///
/// `f` stores, counterclockwise from the bottom-left corner
/// `(0,0), (1,0), (1,1), (0,1)`:
///
/// - `f[0..4]`: function values
/// - `f[4..8]`: `f_x Δx`
/// - `f[8..12]`: `f_y Δy`
/// - `f[12..16]`: `f_xy Δx Δy`
pub fn coefficients(f: &[f64; 16]) -> [f64; 16] {
    let mut c = [0.0; 16];
    for (ci, row) in c.iter_mut().zip(WEIGHTS.iter()) {
        *ci = row.iter().zip(f.iter()).map(|(w, v)| w * v).sum();
    }
    c
}

/// Interpolate at `(t, u)`
pub fn evaluate(c: &[f64; 16], t: f64, u: f64) -> f64 {
    let mut fi = 0.0;
    for i in (0..4).rev() {
        fi = t * fi + ((c[4 * i + 3] * u + c[4 * i + 2]) * u + c[4 * i + 1]) * u + c[4 * i];
    }
    fi
}

/// Interpolate the t-derivative at `(t, u)`
pub fn evaluate_x(c: &[f64; 16], t: f64, u: f64) -> f64 {
    let mut fi = 0.0;
    for i in (1..4).rev() {
        fi = t * fi
            + i as f64
                * (((c[4 * i + 3] * u + c[4 * i + 2]) * u + c[4 * i + 1]) * u + c[4 * i]);
    }
    fi
}

/// Interpolate the u-derivative at `(t, u)`
pub fn evaluate_y(c: &[f64; 16], t: f64, u: f64) -> f64 {
    let mut fi = 0.0;
    for i in (0..4).rev() {
        fi = t * fi + (3.0 * c[4 * i + 3] * u + 2.0 * c[4 * i + 2]) * u + c[4 * i + 1];
    }
    fi
}

/// Interpolate the mixed tu-derivative at `(t, u)`
pub fn evaluate_xy(c: &[f64; 16], t: f64, u: f64) -> f64 {
    let mut fi = 0.0;
    for i in (1..4).rev() {
        fi = t * fi + i as f64 * ((3.0 * c[4 * i + 3] * u + 2.0 * c[4 * i + 2]) * u + c[4 * i + 1]);
    }
    fi
}
