//! # atmr
//!
//! **Numerical kernels for atmospheric and geodetic computation.**
//!
//! atmr collects the small, self-contained numerics that global atmospheric
//! analysis keeps reaching for: grid interpolation, monotonic-grid search,
//! hybrid vertical coordinates, point distributions on the sphere, and the
//! recurrence machinery for normalized associated Legendre functions.
//!
//! Its one genuinely designed component is [`xreal::XReal`], an
//! extended-exponent scalar that carries a `(mantissa, scale)` pair through
//! recurrences whose intermediates overflow or underflow `f64` even though
//! the final values are well within range, the situation that arises when
//! evaluating associated Legendre functions at degrees in the hundreds to
//! tens of thousands (Fukushima 2011).
//!
//! ## Features
//!
//! - **Extended-exponent arithmetic**: multiply, divide, fused scaled sums,
//!   integer powers, and comparisons over a dynamic range of thousands of
//!   decimal orders of magnitude
//! - **Interpolation**: bicubic, biquadratic, cubic Hermite, cubic Lagrange
//! - **Search**: hinted linear and bisection search on monotonic grids
//! - **Vertical coordinates**: hybrid sigma-pressure levels with
//!   energy-conserving alpha/beta coefficients and hydrostatic integration
//! - **Sphere**: helix, generalized spiral, and Fibonacci point sets;
//!   great-circle distance
//! - **Thermodynamics**: virtual temperature and below-surface
//!   extrapolation of temperature and geopotential height
//! - **Legendre recurrences**: Belousov/Swarztrauber coefficient tables and
//!   sectoral seeds in both native and extended arithmetic
//!
//! ## Quick Start
//!
//! ```
//! use atmr::prelude::*;
//!
//! let x = XReal::from(3.0e100);
//! let (mantissa, exponent) = x.ipow(5).to_decimal();
//! assert_eq!(exponent, 502);
//! assert!((mantissa - 2.43).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded generation of sphere point sets

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod constants;
pub mod error;
pub mod xreal;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::legendre::LegendreTables;
    pub use crate::algorithm::sigmap::HybridCoordinate;
    pub use crate::algorithm::sphere::SpherePoint;
    pub use crate::error::{Error, Result};
    pub use crate::xreal::XReal;
}
