//! Extended-exponent scalar arithmetic
//!
//! An [`XReal`] stores a real number as a `(mantissa, scale)` pair meaning
//! `mantissa × BIG^scale`, where `BIG = 2^960`. The pair widens the exponent
//! range of `f64` by a factor of the `i32` scale index while keeping full
//! `f64` relative precision, which is exactly what recurrences for
//! normalized associated Legendre functions need at high degree and order:
//! intermediate products underflow or overflow a native double even though
//! the final normalized values are unremarkable.
//!
//! Renormalization keeps the mantissa of a nonzero value inside
//! `[2^-480, 2^480)`. Using the square root of the scale step as the band
//! boundary means a value sitting near a step edge cannot flip its scale
//! index back and forth under small perturbations.
//!
//! Because one scale step is a factor of 2^960 and `f64` carries roughly 16
//! significant decimal digits, two values whose scale indices differ by
//! more than one cannot affect each other in a sum. Addition and
//! subtraction therefore reduce to a five-case table on the scale
//! difference instead of general exponent alignment.
//!
//! Division is the only fallible operation and is offered as
//! [`XReal::try_div`]; the remaining arithmetic is available through the
//! usual operators.
//!
//! # Example
//!
//! ```
//! use atmr::xreal::XReal;
//!
//! let x = XReal::from(3.0e100);
//! let cube = x.ipow(3);                 // 2.7e301, still finite
//! let (m, e) = (cube * cube).to_decimal();
//! assert_eq!(e, 602);                   // 7.29e602 exceeds f64 range
//! assert!((m - 7.29).abs() < 1e-10);
//! ```
//!
//! # Reference
//!
//! Fukushima, Toshio, 2011: Numerical computation of spherical harmonics of
//! arbitrary degree and order by extending exponent of floating point
//! numbers. J. Geodesy, doi:10.1007/s00190-011-0519-2

use crate::error::{Error, Result};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Extended-exponent scalar: `mantissa × BIG^scale`.
///
/// Construct with [`XReal::new`] or `From<f64>`; convert back with
/// [`XReal::to_f64`] (values within native range) or
/// [`XReal::to_decimal`] (any magnitude, as scientific notation).
#[derive(Copy, Clone, Debug, Default)]
pub struct XReal {
    /// Mantissa
    pub mantissa: f64,
    /// Scale index: the represented value is `mantissa × BIG^scale`
    pub scale: i32,
}

impl XReal {
    /// Zero
    pub const ZERO: Self = Self {
        mantissa: 0.0,
        scale: 0,
    };

    /// Multiplicative identity
    pub const ONE: Self = Self {
        mantissa: 1.0,
        scale: 0,
    };

    /// One scale step, 2^960
    pub const BIG: f64 = f64::from_bits(0x7BF0_0000_0000_0000);

    /// Inverse scale step, 2^-960
    pub const BIG_INV: f64 = f64::from_bits(0x03F0_0000_0000_0000);

    /// Upper renormalization threshold, 2^480
    pub const BIG_SQRT: f64 = f64::from_bits(0x5DF0_0000_0000_0000);

    /// Lower renormalization threshold, 2^-480
    pub const BIG_SQRT_INV: f64 = f64::from_bits(0x21F0_0000_0000_0000);

    /// Create from a mantissa and scale index, without renormalizing
    #[inline]
    pub const fn new(mantissa: f64, scale: i32) -> Self {
        Self { mantissa, scale }
    }

    /// Restore the mantissa to the band `[2^-480, 2^480)`.
    ///
    /// Adjusts by at most one scale step, which is sufficient for any
    /// finite `f64` mantissa. Zero is a fixed point.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        let w = self.mantissa.abs();
        if w >= Self::BIG_SQRT {
            Self {
                mantissa: self.mantissa * Self::BIG_INV,
                scale: self.scale + 1,
            }
        } else if w < Self::BIG_SQRT_INV && self.mantissa != 0.0 {
            Self {
                mantissa: self.mantissa * Self::BIG,
                scale: self.scale - 1,
            }
        } else {
            self
        }
    }

    /// Whether the mantissa lies in the normalized band (zero counts)
    #[inline]
    pub fn is_normalized(self) -> bool {
        let w = self.mantissa.abs();
        self.mantissa == 0.0 || ((Self::BIG_SQRT_INV..Self::BIG_SQRT).contains(&w))
    }

    /// Check if this value is zero, whatever its scale index
    #[inline]
    pub fn is_zero(self) -> bool {
        self.mantissa == 0.0
    }

    /// Fused scaled sum `f·x + g·y` for native scalars `f`, `g`.
    ///
    /// After renormalizing both operands, the scale difference decides the
    /// combination: equal scales sum directly, a difference of one step
    /// folds the smaller term down by `BIG_INV`, and a difference of more
    /// than one step makes the smaller term vanish outright, since it sits
    /// more than 2^960 below working precision.
    #[must_use]
    pub fn linear_combination(f: f64, x: Self, g: f64, y: Self) -> Self {
        let x = x.normalize();
        let y = y.normalize();
        let z = match x.scale - y.scale {
            0 => Self::new(f * x.mantissa + g * y.mantissa, x.scale),
            1 => Self::new(f * x.mantissa + g * Self::BIG_INV * y.mantissa, x.scale),
            -1 => Self::new(f * Self::BIG_INV * x.mantissa + g * y.mantissa, y.scale),
            d if d > 1 => Self::new(f * x.mantissa, x.scale),
            _ => Self::new(g * y.mantissa, y.scale),
        };
        z.normalize()
    }

    /// Checked division.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when the divisor's renormalized mantissa
    /// is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        let x = self.normalize();
        let y = rhs.normalize();
        if y.mantissa == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(x.mantissa / y.mantissa, x.scale - y.scale).normalize())
    }

    /// `f / self` without promoting `f` to an extended value.
    ///
    /// Inherits native division semantics for a zero mantissa: the result
    /// mantissa is infinite. Use [`XReal::try_div`] when the divisor may
    /// be zero.
    #[inline]
    #[must_use]
    pub fn scaled_recip(self, f: f64) -> Self {
        let x = self.normalize();
        Self::new(f / x.mantissa, -x.scale).normalize()
    }

    /// Integer power by squaring, O(log n).
    ///
    /// `n == 0` returns [`XReal::ONE`]. For `n < 0` the reciprocal is
    /// taken first and the loop runs on `|n|`, so `ipow(x, -n)` agrees
    /// with `1 / ipow(x, n)` to rounding.
    #[must_use]
    pub fn ipow(self, n: i32) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        let mut base = if n < 0 {
            self.scaled_recip(1.0)
        } else {
            self.normalize()
        };
        let mut m = n.unsigned_abs();
        let mut acc = Self::ONE;
        loop {
            if m & 1 == 1 {
                acc = acc * base;
            }
            m >>= 1;
            if m == 0 {
                break;
            }
            base = base * base;
        }
        acc
    }

    /// Convert to `f64`.
    ///
    /// Exact only when the renormalized scale index is 0; one step up or
    /// down is folded back into the mantissa, which saturates to infinity
    /// or loses precision once the true magnitude leaves native range.
    /// Debug builds assert `|scale| ≤ 1` after renormalization.
    #[inline]
    pub fn to_f64(self) -> f64 {
        let x = self.normalize();
        debug_assert!(
            x.scale.abs() <= 1,
            "magnitude out of f64 range: scale index {} after renormalization",
            x.scale
        );
        match x.scale {
            0 => x.mantissa,
            s if s < 0 => x.mantissa * Self::BIG_INV,
            _ => x.mantissa * Self::BIG,
        }
    }

    /// Convert to decimal scientific notation `(m, e)` with `m × 10^e`
    /// and `1 ≤ |m| < 10`.
    ///
    /// The decimal exponent comes from the combined base-10 logarithm of
    /// mantissa and scale; the mantissa is then recovered by multiplying
    /// with `10^-e` computed through [`XReal::ipow`], so the conversion
    /// itself cannot overflow however large the scale index is. Zero maps
    /// to `(0.0, 0)`.
    pub fn to_decimal(self) -> (f64, i32) {
        let x = self.normalize();
        if x.mantissa == 0.0 {
            return (0.0, 0);
        }
        let log10 = x.mantissa.abs().log10() + f64::from(x.scale) * Self::BIG.log10();
        let mut e = log10.floor() as i32;
        let mut m = (x * Self::from(10.0).ipow(-e)).to_f64();
        // log10 rounding can land the mantissa an ulp outside [1, 10)
        if m.abs() >= 10.0 {
            m /= 10.0;
            e += 1;
        } else if m.abs() < 1.0 {
            m *= 10.0;
            e -= 1;
        }
        (m, e)
    }

    /// Shared three-way comparison over renormalized operands.
    ///
    /// Equal scale indices compare mantissas; unequal ones compare scales,
    /// since normalized mantissas share one magnitude band. When the
    /// mantissas have opposite signs the ordering is inverted: a negative
    /// value with the larger scale index is the smaller value. Zero sits
    /// outside the magnitude band, so ordering against zero is meaningful
    /// only at equal scale indices.
    fn order(self, other: Self) -> Option<Ordering> {
        let x = self.normalize();
        let y = other.normalize();
        let ord = if x.scale == y.scale {
            x.mantissa.partial_cmp(&y.mantissa)?
        } else {
            x.scale.cmp(&y.scale)
        };
        if x.mantissa * y.mantissa < 0.0 {
            Some(ord.reverse())
        } else {
            Some(ord)
        }
    }
}

impl From<f64> for XReal {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value, 0)
    }
}

impl PartialEq for XReal {
    fn eq(&self, other: &Self) -> bool {
        self.order(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for XReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.order(*other)
    }
}

impl Add for XReal {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::linear_combination(1.0, self, 1.0, rhs)
    }
}

impl Sub for XReal {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::linear_combination(1.0, self, -1.0, rhs)
    }
}

impl Mul for XReal {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let x = self.normalize();
        let y = rhs.normalize();
        Self::new(x.mantissa * y.mantissa, x.scale + y.scale).normalize()
    }
}

/// Scalar multiply without promoting the native factor
impl Mul<f64> for XReal {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        let x = self.normalize();
        Self::new(rhs * x.mantissa, x.scale).normalize()
    }
}

impl Mul<XReal> for f64 {
    type Output = XReal;
    #[inline]
    fn mul(self, rhs: XReal) -> XReal {
        rhs * self
    }
}

impl Neg for XReal {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.mantissa, self.scale)
    }
}

impl Zero for XReal {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }
}

impl One for XReal {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl fmt::Display for XReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, e) = self.to_decimal();
        if e == 0 {
            write!(f, "{m}")
        } else {
            write!(f, "{m}e{e}")
        }
    }
}
