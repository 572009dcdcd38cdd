//! Normalized associated Legendre function recurrences
//!
//! [`LegendreTables`] precomputes the coefficients used to evaluate
//! normalized associated Legendre functions at given latitudes: the
//! sectoral seed factors, the four-point recurrence coefficients of
//! Belousov (1962) in the form given by Swarztrauber (1993), and the
//! Fourier coefficients of the Legendre polynomials.
//!
//! Functions are normalized to unity; the Condon-Shortley factor
//! `(-1)^m` is not included.
//!
//! The sectoral values `P_m^m` shrink roughly geometrically with `m` and
//! fall out of `f64` range near degree 2000 even though every recurrence
//! output built from them is well within range. [`LegendreTables::sectoral`]
//! reproduces the native behavior, flushing to zero once a seed drops
//! below the smallest normal double;
//! [`LegendreTables::sectoral_extended`] carries the same recurrence in
//! [`XReal`] arithmetic and stays exact to arbitrary degree.
//!
//! # References
//!
//! - Belousov, S. L., 1962: Tables of normalized associated Legendre
//!   polynomials. Pergamon Press.
//! - Swarztrauber, P. N., 1993: The vector harmonic transform method for
//!   solving partial differential equations in spherical geometry.
//!   Mon. Wea. Rev., 121, 3415–3437.
//! - Fukushima, T., 2011: Numerical computation of spherical harmonics
//!   of arbitrary degree and order by extending exponent of floating
//!   point numbers. J. Geodesy, doi:10.1007/s00190-011-0519-2

use crate::xreal::XReal;

/// Precomputed recurrence coefficients up to a triangular truncation
#[derive(Clone, Debug)]
pub struct LegendreTables {
    ntrunc: usize,
    p00: f64,
    /// Diagonal factors `c[0] = √3`, `c[m] = √(2m + 3)`
    pub c: Vec<f64>,
    /// Sectoral seed factors `d[m] = √(1 + 1/(2m))`; `d[0]` is unused
    pub d: Vec<f64>,
    /// Four-point recurrence coefficient on `P_{n-2}^{m-2}`
    pub e: Vec<f64>,
    /// Four-point recurrence coefficient on `P_{n-2}^{m}`
    pub f: Vec<f64>,
    /// Four-point recurrence coefficient on `P_n^{m-2}`
    pub g: Vec<f64>,
    /// Fourier coefficients `a_{n,k}` of the Legendre polynomials
    pub ank: Vec<f64>,
}

impl LegendreTables {
    /// Precompute all coefficients for truncation wave number `ntrunc`.
    ///
    /// `p00` is the start value and sets the normalization; `1` gives
    /// unit-normalized functions.
    pub fn new(ntrunc: usize, p00: f64) -> Self {
        let n1 = ntrunc + 1;

        let mut c = vec![0.0; n1];
        let mut d = vec![0.0; n1];
        c[0] = 3.0_f64.sqrt();
        for m in 1..n1 {
            c[m] = (2.0 * m as f64 + 3.0).sqrt();
            d[m] = (1.0 + 0.5 / m as f64).sqrt();
        }

        let nn = n1 * (n1 + 1) / 2;
        let mut e = vec![0.0; nn];
        let mut f = vec![0.0; nn];
        let mut g = vec![0.0; nn];
        // the recurrence reaches back two orders, so coefficients start
        // at m = 2; the first two diagonals stay zero
        let mut k = 2 * n1 - 1;
        for m in 2..n1 {
            for n in m..n1 {
                let n_plus_m = (n + m) as f64;
                let n_minus_m = (n - m) as f64;
                let n2 = 2.0 * n as f64;
                let w = 1.0 / ((n_plus_m - 1.0) * n_plus_m);
                let we = w * (n2 + 1.0) / (n2 - 3.0);
                f[k] = (we * n_minus_m * (n_minus_m - 1.0)).sqrt();
                e[k] = (we * (n_plus_m - 2.0) * (n_plus_m - 3.0)).sqrt();
                g[k] = (w * (n_minus_m + 1.0) * (n_minus_m + 2.0)).sqrt();
                k += 1;
            }
        }

        let nh = ntrunc / 2;
        let mut ank = vec![0.0; (nh + 2) * (nh + 1)];
        ank[0] = 2.0 * p00;
        ank[1] = 3.0_f64.sqrt() * p00;
        let mut i = 2;
        for n in 2..n1 {
            let np = (n - 1) / 2 + 1;
            let terms = n / 2;
            let n_f = n as f64;
            ank[i] = (1.0 - 1.0 / (4.0 * n_f * n_f)).sqrt() * ank[i - np];
            i += 1;
            for lh in 1..=terms {
                let l = (2 * lh) as f64;
                let n2l = 2.0 * n_f - l;
                ank[i] = (l - 1.0) * (n2l + 2.0) / (l * (n2l + 1.0)) * ank[i - 1];
                i += 1;
            }
            // a(n, 0), the coefficient of cos 0θ, is halved
            if n == terms * 2 {
                ank[i - 1] *= 0.5;
            }
        }

        Self {
            ntrunc,
            p00,
            c,
            d,
            e,
            f,
            g,
            ank,
        }
    }

    /// Truncation wave number
    #[inline]
    pub fn truncation(&self) -> usize {
        self.ntrunc
    }

    /// Start value `P_0^0`
    #[inline]
    pub fn start_value(&self) -> f64 {
        self.p00
    }

    /// Index of the four-point recurrence coefficients for `(n, m)`,
    /// `m <= n <= ntrunc`
    #[inline]
    pub fn recurrence_index(&self, n: usize, m: usize) -> usize {
        let n1 = self.ntrunc + 1;
        m * (2 * n1 - m + 1) / 2 + (n - m)
    }

    /// Sectoral harmonics `P_m^m(coslat = u)` for `m` in `0..=ntrunc`.
    ///
    /// Native arithmetic: once a value falls below the smallest normal
    /// `f64` the remainder of the diagonal is flushed to zero.
    pub fn sectoral(&self, u: f64) -> Vec<f64> {
        let n1 = self.ntrunc + 1;
        let mut ps = vec![0.0; n1];
        ps[0] = self.p00;
        for m in 1..n1 {
            if ps[m - 1].abs() <= f64::MIN_POSITIVE {
                break;
            }
            ps[m] = (self.d[m] * u) * ps[m - 1];
        }
        ps
    }

    /// Sectoral harmonics `P_m^m(coslat = u)` in extended arithmetic.
    ///
    /// The recurrence is identical to [`LegendreTables::sectoral`] but
    /// carried in [`XReal`], so no diagonal entry underflows however
    /// large the truncation; values agree bit for bit with the native
    /// path wherever that path stays in normal `f64` range.
    pub fn sectoral_extended(&self, u: f64) -> Vec<XReal> {
        let n1 = self.ntrunc + 1;
        let mut ps = Vec::with_capacity(n1);
        ps.push(XReal::from(self.p00));
        for m in 1..n1 {
            let next = (self.d[m] * u) * ps[m - 1];
            ps.push(next);
        }
        ps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_diagonal_factors() {
        let tables = LegendreTables::new(5, 1.0);
        assert!((tables.c[0] - 3.0_f64.sqrt()).abs() < TOL);
        for m in 1..=5 {
            assert!((tables.c[m] - (2.0 * m as f64 + 3.0).sqrt()).abs() < TOL);
            assert!((tables.d[m] - (1.0 + 0.5 / m as f64).sqrt()).abs() < TOL);
        }
    }

    #[test]
    fn test_recurrence_coefficients() {
        let tables = LegendreTables::new(4, 1.0);
        // the first two diagonals carry no recurrence
        for m in 0..2 {
            for n in m..=4 {
                let k = tables.recurrence_index(n, m);
                assert_eq!(tables.e[k], 0.0);
                assert_eq!(tables.f[k], 0.0);
                assert_eq!(tables.g[k], 0.0);
            }
        }
        // (n, m) = (2, 2) by hand
        let k = tables.recurrence_index(2, 2);
        let w: f64 = 1.0 / (3.0 * 4.0);
        let we = w * 5.0 / 1.0;
        assert!((tables.e[k] - (we * 2.0 * 1.0).sqrt()).abs() < TOL);
        assert_eq!(tables.f[k], 0.0);
        assert!((tables.g[k] - (w * 1.0 * 2.0).sqrt()).abs() < TOL);
        // (n, m) = (4, 2) by hand
        let k = tables.recurrence_index(4, 2);
        let w: f64 = 1.0 / (5.0 * 6.0);
        let we = w * 9.0 / 5.0;
        assert!((tables.e[k] - (we * 4.0 * 3.0).sqrt()).abs() < TOL);
        assert!((tables.f[k] - (we * 2.0 * 1.0).sqrt()).abs() < TOL);
        assert!((tables.g[k] - (w * 3.0 * 4.0).sqrt()).abs() < TOL);
    }

    #[test]
    fn test_fourier_coefficients_low_degrees() {
        let p00 = 1.0 / 2.0_f64.sqrt();
        let tables = LegendreTables::new(3, p00);
        // P_0 = p00: a(0,0) = 2 p00
        assert!((tables.ank[0] - 2.0 * p00).abs() < TOL);
        // P_1 = √3 p00 cos θ
        assert!((tables.ank[1] - 3.0_f64.sqrt() * p00).abs() < TOL);
        // P_2 = √5 p00 (3 cos 2θ + 1)/2: leading coefficient 3√5 p00/4,
        // constant term √5 p00/4 stored doubled then halved
        let a2_lead = (1.0_f64 - 1.0 / 16.0).sqrt() * tables.ank[1];
        assert!((tables.ank[2] - a2_lead).abs() < TOL);
        assert!((tables.ank[2] - 3.0 * 5.0_f64.sqrt() * p00 / 4.0).abs() < TOL);
        assert!((tables.ank[3] - 5.0_f64.sqrt() * p00 / 4.0).abs() < TOL);
        // P_3: leading coefficient reaches back to the P_2 leader
        let a3_lead = (1.0_f64 - 1.0 / 36.0).sqrt() * tables.ank[2];
        assert!((tables.ank[4] - a3_lead).abs() < TOL);
        assert!((tables.ank[5] - (1.0 * 6.0) / (2.0 * 5.0) * a3_lead).abs() < TOL);
    }

    #[test]
    fn test_sectoral_matches_closed_form() {
        // P_m^m(u) = p00 u^m Π_{j=1..m} √(1 + 1/(2j))
        let tables = LegendreTables::new(6, 1.0);
        let u = 0.8;
        let ps = tables.sectoral(u);
        let mut expected = 1.0;
        for (m, &p) in ps.iter().enumerate() {
            if m > 0 {
                expected *= (1.0 + 0.5 / m as f64).sqrt() * u;
            }
            assert!((p - expected).abs() < TOL, "P_{m}^{m}");
        }
    }

    #[test]
    fn test_sectoral_flushes_extended_continues() {
        // u small enough that the diagonal underflows quickly
        let tables = LegendreTables::new(400, 1.0);
        let u = 1.0e-3;
        let native = tables.sectoral(u);
        let extended = tables.sectoral_extended(u);

        let cutoff = native.iter().position(|&p| p == 0.0).unwrap();
        assert!(cutoff > 50, "cutoff unexpectedly early: {cutoff}");

        // bit agreement wherever the native path stays in normal range;
        // the last nonzero native entry may be subnormal and rounded
        for m in 0..cutoff {
            if native[m].abs() >= f64::MIN_POSITIVE {
                assert_eq!(native[m], extended[m].to_f64(), "m = {m}");
            }
        }
        // the extended path keeps going at full precision
        for m in cutoff..=400 {
            assert!(!extended[m].is_zero(), "extended flushed at {m}");
        }
        let (mant, exp) = extended[400].to_decimal();
        assert!((1.0..10.0).contains(&mant.abs()));
        assert!(exp < -1000, "exponent {exp} not deep below native range");
    }

    #[test]
    fn test_sectoral_extended_zero_latitude() {
        // u = 0 zeroes the whole diagonal above m = 0
        let tables = LegendreTables::new(10, 1.0);
        let ps = tables.sectoral_extended(0.0);
        assert_eq!(ps[0].to_f64(), 1.0);
        for p in &ps[1..] {
            assert!(p.is_zero());
        }
    }
}
