//! Hybrid sigma-pressure vertical coordinates
//!
//! A hybrid coordinate defines half-level pressures
//! `p_half[j] = a[j] + b[j] (ps - ptop)` from per-level coefficient pairs
//! `(a, b)`: pure pressure near the model top (`b = 0`) blending into
//! terrain-following sigma near the surface (`a = 0, b = 1`). Layers are
//! indexed top down; layer `k` lies between half levels `k` and `k + 1`.
//!
//! The alpha/beta coefficients follow the energy-conserving
//! finite-difference formulation of Simmons and Burridge (1981), with the
//! top layer pinned at `alpha = ln 2` as in Ritchie et al. (1994).
//!
//! # References
//!
//! - Eckermann (2009) MWR
//! - Ritchie et al. (1994) MWR
//! - Simmons and Burridge (1981) MWR

use crate::constants::air;
use crate::error::{Error, Result};

/// Half-level, thickness and full-level pressures for one column
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PressureProfile {
    /// Half-level pressure, Pa; `layers + 1` entries, top first
    pub half: Vec<f64>,
    /// Layer thickness, Pa; `layers` entries
    pub thickness: Vec<f64>,
    /// Full-level (layer midpoint) pressure, Pa; `layers` entries
    pub full: Vec<f64>,
}

/// Hybrid sigma-pressure coordinate definition
#[derive(Clone, Debug)]
pub struct HybridCoordinate {
    a: Vec<f64>,
    b: Vec<f64>,
    db: Vec<f64>,
    ptop: f64,
}

impl HybridCoordinate {
    /// Create from half-level coefficients, top first.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] when `a` and `b` differ in length,
    /// [`Error::InvalidArgument`] when fewer than two half levels are
    /// given.
    pub fn new(a: &[f64], b: &[f64], ptop: f64) -> Result<Self> {
        if a.len() != b.len() {
            return Err(Error::dimension_mismatch(a.len(), b.len()));
        }
        if a.len() < 2 {
            return Err(Error::invalid_argument(
                "a",
                "a hybrid coordinate needs at least two half levels",
            ));
        }
        let db = b.windows(2).map(|w| w[1] - w[0]).collect();
        Ok(Self {
            a: a.to_vec(),
            b: b.to_vec(),
            db,
            ptop,
        })
    }

    /// Number of layers
    #[inline]
    pub fn layers(&self) -> usize {
        self.a.len() - 1
    }

    /// Hybrid A coefficients (pressure part), Pa
    #[inline]
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Hybrid B coefficients (sigma part)
    #[inline]
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Per-layer sigma increments `b[k + 1] - b[k]`
    #[inline]
    pub fn db(&self) -> &[f64] {
        &self.db
    }

    /// Model-top pressure, Pa
    #[inline]
    pub fn ptop(&self) -> f64 {
        self.ptop
    }

    /// Half-level, thickness and full-level pressures for surface
    /// pressure `ps`.
    pub fn pressure(&self, ps: f64) -> PressureProfile {
        let half: Vec<f64> = self
            .a
            .iter()
            .zip(&self.b)
            .map(|(&a, &b)| a + b * (ps - self.ptop))
            .collect();
        let thickness: Vec<f64> = half.windows(2).map(|w| w[1] - w[0]).collect();
        let full: Vec<f64> = half.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
        PressureProfile {
            half,
            thickness,
            full,
        }
    }

    /// Alpha and beta coefficients from half-level pressures.
    ///
    /// `alpha[0]` is pinned at `ln 2`; `beta[0]` is unused by the
    /// hydrostatic integration and set to zero.
    pub fn alpha_beta(&self, profile: &PressureProfile) -> (Vec<f64>, Vec<f64>) {
        let n = self.layers();
        let mut alpha = vec![0.0; n];
        let mut beta = vec![0.0; n];
        alpha[0] = std::f64::consts::LN_2;
        for k in 1..n {
            beta[k] = (profile.half[k + 1] / profile.half[k]).ln();
            alpha[k] = 1.0 - profile.half[k] / profile.thickness[k] * beta[k];
        }
        (alpha, beta)
    }

    /// Full-level geopotential by hydrostatic integration, bottom up.
    ///
    /// `tv` holds layer virtual temperatures, top first; the result has
    /// the same ordering.
    pub fn geopotential(
        &self,
        surface_geopotential: f64,
        alpha: &[f64],
        beta: &[f64],
        tv: &[f64],
    ) -> Vec<f64> {
        let n = self.layers();
        let mut gz = vec![0.0; n];
        let mut gz_half = surface_geopotential;
        for k in (0..n).rev() {
            gz[k] = gz_half + alpha[k] * air::RD * tv[k];
            gz_half += beta[k] * air::RD * tv[k];
        }
        gz
    }
}
