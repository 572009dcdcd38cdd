//! Thermodynamic constants of dry air and water vapour

/// Gas constant of dry air, J K⁻¹ kg⁻¹
pub const RD: f64 = 287.0;

/// Specific heat of dry air at constant pressure, J K⁻¹ kg⁻¹
pub const CP: f64 = 1004.0;

/// Specific heat of dry air at constant volume, J K⁻¹ kg⁻¹
pub const CV: f64 = 717.0;

/// Reference surface pressure, Pa
pub const P0: f64 = 1013.0e2;

/// Freezing temperature, K
pub const T0: f64 = 273.15;

/// Gas constant of water vapour, J K⁻¹ kg⁻¹
pub const RV: f64 = 461.0;

/// `Rd / cp`
pub const KAPPA: f64 = RD / CP;

/// `cp / cv`
pub const GAMMA: f64 = CP / CV;

/// `Rd / Rv`
pub const EPS: f64 = RD / RV;
