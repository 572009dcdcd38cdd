//! Physical constant tables
//!
//! Values are grouped by domain:
//!
//! - [`air`]: thermodynamic constants of dry air and water vapour
//! - [`earth`]: figure and rotation of the Earth
//! - [`isa`]: the International Standard Atmosphere base levels

pub mod air;
pub mod earth;
pub mod isa;
