#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Rasters produce normalized 2-D sample points in [-1, 1]^2 that the ray
//! aimer scales by the stop half-aperture. A raster is deterministic: the
//! same raster value yields the identical grid on every call, so ray
//! sample identity is stable across aiming calls.

mod raster;
pub use raster::{PupilRaster, RandomGrid, RectGrid};
