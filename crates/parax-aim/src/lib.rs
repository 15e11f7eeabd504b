#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # parax-aim
//!
//! Computes how to launch rays from a desired field point (object height
//! or chief-ray angle) so that they correctly sample the aperture stop of
//! an optical system, using a cached linearized (paraxial) model instead
//! of full nonlinear tracing.
//!
//! ## Example
//!
//! ```no_run
//! # fn example<S: parax_optics::OpticalSystem, P: parax_optics::PilotSource>(
//! #     system: &S,
//! #     pilots: &P,
//! #     sequence: &parax_optics::Sequence,
//! # ) -> Result<(), parax_aim::AimError> {
//! use glam::DVec2;
//! use parax_aim::{Aimer, AimerConfig, FieldKind};
//!
//! let aimer = Aimer::new(system, pilots, sequence, AimerConfig::default())?;
//! let bundle = aimer.aim(system, DVec2::new(0.01, 0.0), FieldKind::Angle)?;
//! assert_eq!(bundle.len(), 100);
//! # Ok(())
//! # }
//! ```

pub mod aimer;

/// Error types for ray aiming.
pub mod error;

pub mod field;

pub mod model;

pub use aimer::{Aimer, AimerConfig};
pub use error::AimError;
pub use field::{
    chief_slope_by_chief_angle, chief_slope_by_image_height, chief_slope_by_object_height,
    FieldKind,
};
pub use model::{LinearModel, LinearModelObserver, LogObserver, PilotSelection};
