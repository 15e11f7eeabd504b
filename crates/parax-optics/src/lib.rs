#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! This crate holds the shared data model of the `parax` workspace: ray
//! bundles, paraxial transfer matrices and their ABCD block decomposition,
//! surface coordinate frames, and the narrow traits through which the ray
//! aimer consumes an optical system and a pilot-bundle builder.

/// Error types for the optical data model.
pub mod error;

/// Surface-local coordinate frames.
pub mod frame;

/// Optical materials.
pub mod material;

/// Paraxial transfer matrices and their ABCD block decomposition.
pub mod matrix;

/// Pilot ray bundles used as linearization points.
pub mod pilot;

/// Ray bundles with positions, wavevectors and amplitudes.
pub mod ray;

/// Trace sequences through an optical system.
pub mod sequence;

/// Collaborator traits for optical systems and pilot-bundle builders.
pub mod system;

pub use error::CoreError;
pub use frame::LocalFrame;
pub use material::Material;
pub use matrix::{AbcdBlocks, TransferMatrix};
pub use pilot::PilotBundle;
pub use ray::RayBundle;
pub use sequence::{Sequence, SequenceElement, SurfaceRef};
pub use system::{OpticalSystem, ParaxialPupil, PilotSource, Surface};

/// Default design wavelength in millimeters (550 nm).
pub const STANDARD_WAVELENGTH: f64 = 550.0e-6;
