use glam::DVec3;
use nalgebra::{DMatrix, Matrix2};

use crate::error::CoreError;
use crate::frame::LocalFrame;
use crate::material::Material;
use crate::pilot::PilotBundle;
use crate::ray::RayBundle;
use crate::sequence::Sequence;

/// A named optical surface with its local coordinate frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Surface name within its element.
    pub name: String,
    /// Surface-local coordinate frame.
    pub frame: LocalFrame,
}

impl Surface {
    /// Create a surface from its name and frame.
    pub fn new(name: impl Into<String>, frame: LocalFrame) -> Self {
        Self {
            name: name.into(),
            frame,
        }
    }
}

/// Result of the paraxial pupil query of an optical system.
#[derive(Debug, Clone, PartialEq)]
pub struct ParaxialPupil {
    /// Entrance pupil position along the axis, relative to the object.
    pub entrance_pupil_z: f64,
    /// Entrance pupil magnification.
    pub entrance_magnification: f64,
    /// Exit pupil position along the axis, relative to the image.
    pub exit_pupil_z: f64,
    /// Exit pupil magnification.
    pub exit_magnification: f64,
    /// ABCD-style object-to-stop relation.
    pub obj_stop: Matrix2<f64>,
    /// ABCD-style stop-to-image relation.
    pub stop_img: Matrix2<f64>,
}

/// The optical system as consumed by the ray aimer.
///
/// This is a narrow interface over an external tracing engine; the aimer
/// never looks at surface geometry directly.
pub trait OpticalSystem {
    /// Paraxial pupil data for the given reference ray bundle.
    fn paraxial_pupil(&self, ray: &RayBundle) -> Result<ParaxialPupil, CoreError>;

    /// Paraxial magnification for the given reference ray bundle.
    fn paraxial_magnification(&self, ray: &RayBundle) -> Result<f64, CoreError>;

    /// Trace the pilot bundle through `sequence` and extract the linear
    /// object/stop/image relation.
    ///
    /// Returns the object-to-stop and stop-to-image transfer matrices.
    /// Both are expected to be 4x4; the caller validates the shape.
    fn extract_linear(
        &self,
        pilot: &PilotBundle,
        sequence: &Sequence,
    ) -> Result<(DMatrix<f64>, DMatrix<f64>), CoreError>;

    /// Look up a surface by element and surface name.
    fn surface(&self, element: &str, name: &str) -> Option<&Surface>;

    /// The background material the pilot ray starts in.
    ///
    /// Objects immersed in a different medium are not supported; the
    /// pilot ray always starts in the background.
    fn background_material(&self) -> &Material;

    /// Map a unit propagation direction to a wavevector.
    ///
    /// The default keeps the unit direction unchanged, the paraxial
    /// convention for a non-dispersive background. Systems with a
    /// dispersion relation override this.
    fn direction_to_wavevector(&self, direction: DVec3) -> DVec3 {
        direction
    }
}

/// Builder for candidate pilot bundles.
///
/// Implementations trace finite-difference stencils of increasing order
/// around the reference ray; the returned bundles are ordered by
/// ascending stencil order.
pub trait PilotSource {
    /// Build candidate pilot bundles on `surface` starting in `material`.
    ///
    /// # Arguments
    ///
    /// * `surface` - Object surface the bundles start on.
    /// * `material` - Material the pilot rays start in.
    /// * `position_step` - Finite-difference position step in x and y.
    /// * `angle_step` - Finite-difference angle step in x and y, radians.
    /// * `sampling_points` - Number of sampling points per stencil.
    fn build(
        &self,
        surface: &Surface,
        material: &Material,
        position_step: (f64, f64),
        angle_step: (f64, f64),
        sampling_points: usize,
    ) -> Result<Vec<PilotBundle>, CoreError>;
}
