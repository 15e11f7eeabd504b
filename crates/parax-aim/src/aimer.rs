//! The ray-aiming engine.
//!
//! The aimer caches a linear model of the optical system (an active pilot
//! bundle and the object-to-stop / stop-to-image transfer matrices) and
//! inverts the stop-plane sampling constraint
//! `dr_stop = A * dr_obj + B * dk_obj` into object-plane ray
//! perturbations, one solve mode per field kind.

use glam::{DMat3, DVec2, DVec3};
use nalgebra::Vector2;

use parax_optics::{
    OpticalSystem, PilotSource, RayBundle, Sequence, TransferMatrix, STANDARD_WAVELENGTH,
};
use parax_sampling::{PupilRaster, RectGrid};

use crate::error::AimError;
use crate::field::FieldKind;
use crate::model::{LinearModel, LinearModelObserver, PilotSelection};

// Pilot bundle stencil properties, equal in x and y.
const PILOT_POSITION_STEP: f64 = 0.1;
const PILOT_ANGLE_STEP: f64 = std::f64::consts::PI / 180.0;
const PILOT_SAMPLING_POINTS: usize = 3;

/// Configuration of an [`Aimer`].
#[derive(Debug, Clone, PartialEq)]
pub struct AimerConfig {
    /// Wavelength stamped on produced bundles, in millimeters.
    pub wavelength: f64,
    /// Number of pupil sampling points per bundle.
    pub pupil_points: usize,
    /// Stop half-aperture the normalized raster is scaled by.
    pub stop_size: f64,
    /// Pilot bundle selection policy.
    pub selection: PilotSelection,
}

impl Default for AimerConfig {
    fn default() -> Self {
        Self {
            wavelength: STANDARD_WAVELENGTH,
            pupil_points: 100,
            stop_size: 10.0,
            selection: PilotSelection::default(),
        }
    }
}

/// The ray aimer.
///
/// Holds the cached linear model between [`Aimer::update`] calls and
/// produces freshly allocated ray bundles from field specifications. Not
/// internally synchronized: `update` must not race in-flight `aim` calls
/// on a shared instance; give each worker its own aimer instead.
pub struct Aimer {
    config: AimerConfig,
    pupil_grid: Vec<DVec2>,
    observer: Option<Box<dyn LinearModelObserver>>,
    model: LinearModel,
}

impl Aimer {
    /// Create an aimer and derive its initial linear model.
    ///
    /// Uses the rectangular raster; swap it with [`Aimer::with_raster`].
    ///
    /// # Errors
    ///
    /// Fails when the sequence resolves to no object surface, the pilot
    /// source yields no usable candidate, or a derived transfer matrix
    /// is not 4x4.
    pub fn new<S, P>(
        system: &S,
        pilots: &P,
        sequence: &Sequence,
        config: AimerConfig,
    ) -> Result<Self, AimError>
    where
        S: OpticalSystem,
        P: PilotSource,
    {
        let pupil_grid = RectGrid.grid(config.pupil_points);
        let model = derive_model(system, pilots, sequence, config.selection, None)?;
        Ok(Self {
            config,
            pupil_grid,
            observer: None,
            model,
        })
    }

    /// Regenerate the cached pupil grid from a different raster.
    pub fn with_raster(mut self, raster: &dyn PupilRaster) -> Self {
        self.pupil_grid = raster.grid(self.config.pupil_points);
        self
    }

    /// Attach a diagnostic observer, notified on each following update.
    pub fn with_observer(mut self, observer: Box<dyn LinearModelObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Recompute the cached linear model for a (changed) system or
    /// sequence.
    ///
    /// On failure the previously cached model stays in place.
    pub fn update<S, P>(
        &mut self,
        system: &S,
        pilots: &P,
        sequence: &Sequence,
    ) -> Result<(), AimError>
    where
        S: OpticalSystem,
        P: PilotSource,
    {
        self.model = derive_model(
            system,
            pilots,
            sequence,
            self.config.selection,
            self.observer.as_deref(),
        )?;
        Ok(())
    }

    /// Aim a bundle: solve for object-plane perturbations matching the
    /// configured stop sampling and assemble the rays.
    ///
    /// # Arguments
    ///
    /// * `system` - Optical system, used for the direction-to-wavevector
    ///   mapping in angle mode.
    /// * `delta` - Field value, interpreted per `kind`.
    /// * `kind` - Field specification kind.
    ///
    /// # Errors
    ///
    /// [`AimError::LinearSolve`] when the required transfer-matrix block
    /// is singular, [`AimError::UnsupportedFieldKind`] for the
    /// wavevector variant. A failed solve never yields a partially
    /// populated bundle.
    pub fn aim<S: OpticalSystem>(
        &self,
        system: &S,
        delta: DVec2,
        kind: FieldKind,
    ) -> Result<RayBundle, AimError> {
        let (dr_obj, dk_obj) = match kind {
            FieldKind::Angle => self.solve_angle_known(system, delta)?,
            FieldKind::ObjectHeight => self.solve_object_height_known(delta)?,
            FieldKind::Wavevector => {
                return Err(AimError::UnsupportedFieldKind(kind.to_string()))
            }
        };
        self.assemble(&dr_obj, &dk_obj)
    }

    /// The cached linear model.
    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// The cached normalized pupil grid.
    pub fn pupil_grid(&self) -> &[DVec2] {
        &self.pupil_grid
    }

    /// The aimer configuration.
    pub fn config(&self) -> &AimerConfig {
        &self.config
    }

    /// Angle-known mode: the chief direction is the pilot reference
    /// direction rotated by the field angles; the position perturbation
    /// is solved for.
    fn solve_angle_known<S: OpticalSystem>(
        &self,
        system: &S,
        theta: DVec2,
    ) -> Result<(Vec<Vector2<f64>>, Vec<Vector2<f64>>), AimError> {
        // Rotation about y by theta.x, then about x by theta.y on top.
        // The composition order is fixed and not commutative.
        let rotation =
            DMat3::from_axis_angle(DVec3::X, theta.y) * DMat3::from_axis_angle(DVec3::Y, theta.x);

        let frame = &self.model.object_frame;
        let d_pilot = frame.global_to_local_direction(self.model.pilot.reference_direction());
        let k_pilot = frame.global_to_local_direction(self.model.pilot.reference_wavevector());

        let chief = rotation * d_pilot;
        let k_chief = system.direction_to_wavevector(chief);
        let dk = k_chief - k_pilot;
        // One field point: the same angular perturbation for all samples.
        let dk_obj = Vector2::new(dk.x, dk.y);

        let blocks = self.model.obj_stop.blocks();
        let a_inv = blocks
            .a
            .try_inverse()
            .ok_or(AimError::LinearSolve { block: "A" })?;
        let angular_part = blocks.b * dk_obj;

        let mut dr = Vec::with_capacity(self.pupil_grid.len());
        let mut dk_all = Vec::with_capacity(self.pupil_grid.len());
        for point in &self.pupil_grid {
            let dr_stop = Vector2::new(point.x, point.y) * self.config.stop_size;
            dr.push(a_inv * (dr_stop - angular_part));
            dk_all.push(dk_obj);
        }
        Ok((dr, dk_all))
    }

    /// Object-height-known mode: the field point is fixed; the angular
    /// perturbation filling the pupil is solved for.
    fn solve_object_height_known(
        &self,
        delta: DVec2,
    ) -> Result<(Vec<Vector2<f64>>, Vec<Vector2<f64>>), AimError> {
        let dr_obj = Vector2::new(delta.x, delta.y);

        let blocks = self.model.obj_stop.blocks();
        let b_inv = blocks
            .b
            .try_inverse()
            .ok_or(AimError::LinearSolve { block: "B" })?;
        let positional_part = blocks.a * dr_obj;

        let mut dr = Vec::with_capacity(self.pupil_grid.len());
        let mut dk = Vec::with_capacity(self.pupil_grid.len());
        for point in &self.pupil_grid {
            let dr_stop = Vector2::new(point.x, point.y) * self.config.stop_size;
            dr.push(dr_obj);
            dk.push(b_inv * (dr_stop - positional_part));
        }
        Ok((dr, dk))
    }

    /// Assemble the output bundle from per-sample 2-D perturbations.
    fn assemble(
        &self,
        dr_obj: &[Vector2<f64>],
        dk_obj: &[Vector2<f64>],
    ) -> Result<RayBundle, AimError> {
        let frame = &self.model.object_frame;
        let basis_t = frame.basis().transpose();
        let r_ref = frame.global_to_local_point(self.model.pilot.reference_position());
        let k_ref = frame.global_to_local_direction(self.model.pilot.reference_wavevector());
        let amplitude = self.model.pilot.reference_amplitude();

        let n = dr_obj.len();
        let mut positions = Vec::with_capacity(n);
        let mut wavevectors = Vec::with_capacity(n);
        for (dr, dk) in dr_obj.iter().zip(dk_obj.iter()) {
            // Perturbations stay in the meridional plane: zero third
            // component before the change of basis.
            let dr3 = DVec3::new(dr.x, dr.y, 0.0);
            let dk3 = DVec3::new(dk.x, dk.y, 0.0);
            positions.push(r_ref + basis_t * dr3);
            wavevectors.push(k_ref + basis_t * dk3);
        }
        // First-order aiming does not perturb the field amplitude.
        let amplitudes = vec![amplitude; n];
        Ok(RayBundle::new(
            positions,
            wavevectors,
            amplitudes,
            self.config.wavelength,
        )?)
    }
}

/// Derive a fresh linear model: resolve the object surface, build and
/// select the pilot bundle, extract and validate both transfer matrices.
fn derive_model<S, P>(
    system: &S,
    pilots: &P,
    sequence: &Sequence,
    selection: PilotSelection,
    observer: Option<&dyn LinearModelObserver>,
) -> Result<LinearModel, AimError>
where
    S: OpticalSystem,
    P: PilotSource,
{
    let (element, surface_name) = sequence.first_surface().ok_or(AimError::EmptySequence)?;
    let surface = system
        .surface(element, surface_name)
        .ok_or_else(|| AimError::UnknownSurface {
            element: element.to_string(),
            surface: surface_name.to_string(),
        })?;
    let material = system.background_material();

    let candidates = pilots.build(
        surface,
        material,
        (PILOT_POSITION_STEP, PILOT_POSITION_STEP),
        (PILOT_ANGLE_STEP, PILOT_ANGLE_STEP),
        PILOT_SAMPLING_POINTS,
    )?;
    log::debug!("pilot source returned {} candidate bundles", candidates.len());
    let pilot = selection
        .select(&candidates)
        .ok_or(AimError::NoPilotCandidates)?
        .clone();

    let (m_obj_stop, m_stop_img) = system.extract_linear(&pilot, sequence)?;
    let obj_stop = TransferMatrix::try_from_dmatrix(&m_obj_stop)?;
    let stop_img = TransferMatrix::try_from_dmatrix(&m_stop_img)?;
    if let Some(observer) = observer {
        observer.linear_model(&obj_stop, &stop_img);
    }

    Ok(LinearModel {
        pilot,
        obj_stop,
        stop_img,
        object_frame: surface.frame.clone(),
    })
}
