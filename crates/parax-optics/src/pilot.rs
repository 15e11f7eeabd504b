use glam::DVec3;

use crate::error::CoreError;
use crate::ray::RayBundle;

/// A pilot bundle: a small set of near-axis rays linearizing the system
/// around one field/aperture point.
///
/// Sample 0 is the designated reference ray. The finite-difference
/// stencil `order` records how the bundle was built; higher orders carry
/// less differentiation error.
#[derive(Debug, Clone, PartialEq)]
pub struct PilotBundle {
    order: usize,
    rays: RayBundle,
}

impl PilotBundle {
    /// Create a pilot bundle from a stencil order and its ray data.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyBundle`] when `rays` holds no rays,
    /// since the reference sample would not exist.
    pub fn new(order: usize, rays: RayBundle) -> Result<Self, CoreError> {
        if rays.is_empty() {
            return Err(CoreError::EmptyBundle);
        }
        Ok(Self { order, rays })
    }

    /// Finite-difference stencil order of this bundle.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The underlying ray data.
    pub fn rays(&self) -> &RayBundle {
        &self.rays
    }

    /// Global position of the reference ray (sample 0).
    pub fn reference_position(&self) -> DVec3 {
        self.rays.positions()[0]
    }

    /// Global wavevector of the reference ray.
    pub fn reference_wavevector(&self) -> DVec3 {
        self.rays.wavevectors()[0]
    }

    /// Unit propagation direction of the reference ray.
    pub fn reference_direction(&self) -> DVec3 {
        self.rays.wavevectors()[0].normalize()
    }

    /// Field amplitude of the reference ray.
    pub fn reference_amplitude(&self) -> DVec3 {
        self.rays.amplitudes()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_ray_bundle() -> RayBundle {
        RayBundle::new(
            vec![DVec3::new(0.5, 0.0, 0.0)],
            vec![DVec3::new(0.0, 0.0, 2.0)],
            vec![DVec3::Y],
            550.0e-6,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_bundle() {
        let empty = RayBundle::new(vec![], vec![], vec![], 550.0e-6).unwrap();
        assert!(matches!(
            PilotBundle::new(3, empty),
            Err(CoreError::EmptyBundle)
        ));
    }

    #[test]
    fn test_reference_sample_is_index_zero() {
        let pilot = PilotBundle::new(2, one_ray_bundle()).unwrap();
        assert_eq!(pilot.order(), 2);
        assert_eq!(pilot.reference_position(), DVec3::new(0.5, 0.0, 0.0));
        assert_eq!(pilot.reference_wavevector(), DVec3::new(0.0, 0.0, 2.0));
        assert_eq!(pilot.reference_direction(), DVec3::Z);
        assert_eq!(pilot.reference_amplitude(), DVec3::Y);
    }
}
