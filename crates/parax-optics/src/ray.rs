use glam::DVec3;

use crate::error::CoreError;

/// A bundle of rays sharing one wavelength.
///
/// Each ray carries a 3-D position, a 3-D wavevector and a 3-D field
/// amplitude. The bundle is the unit handed to a raytracer: the aiming
/// engine produces freshly allocated bundles and retains no aliasing.
#[derive(Debug, Clone, PartialEq)]
pub struct RayBundle {
    // Per-ray data, all three vectors have identical length.
    positions: Vec<DVec3>,
    wavevectors: Vec<DVec3>,
    amplitudes: Vec<DVec3>,
    wavelength: f64,
}

impl RayBundle {
    /// Create a ray bundle from per-ray positions, wavevectors and
    /// amplitudes plus the shared wavelength.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MismatchedLengths`] when the three arrays do
    /// not have identical lengths.
    pub fn new(
        positions: Vec<DVec3>,
        wavevectors: Vec<DVec3>,
        amplitudes: Vec<DVec3>,
        wavelength: f64,
    ) -> Result<Self, CoreError> {
        if positions.len() != wavevectors.len() {
            return Err(CoreError::MismatchedLengths {
                left_name: "positions",
                left_len: positions.len(),
                right_name: "wavevectors",
                right_len: wavevectors.len(),
            });
        }
        if positions.len() != amplitudes.len() {
            return Err(CoreError::MismatchedLengths {
                left_name: "positions",
                left_len: positions.len(),
                right_name: "amplitudes",
                right_len: amplitudes.len(),
            });
        }
        Ok(Self {
            positions,
            wavevectors,
            amplitudes,
            wavelength,
        })
    }

    /// Number of rays in the bundle.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the bundle is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Ray positions.
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Ray wavevectors.
    pub fn wavevectors(&self) -> &[DVec3] {
        &self.wavevectors
    }

    /// Ray field amplitudes.
    pub fn amplitudes(&self) -> &[DVec3] {
        &self.amplitudes
    }

    /// Shared wavelength of the bundle.
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Unit propagation direction of ray `index`, or `None` when out of
    /// bounds.
    pub fn direction(&self, index: usize) -> Option<DVec3> {
        self.wavevectors.get(index).map(|k| k.normalize())
    }
}
