use glam::{DMat3, DVec3};

/// A surface-local coordinate frame.
///
/// The frame is an orthonormal basis plus an origin, both expressed in
/// global coordinates. The basis columns are the local x, y, z axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFrame {
    basis: DMat3,
    origin: DVec3,
}

impl LocalFrame {
    /// Create a frame from an orthonormal basis and an origin.
    ///
    /// PRECONDITION: `basis` is orthonormal; this is not re-checked here.
    pub fn new(basis: DMat3, origin: DVec3) -> Self {
        Self { basis, origin }
    }

    /// The frame coinciding with the global frame.
    pub fn identity() -> Self {
        Self {
            basis: DMat3::IDENTITY,
            origin: DVec3::ZERO,
        }
    }

    /// The orthonormal local basis, columns being the local axes in
    /// global coordinates.
    pub fn basis(&self) -> DMat3 {
        self.basis
    }

    /// Frame origin in global coordinates.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Transform a point from global into local coordinates.
    pub fn global_to_local_point(&self, point: DVec3) -> DVec3 {
        self.basis.transpose() * (point - self.origin)
    }

    /// Transform a direction from global into local coordinates.
    ///
    /// Directions are not affected by the frame origin.
    pub fn global_to_local_direction(&self, direction: DVec3) -> DVec3 {
        self.basis.transpose() * direction
    }

    /// Transform a direction from local into global coordinates.
    pub fn local_to_global_direction(&self, direction: DVec3) -> DVec3 {
        self.basis * direction
    }
}

impl Default for LocalFrame {
    fn default() -> Self {
        Self::identity()
    }
}
