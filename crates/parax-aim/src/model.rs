//! Cached pilot linear model and its selection/observation seams.

use parax_optics::{LocalFrame, PilotBundle, TransferMatrix};

/// Policy for picking the active pilot bundle out of the candidates
/// returned by the pilot source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotSelection {
    /// Pick the candidate with the highest stencil order, which carries
    /// the least differentiation error. This is the default.
    HighestOrder,
    /// Pick the candidate at a fixed index in the returned order.
    Index(usize),
}

impl Default for PilotSelection {
    fn default() -> Self {
        PilotSelection::HighestOrder
    }
}

impl PilotSelection {
    /// Select the active bundle from `candidates`, or `None` when the
    /// policy cannot be satisfied.
    pub fn select<'a>(&self, candidates: &'a [PilotBundle]) -> Option<&'a PilotBundle> {
        match self {
            PilotSelection::HighestOrder => candidates.iter().max_by_key(|p| p.order()),
            PilotSelection::Index(index) => candidates.get(*index),
        }
    }
}

/// The linearization point cached by the aimer between `update` calls.
///
/// Written only by `update`; read-only during aiming.
#[derive(Debug, Clone)]
pub struct LinearModel {
    /// Active pilot bundle, the linearization point.
    pub pilot: PilotBundle,
    /// Object-to-stop transfer matrix.
    pub obj_stop: TransferMatrix,
    /// Stop-to-image transfer matrix.
    pub stop_img: TransferMatrix,
    /// Coordinate frame of the object surface.
    pub object_frame: LocalFrame,
}

/// Observer of the transfer matrices derived during `update`.
///
/// Diagnostic side channel only; aiming results do not depend on it.
pub trait LinearModelObserver {
    /// Called once per `update` with the freshly derived matrices.
    fn linear_model(&self, obj_stop: &TransferMatrix, stop_img: &TransferMatrix);
}

/// Observer logging the derived matrices at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl LinearModelObserver for LogObserver {
    fn linear_model(&self, obj_stop: &TransferMatrix, stop_img: &TransferMatrix) {
        log::debug!("object-to-stop transfer matrix: {}", obj_stop.matrix());
        log::debug!("stop-to-image transfer matrix: {}", stop_img.matrix());
    }
}
