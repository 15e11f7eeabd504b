use parax_optics::CoreError;
use thiserror::Error;

/// Error types for ray aiming.
#[derive(Debug, Error)]
pub enum AimError {
    /// Malformed data from a collaborator (matrix shape, empty or
    /// mismatched bundles).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A required transfer-matrix block is singular, e.g. an afocal
    /// conjugate. The solve is refused rather than producing NaN/Inf.
    #[error("singular {block} block in the object-to-stop transfer matrix")]
    LinearSolve {
        /// Name of the singular block, `"A"` or `"B"`.
        block: &'static str,
    },

    /// Unknown or not-yet-implemented field specification tag.
    #[error("unsupported field kind: {0}")]
    UnsupportedFieldKind(String),

    /// Zero pupil distance or magnification in field mapping.
    #[error("division by zero: {quantity} is zero")]
    DivideByZero {
        /// The vanishing quantity.
        quantity: &'static str,
    },

    /// The trace sequence resolves to no object surface.
    #[error("sequence contains no surfaces")]
    EmptySequence,

    /// A surface named by the sequence does not exist in the system.
    #[error("unknown surface {surface:?} in element {element:?}")]
    UnknownSurface {
        /// Element name from the sequence.
        element: String,
        /// Surface name from the sequence.
        surface: String,
    },

    /// The pilot source returned no candidate bundles to select from.
    #[error("pilot source returned no candidate bundles")]
    NoPilotCandidates,
}
