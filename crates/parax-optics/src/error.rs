use thiserror::Error;

/// Error types for the optical data model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A transfer matrix was built from input that is not 4x4.
    #[error("expected a 4x4 transfer matrix, got {rows}x{cols}")]
    Shape {
        /// Number of rows of the offending input.
        rows: usize,
        /// Number of columns of the offending input.
        cols: usize,
    },

    /// A pilot bundle was built without any rays.
    #[error("pilot bundle contains no rays")]
    EmptyBundle,

    /// Parallel per-ray arrays with different lengths.
    #[error("mismatched array lengths: {left_name} ({left_len}) != {right_name} ({right_len})")]
    MismatchedLengths {
        /// Label for the left-hand slice.
        left_name: &'static str,
        /// Length of the left-hand slice.
        left_len: usize,
        /// Label for the right-hand slice.
        right_name: &'static str,
        /// Length of the right-hand slice.
        right_len: usize,
    },
}
