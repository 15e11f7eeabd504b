use nalgebra::{DMatrix, Matrix2, Matrix4};

use crate::error::CoreError;

/// A 4x4 paraxial transfer matrix over the axes (x, y, u, v).
///
/// The matrix maps an object-plane state (transverse position x, y and
/// angle u, v) to the corresponding state at a later plane, typically the
/// aperture stop or the image.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferMatrix(Matrix4<f64>);

/// The named 2x2 blocks of a [`TransferMatrix`].
///
/// Block positions are structural: rows 0-1/cols 0-1 form `a`
/// (position from position), rows 0-1/cols 2-3 form `b` (position from
/// angle), rows 2-3/cols 0-1 form `c` (angle from position) and rows
/// 2-3/cols 2-3 form `d` (angle from angle).
#[derive(Debug, Clone, PartialEq)]
pub struct AbcdBlocks {
    /// Position-from-position block.
    pub a: Matrix2<f64>,
    /// Position-from-angle block.
    pub b: Matrix2<f64>,
    /// Angle-from-position block.
    pub c: Matrix2<f64>,
    /// Angle-from-angle block.
    pub d: Matrix2<f64>,
}

impl TransferMatrix {
    /// Wrap a statically sized 4x4 matrix.
    pub fn new(matrix: Matrix4<f64>) -> Self {
        Self(matrix)
    }

    /// The identity transfer (propagation through nothing).
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Build a transfer matrix from a dynamically sized matrix, as
    /// returned by the linear-extraction query of an optical system.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Shape`] when the input is not 4x4.
    pub fn try_from_dmatrix(matrix: &DMatrix<f64>) -> Result<Self, CoreError> {
        if matrix.nrows() != 4 || matrix.ncols() != 4 {
            return Err(CoreError::Shape {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        Ok(Self(Matrix4::from_fn(|i, j| matrix[(i, j)])))
    }

    /// The underlying 4x4 matrix.
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.0
    }

    /// Decompose into the named A/B/C/D blocks.
    pub fn blocks(&self) -> AbcdBlocks {
        AbcdBlocks {
            a: self.0.fixed_view::<2, 2>(0, 0).into_owned(),
            b: self.0.fixed_view::<2, 2>(0, 2).into_owned(),
            c: self.0.fixed_view::<2, 2>(2, 0).into_owned(),
            d: self.0.fixed_view::<2, 2>(2, 2).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_blocks() {
        let blocks = TransferMatrix::identity().blocks();
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(blocks.a[(i, j)], expected, epsilon = 1e-9);
                assert_relative_eq!(blocks.b[(i, j)], 0.0, epsilon = 1e-9);
                assert_relative_eq!(blocks.c[(i, j)], 0.0, epsilon = 1e-9);
                assert_relative_eq!(blocks.d[(i, j)], expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_blocks_are_structural() {
        // Entry (i, j) = 10 * i + j makes every block position unique.
        let m = Matrix4::from_fn(|i, j| (10 * i + j) as f64);
        let blocks = TransferMatrix::new(m).blocks();
        assert_eq!(blocks.a[(0, 0)], 0.0);
        assert_eq!(blocks.a[(1, 1)], 11.0);
        assert_eq!(blocks.b[(0, 0)], 2.0);
        assert_eq!(blocks.b[(1, 1)], 13.0);
        assert_eq!(blocks.c[(0, 0)], 20.0);
        assert_eq!(blocks.c[(1, 1)], 31.0);
        assert_eq!(blocks.d[(0, 0)], 22.0);
        assert_eq!(blocks.d[(1, 1)], 33.0);
    }

    #[test]
    fn test_try_from_dmatrix_rejects_wrong_shape() {
        let m = DMatrix::<f64>::zeros(3, 4);
        let err = TransferMatrix::try_from_dmatrix(&m);
        assert!(matches!(err, Err(CoreError::Shape { rows: 3, cols: 4 })));
    }

    #[test]
    fn test_try_from_dmatrix_accepts_4x4() {
        let m = DMatrix::<f64>::identity(4, 4);
        let tm = TransferMatrix::try_from_dmatrix(&m).unwrap();
        assert_eq!(tm, TransferMatrix::identity());
    }
}
