//! 3x3 rotation matrices for equatorial frame changes.
//!
//! Precessing a catalog from one equinox to another is a single rotation of
//! the equatorial frame, assembled from elementary turns about the Z and Y
//! axes. Its inverse is its transpose.
//!
//! Conventions follow ERFA: angles rotate the *frame*, so a positive turn of
//! 90° about Z takes the vector `[1, 0, 0]` to `[0, -1, 0]`, and
//! [`rotate_z`](RotationMatrix3::rotate_z) / [`rotate_y`](RotationMatrix3::rotate_y)
//! premultiply (`self ← R · self`). Storage is row-major.
//!
//! ```
//! use celestial_core::{RotationMatrix3, Vector3};
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(0.5);
//! m.rotate_y(0.3);
//!
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! let back = m.transpose() * (m * v);
//! assert!((back.z - 3.0).abs() < 1e-14);
//! ```

use super::Vector3;
use std::ops::Mul;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix3 {
    rows: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Wraps row-major elements as-is; no orthogonality check.
    pub fn from_array(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Element at `row`, `col`. Panics if either is `>= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Frame rotation about Z by `psi` radians.
    ///
    /// ```text
    /// |  cos ψ  sin ψ  0 |
    /// | -sin ψ  cos ψ  0 |
    /// |    0      0    1 |
    /// ```
    pub fn about_z(psi: f64) -> Self {
        let (s, c) = libm::sincos(psi);
        Self::from_array([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Frame rotation about Y by `theta` radians.
    ///
    /// ```text
    /// | cos θ  0  -sin θ |
    /// |   0    1     0   |
    /// | sin θ  0   cos θ |
    /// ```
    pub fn about_y(theta: f64) -> Self {
        let (s, c) = libm::sincos(theta);
        Self::from_array([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// `self ← Rz(psi) · self`
    pub fn rotate_z(&mut self, psi: f64) {
        *self = Self::about_z(psi) * *self;
    }

    /// `self ← Ry(theta) · self`
    pub fn rotate_y(&mut self, theta: f64) {
        *self = Self::about_y(theta) * *self;
    }

    pub fn transpose(&self) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[j][i];
            }
        }
        Self::from_array(rows)
    }

    pub fn determinant(&self) -> f64 {
        let [a, b, c] = self.rows;
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// True if `det = +1` and `M · Mᵀ = I`, each within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        (self.determinant() - 1.0).abs() <= tolerance
            && (*self * self.transpose()).max_difference(&Self::identity()) <= tolerance
    }

    /// Largest absolute element-wise difference.
    pub fn max_difference(&self, other: &Self) -> f64 {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    fn row_dot(&self, row: usize, v: [f64; 3]) -> f64 {
        let r = &self.rows[row];
        r[0] * v[0] + r[1] * v[1] + r[2] * v[2]
    }
}

/// `self · rhs`: `rhs` is applied first.
impl Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let cols = rhs.transpose();
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.row_dot(i, cols.rows[j]);
            }
        }
        Self::from_array(rows)
    }
}

impl Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let v = [v.x, v.y, v.z];
        Vector3::new(self.row_dot(0, v), self.row_dot(1, v), self.row_dot(2, v))
    }
}

impl Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        &self * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    fn close(a: Vector3, b: Vector3) -> bool {
        (a.x - b.x).abs() < 1e-15 && (a.y - b.y).abs() < 1e-15 && (a.z - b.z).abs() < 1e-15
    }

    #[test]
    fn test_identity() {
        let m = RotationMatrix3::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.determinant(), 1.0);
    }

    #[test]
    fn test_quarter_turn_about_z_moves_frame() {
        let m = RotationMatrix3::about_z(HALF_PI);
        assert!(close(m * Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_quarter_turn_about_y_moves_frame() {
        let m = RotationMatrix3::about_y(HALF_PI);
        assert!(close(m * Vector3::new(0.0, 0.0, 1.0), Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotations_premultiply() {
        let mut m = RotationMatrix3::identity();
        m.rotate_y(0.2);
        m.rotate_z(0.3);
        let expected = RotationMatrix3::about_z(0.3) * RotationMatrix3::about_y(0.2);
        assert!(m.max_difference(&expected) < 1e-15);
    }

    #[test]
    fn test_transpose_inverts_precession_sized_rotation() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.014);
        m.rotate_y(-0.0097);
        m.rotate_z(0.014);

        let product = m * m.transpose();
        assert!(product.max_difference(&RotationMatrix3::identity()) < 1e-15);
        assert!(m.is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_non_rotations_are_rejected() {
        let scaled =
            RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!scaled.is_rotation_matrix(1e-15));

        let sheared =
            RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!sheared.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_matrix_vector_product() {
        let m = RotationMatrix3::from_array([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, Vector3::new(2.0, 3.0, 1.0));
        assert_eq!(&m * v, Vector3::new(2.0, 3.0, 1.0));
    }
}
