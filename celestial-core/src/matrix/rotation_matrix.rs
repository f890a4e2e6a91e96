//! 3x3 rotation matrices for earth-fixed ↔ local-frame transformations.
//!
//! The matrix a station model needs most is the rotation from the earth-fixed
//! (ECEF) frame to the local east-north-up (ENU) frame tangent to the Earth at the
//! site. [`RotationMatrix3::enu_from_geodetic`] builds it from latitude and
//! longitude; its rows are the east, north and up unit vectors expressed in ECEF:
//!
//! ```text
//! | -sin λ          cos λ          0     |   east
//! | -sin φ cos λ   -sin φ sin λ    cos φ |   north
//! |  cos φ cos λ    cos φ sin λ    sin φ |   up
//! ```
//!
//! # Inverting Rotations
//!
//! For a rotation matrix the inverse is the transpose, so local-frame results are
//! brought back to ECEF with `m.transpose() * v`:
//!
//! ```
//! use celestial_core::{RotationMatrix3, Vector3};
//!
//! let enu = RotationMatrix3::enu_from_geodetic(0.6, -1.2);
//! let ecef = Vector3::new(1.0, 2.0, 3.0);
//!
//! let local = enu * ecef;
//! let back = enu.transpose() * local;
//! assert!((back - ecef).magnitude() < 1e-14);
//! ```
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[f64; 3]; 3]`. The element at row `i`,
//! column `j` is `matrix[(i, j)]` or `matrix.get(i, j)`.

use std::fmt;

/// A 3x3 rotation matrix for coordinate frame transformations.
///
/// Proper rotation (orthogonal, determinant +1), row-major storage, angles in
/// radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from a row-major 3x3 array. No orthogonality check is made.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Builds the ECEF → ENU rotation at latitude `lat` and longitude `lon` (radians).
    ///
    /// Row 0 is the east unit vector, row 1 north, row 2 up (all in ECEF).
    ///
    /// ```
    /// use celestial_core::{RotationMatrix3, Vector3};
    ///
    /// // On the equator at the prime meridian, "up" is +X and "north" is +Z.
    /// let m = RotationMatrix3::enu_from_geodetic(0.0, 0.0);
    /// assert_eq!(m.up(), Vector3::new(1.0, 0.0, 0.0));
    /// assert_eq!(m.north(), Vector3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn enu_from_geodetic(lat: f64, lon: f64) -> Self {
        let (sin_lat, cos_lat) = libm::sincos(lat);
        let (sin_lon, cos_lon) = libm::sincos(lon);

        Self::from_array([
            [-sin_lon, cos_lon, 0.0],
            [-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat],
            [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat],
        ])
    }

    /// Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Returns row `row` as a vector. For an ENU matrix rows are east, north, up.
    pub fn row(&self, row: usize) -> super::Vector3 {
        super::Vector3::from_array(self.elements[row])
    }

    /// East unit vector (row 0) of a local-frame rotation.
    pub fn east(&self) -> super::Vector3 {
        self.row(0)
    }

    /// North unit vector (row 1) of a local-frame rotation.
    pub fn north(&self) -> super::Vector3 {
        self.row(1)
    }

    /// Up (zenith) unit vector (row 2) of a local-frame rotation.
    pub fn up(&self) -> super::Vector3 {
        self.row(2)
    }

    /// Multiplies this matrix by another; `other` acts first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Computes the matrix-vector product `M * v`.
    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        [
            self.elements[0][0] * vector[0]
                + self.elements[0][1] * vector[1]
                + self.elements[0][2] * vector[2],
            self.elements[1][0] * vector[0]
                + self.elements[1][1] * vector[1]
                + self.elements[1][2] * vector[2],
            self.elements[2][0] * vector[0]
                + self.elements[2][1] * vector[1]
                + self.elements[2][2] * vector[2],
        ]
    }

    /// Computes `Mᵀ * v` without materializing the transpose.
    ///
    /// With an ENU matrix this takes a local east/north/up triple to ECEF.
    pub fn apply_transpose_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        [
            self.elements[0][0] * vector[0]
                + self.elements[1][0] * vector[1]
                + self.elements[2][0] * vector[2],
            self.elements[0][1] * vector[0]
                + self.elements[1][1] * vector[1]
                + self.elements[2][1] * vector[2],
            self.elements[0][2] * vector[0]
                + self.elements[1][2] * vector[1]
                + self.elements[2][2] * vector[2],
        ]
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose, which for a rotation is also the inverse.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks determinant +1 and `M * Mᵀ = I` within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        let product = self.multiply(&self.transpose());
        let identity = Self::identity();

        for i in 0..3 {
            for j in 0..3 {
                if (product.elements[i][j] - identity.elements[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }

        true
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::Mul<super::Vector3> for RotationMatrix3 {
    type Output = super::Vector3;

    fn mul(self, vec: super::Vector3) -> super::Vector3 {
        super::Vector3::from_array(self.apply_to_vector(vec.to_array()))
    }
}

impl std::ops::Mul<super::Vector3> for &RotationMatrix3 {
    type Output = super::Vector3;

    fn mul(self, vec: super::Vector3) -> super::Vector3 {
        super::Vector3::from_array(self.apply_to_vector(vec.to_array()))
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
