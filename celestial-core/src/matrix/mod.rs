//! 3D vectors and rotation matrices for earth-fixed and local-frame geometry.
//!
//! - [`Vector3`]: 3D Cartesian vector (positions, directions, displacements)
//! - [`RotationMatrix3`]: 3×3 orthogonal matrix, including the ECEF→ENU rotation

mod rotation_matrix;
mod vector3;

pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
