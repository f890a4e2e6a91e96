//! 3D Cartesian vectors for station and body positions.
//!
//! Station coordinates, Sun and Moon positions and every displacement produced by a
//! tide model are plain earth-fixed Cartesian triples in meters. [`Vector3`] carries
//! them and provides the handful of operations those models need: norms, unit
//! vectors, dot products and component-wise arithmetic.
//!
//! ```
//! use celestial_core::Vector3;
//!
//! let site = Vector3::new(4_517_590.9, 0.0, 4_487_348.4);
//! let up = site.normalize();
//! assert!((up.magnitude() - 1.0).abs() < 1e-15);
//!
//! // Spherical (geocentric) longitude and latitude of the site.
//! let (lon, lat) = site.to_spherical();
//! assert_eq!(lon, 0.0);
//! assert!(lat > 0.78 && lat < 0.79);
//! ```
//!
//! # Dot products
//!
//! For unit vectors `a.dot(&b)` is the cosine of the angle between them. Tide
//! models use it to get the zenith angle of a perturbing body as seen from a site.
use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are public; in earth-fixed use `x` points to the prime meridian on
/// the equator, `z` to the north pole and `y` completes the right-handed frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the vector has zero length, returns the zero vector unchanged (avoids NaN).
    ///
    /// ```
    /// use celestial_core::Vector3;
    ///
    /// let v = Vector3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.normalize(), Vector3::new(0.6, 0.8, 0.0));
    /// assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
    /// ```
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Converts the vector to spherical angles `(theta, phi)`.
    ///
    /// - `theta`: azimuthal angle from +X toward +Y (longitude), in `(-π, π]`
    /// - `phi`: elevation from the XY plane (geocentric latitude), in `[-π/2, π/2]`
    ///
    /// Magnitude does not matter. The zero vector maps to `(0.0, 0.0)`.
    pub fn to_spherical(&self) -> (f64, f64) {
        let d2 = self.x * self.x + self.y * self.y;

        let theta = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let phi = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2))
        };

        (theta, phi)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}
