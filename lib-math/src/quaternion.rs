use crate::*;

/// Orientation quaternion stored scalar first, i.e. in the (qw, qx, qy, qz) column order of the
/// recorded orientation logs.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion
{
    pub w: f64,
    pub x: f64, 
    pub y: f64,
    pub z: f64,
}


impl Quaternion 
{
    /// Create a new quaternion with the given values.
    /// 
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Returns the identity quaternion (no rotation)
    /// 
    pub fn identity() -> Self {
        Quaternion {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
    
    /// Constructs a quaternion from a scalar (w) and a vector (x, y, z)
    /// 
    pub fn from_parts(w: f64, vector: Vector) -> Self {
        Quaternion {
            w,
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }

    /// Rotation of `angle` radians around `axis` (which does not need to be normalized).
    /// 
    pub fn from_axis_angle(axis: &Vector, angle: f64) -> Self {
        let half = angle / 2.0;
        Quaternion::from_parts(libm::cos(half), axis.normalize() * libm::sin(half))
    }

    /// Get the magnitude of the quaternion.
    /// 
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the quaternion to make it a unit quaternion.
    /// 
    pub fn normalize(&self) -> Quaternion {
        let magnitude = self.magnitude();
        // Cannot normalize a quaternion with zero magnitude.
        if magnitude == 0.0 {
            return *self;
        }
        Quaternion {
            w: self.w / magnitude,
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        }
    }

    /// Compute the conjugate of the quaternion.
    /// 
    pub fn conjugate(&self) -> Self {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Inverse rotation. Logged orientations are not always exactly unit length so the quaternion
    /// is normalized first, after which the inverse is simply the conjugate.
    /// 
    pub fn inverse(&self) -> Self {
        self.normalize().conjugate()
    }

    /// Rotate a vector by this (unit) quaternion using q * v * q^-1
    /// 
    pub fn rotate(&self, vector: &Vector) -> Vector {
        let vector_quat = Quaternion::from_parts(0.0, *vector);
        let rotated_quat = self.multiply(&vector_quat).multiply(&self.conjugate());
        Vector {
            x: rotated_quat.x,
            y: rotated_quat.y,
            z: rotated_quat.z,
        }
    }

    /// Rotate a vector by the inverse of this quaternion, e.g. to bring a world frame vector back
    /// into the sensor frame.
    /// 
    pub fn inverse_rotate(&self, vector: &Vector) -> Vector {
        self.inverse().rotate(vector)
    }

    /// Approximate equality check with a given tolerance.
    /// 
    pub fn approx_eq(&self, other: &Quaternion, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
            && libm::fabs(self.w - other.w) <= tol
    }

    /// Quaternion multiplication.
    /// 
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }
}
