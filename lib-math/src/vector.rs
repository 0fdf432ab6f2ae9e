use core::ops::{Add, AddAssign, Div, Mul, Sub};

/// A three component sample, e.g. one accelerometer (g) or gyroscope (deg/s) reading, or an
/// offset vector estimated for one of those sensors.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector
{
    pub x: f64, 
    pub y: f64,
    pub z: f64,
}

impl From<[f64; 3]> for Vector {
    fn from(values: [f64; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Vector 
{
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    /// 
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Returns a vector with every component set to NaN, used to mark values that have not been
    /// computed yet.
    /// 
    pub const fn nan() -> Self {
        Vector { x: f64::NAN, y: f64::NAN, z: f64::NAN }
    }

    /// True if any of the components is NaN.
    /// 
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Component by axis index, 0 = x, 1 = y, anything else = z.
    /// 
    #[inline]
    pub fn axis(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Calculate the length/magnitude of the vector
    /// 
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the vector
    /// 
    pub fn normalize(&self) -> Vector {
        let len = self.magnitude();
        if len == 0.0 || len.is_nan() {
            // Avoid division by zero; return a zero vector
            return Vector::zero();
        }
        self / len
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
    }
}

impl Add for Vector
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Sub<&Vector> for &Vector
{
    type Output = Vector;

    fn sub(self, other: &Vector) -> Self::Output {
        *self - *other
    }
}

impl Div<f64> for Vector
{
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Div<f64> for &Vector
{
    type Output = Vector;

    fn div(self, other: f64) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Mul<f64> for Vector
{
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
