/// Geometry primitives: the approximate square root and 3-vectors
use std::ops::{Add, Mul, Neg, Sub};

/// Magic constant for the initial reciprocal square root guess
const INV_SQRT_MAGIC: u32 = 0x5f37_59df;

/// Vectors at or below this length are left alone by `normalize`
const NORMALIZE_EPSILON: f32 = 1e-6;

/// Approximate `1 / sqrt(x)` with the bit-pattern guess and one Newton step.
///
/// Relative error stays below ~0.18% for positive finite input. The result
/// for negative, infinite or NaN input is meaningless; zero yields a large
/// but finite value, so `0.0 * fast_inv_sqrt(0.0) == 0.0`.
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let bits = INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1);
    let y = f32::from_bits(bits);
    y * (1.5 - half * y * y)
}

/// Approximate square root sharing the error profile of [`fast_inv_sqrt`].
pub fn fast_sqrt(x: f32) -> f32 {
    x * fast_inv_sqrt(x)
}

/// A 3D vector (or point) of single-precision floats
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise multiplication by a scalar
    pub fn scale(self, k: f32) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }

    /// Approximate length, see [`fast_sqrt`]
    pub fn length(self) -> f32 {
        fast_sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize in place and return the length before normalization.
    ///
    /// Zero and near-zero vectors pass through unchanged.
    pub fn normalize(&mut self) -> f32 {
        let length = self.length();
        if length > NORMALIZE_EPSILON {
            *self = self.scale(1.0 / length);
        }
        length
    }

    /// Normalized copy of this vector
    pub fn normalized(mut self) -> Vec3 {
        self.normalize();
        self
    }

    /// Right-handed cross product
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, k: f32) -> Vec3 {
        self.scale(k)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}
