/// Column-major 4x4 homogeneous transforms
use std::ops::Mul;

use crate::geometry::Vec3;

/// A 4x4 matrix stored column-major: element `(row, col)` is at `col * 4 + row`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

const fn idx(row: usize, col: usize) -> usize {
    col * 4 + row
}

impl Mat4 {
    /// Build a matrix from sixteen values given row by row.
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn from_rows(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            m: [
                m00, m10, m20, m30,
                m01, m11, m21, m31,
                m02, m12, m22, m32,
                m03, m13, m23, m33,
            ],
        }
    }

    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::from_rows(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[idx(row, col)]
    }

    /// Raw column-major storage
    pub fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Matrix product `self · rhs`
    pub fn multiply(&self, rhs: &Mat4) -> Mat4 {
        let mut m = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                m[idx(row, col)] = (0..4).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
            }
        }
        Mat4 { m }
    }

    /// Transform a point with implicit `w = 1` and divide by the resulting `w`.
    ///
    /// A point on the plane where `w` evaluates to zero comes out as
    /// infinity or NaN.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let row = |r: usize| {
            self.get(r, 0) * p.x + self.get(r, 1) * p.y + self.get(r, 2) * p.z + self.get(r, 3)
        };
        let inv_w = 1.0 / row(3);
        Vec3::new(row(0) * inv_w, row(1) * inv_w, row(2) * inv_w)
    }

    /// Pure translation by `t`
    #[rustfmt::skip]
    pub fn translation(t: Vec3) -> Self {
        Self::from_rows(
            1.0, 0.0, 0.0, t.x,
            0.0, 1.0, 0.0, t.y,
            0.0, 0.0, 1.0, t.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Right-handed view matrix looking from `eye` towards `at`.
    ///
    /// The camera looks down its negative z axis. `eye == at`, or `up`
    /// parallel to the viewing direction, produce a degenerate basis.
    #[rustfmt::skip]
    pub fn look_at_rh(eye: Vec3, at: Vec3, up: Vec3) -> Self {
        let f = (at - eye).normalized();
        let up = up.normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f);

        let rotation = Self::from_rows(
             s.x,  s.y,  s.z, 0.0,
             u.x,  u.y,  u.z, 0.0,
            -f.x, -f.y, -f.z, 0.0,
             0.0,  0.0,  0.0, 1.0,
        );

        // translate into eye-relative space first, then rotate
        rotation.multiply(&Self::translation(-eye))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}
