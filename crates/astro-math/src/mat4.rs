//! 4x4 homogeneous matrix type.
//!
//! [`Mat4`] holds an affine transform of 3D space. The last row of every
//! elementary matrix built here is `[0, 0, 0, 1]`, so products of them stay
//! affine.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 m03 |   | x |   | m00*x + m01*y + m02*z + m03*w |
//! | m10 m11 m12 m13 | * | y | = | m10*x + m11*y + m12*z + m13*w |
//! | m20 m21 m22 m23 |   | z |   | m20*x + m21*y + m22*z + m23*w |
//! |  0   0   0   1  |   | w |   |              w                |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use astro_core::Angle;
//! use astro_math::{Mat4, Vec4};
//!
//! let m = Mat4::translation(1.0, 2.0, 3.0) * Mat4::scaling(2.0, 2.0, 2.0);
//! let p = m * Vec4::from_point([1.0, 1.0, 1.0]);
//! assert_eq!(p.xyz(), [3.0, 4.0, 5.0]);
//!
//! let r = Mat4::rotation_z(Angle::degrees(90.0));
//! assert!(r.is_affine());
//! ```

use crate::Vec4;
use astro_core::{Angle, Real};
use std::fmt;
use std::ops::{Index, Mul};

/// A 4x4 matrix for homogeneous transforms.
///
/// Stored in row-major order: `m[row][col]`.
///
/// # Example
///
/// ```rust
/// use astro_math::{Mat4, Vec4};
///
/// let identity = Mat4::identity();
/// let v = Vec4::from_point([1.0, 2.0, 3.0]);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4<T: Real = f64> {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[T; 4]; 4],
}

impl<T: Real> Mat4<T> {
    /// Zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::from_rows([[T::zero(); 4]; 4])
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let one = T::one();
        Self::diagonal(one, one, one, one)
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    pub fn from_cols(cols: [[T; 4]; 4]) -> Self {
        Self::from_rows(cols).transpose()
    }

    /// Creates a diagonal matrix.
    pub fn diagonal(d0: T, d1: T, d2: T, d3: T) -> Self {
        let o = T::zero();
        Self::from_rows([
            [d0, o, o, o],
            [o, d1, o, o],
            [o, o, d2, o],
            [o, o, o, d3],
        ])
    }

    /// Scale matrix `diag(sx, sy, sz, 1)`.
    pub fn scaling(sx: T, sy: T, sz: T) -> Self {
        Self::diagonal(sx, sy, sz, T::one())
    }

    /// Shear matrix.
    ///
    /// `hab` is the amount of `b` added to `a`: the upper 3x3 block becomes
    /// `[[1, hxy, hxz], [hyx, 1, hyz], [hzx, hzy, 1]]`.
    pub fn shearing(hxy: T, hxz: T, hyx: T, hyz: T, hzx: T, hzy: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([
            [l, hxy, hxz, o],
            [hyx, l, hyz, o],
            [hzx, hzy, l, o],
            [o, o, o, l],
        ])
    }

    /// Right-handed rotation about the x-axis.
    pub fn rotation_x(angle: Angle<T>) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([
            [l, o, o, o],
            [o, c, -s, o],
            [o, s, c, o],
            [o, o, o, l],
        ])
    }

    /// Right-handed rotation about the y-axis.
    pub fn rotation_y(angle: Angle<T>) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([
            [c, o, s, o],
            [o, l, o, o],
            [-s, o, c, o],
            [o, o, o, l],
        ])
    }

    /// Right-handed rotation about the z-axis.
    pub fn rotation_z(angle: Angle<T>) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([
            [c, -s, o, o],
            [s, c, o, o],
            [o, o, l, o],
            [o, o, o, l],
        ])
    }

    /// Translation matrix: identity with `[dx, dy, dz]` in the last column.
    pub fn translation(dx: T, dy: T, dz: T) -> Self {
        let mut m = Self::identity();
        m.m[0][3] = dx;
        m.m[1][3] = dy;
        m.m[2][3] = dz;
        m
    }

    /// Returns a row.
    #[inline]
    pub fn row(&self, i: usize) -> [T; 4] {
        self.m[i]
    }

    /// Returns a column.
    #[inline]
    pub fn col(&self, i: usize) -> [T; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let mut result = *self;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    /// Multiplies two matrices: `result[i][j] = Σk self[i][k] * other[k][j]`.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = T::zero();
                for k in 0..4 {
                    sum = sum + self.m[i][k] * other.m[k][j];
                }
                result.m[i][j] = sum;
            }
        }
        result
    }

    /// Transforms a homogeneous vector by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    pub fn transform(&self, v: Vec4<T>) -> Vec4<T> {
        let mut out = Vec4::default();
        for i in 0..4 {
            out[i] = Vec4::from_array(self.m[i]).dot(v);
        }
        out
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Returns true if the last row is exactly `[0, 0, 0, 1]`.
    #[inline]
    pub fn is_affine(&self) -> bool {
        let (o, l) = (T::zero(), T::one());
        self.m[3] == [o, o, o, l]
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }
}

impl<T: Real> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Mat4 * Vec4
impl<T: Real> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn mul(self, rhs: Vec4<T>) -> Vec4<T> {
        self.transform(rhs)
    }
}

// Mat4 * Mat4
impl<T: Real> Mul for Mat4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<T: Real> Index<usize> for Mat4<T> {
    type Output = [T; 4];

    #[inline]
    fn index(&self, i: usize) -> &[T; 4] {
        &self.m[i]
    }
}

/// Row-major text: values separated by spaces, one row per line.
///
/// A precision given to the formatter (`{:.3}`) applies to every element.
impl<T: Real> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.m {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_mat4_identity() {
        let v = Vec4::from_point([1.0, 2.0, 3.0]);
        assert_eq!(Mat4::identity() * v, v);
        assert_eq!(Mat4::<f64>::default(), Mat4::identity());
    }

    #[test]
    fn test_mat4_scaling() {
        let m = Mat4::scaling(2.0, 3.0, 4.0);
        assert_eq!((m * Vec4::from_point([1.0, 1.0, 1.0])).xyz(), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_mat4_shearing_layout() {
        let m = Mat4::shearing(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.row(0), [1.0, 1.0, 2.0, 0.0]);
        assert_eq!(m.row(1), [3.0, 1.0, 4.0, 0.0]);
        assert_eq!(m.row(2), [5.0, 6.0, 1.0, 0.0]);
        assert!(m.is_affine());
    }

    #[test]
    fn test_mat4_translation_layout() {
        let m = Mat4::translation(7.0, 8.0, 9.0);
        assert_eq!(m.col(3), [7.0, 8.0, 9.0, 1.0]);
        assert_eq!((m * Vec4::from_point([0.0, 0.0, 0.0])).xyz(), [7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_mat4_rotations_quarter_turn() {
        let q = Angle::radians(FRAC_PI_2);

        let x = Mat4::rotation_x(q) * Vec4::from_point([0.0, 1.0, 0.0]);
        assert_abs_diff_eq!(x.z, 1.0, epsilon = 1e-12);

        let y = Mat4::rotation_y(q) * Vec4::from_point([0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(y.x, 1.0, epsilon = 1e-12);

        let z = Mat4::rotation_z(q) * Vec4::from_point([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(z.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mat4_rotation_degrees_match_radians() {
        let a = Mat4::rotation_y(Angle::degrees(30.0));
        let b = Mat4::rotation_y(Angle::radians(30f64.to_radians()));
        assert!(a.abs_diff_eq(&b, 1e-15));
    }

    #[test]
    fn test_mat4_mul_mat_order() {
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let s = Mat4::scaling(2.0, 2.0, 2.0);
        let origin = Vec4::from_point([0.0, 0.0, 0.0]);
        assert_eq!(((t * s) * origin).xyz(), [1.0, 0.0, 0.0]);
        assert_eq!(((s * t) * origin).xyz(), [2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mat4_transpose() {
        let m = Mat4::translation(1.0, 2.0, 3.0).transpose();
        assert_eq!(m.row(3), [1.0, 2.0, 3.0, 1.0]);
        assert!(!m.is_affine());
        assert_eq!(Mat4::from_cols(Mat4::translation(1.0, 2.0, 3.0).m), m);
    }

    #[test]
    fn test_mat4_is_finite() {
        let mut m = Mat4::<f64>::identity();
        assert!(m.is_finite());
        m.m[1][2] = f64::NAN;
        assert!(!m.is_finite());
    }

    #[test]
    fn test_mat4_display() {
        let text = Mat4::<f64>::scaling(2.0, 1.0, 0.5).to_string();
        assert_eq!(text, "2 0 0 0\n0 1 0 0\n0 0 0.5 0\n0 0 0 1\n");

        let text = format!("{:.1}", Mat4::<f64>::identity());
        assert_eq!(text.lines().next(), Some("1.0 0.0 0.0 0.0"));
    }
}
