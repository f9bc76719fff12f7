//! Homogeneous 4-component vector.
//!
//! A 3D point `(x, y, z)` lifts to `(x, y, z, 1)`; the fourth component lets
//! translation be expressed as a matrix product.

use astro_core::Real;
use std::ops::{Index, IndexMut};

/// A homogeneous point `(x, y, z, w)`.
///
/// # Example
///
/// ```rust
/// use astro_math::Vec4;
///
/// let h = Vec4::from_point([1.0, 2.0, 3.0]);
/// assert_eq!(h.w, 1.0);
/// assert_eq!(h.xyz(), [1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4<T: Real = f64> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
    /// Homogeneous weight, 1 for points
    pub w: T,
}

impl<T: Real> Vec4<T> {
    /// Creates a vector from components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Lifts a 3D point to homogeneous form with `w = 1`.
    #[inline]
    pub fn from_point(p: [T; 3]) -> Self {
        Self::new(p[0], p[1], p[2], T::one())
    }

    /// Creates from array `[x, y, z, w]`.
    #[inline]
    pub fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to array `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The first three components, without dividing by `w`.
    #[inline]
    pub fn xyz(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl<T: Real> Index<usize> for Vec4<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl<T: Real> IndexMut<usize> for Vec4<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}
