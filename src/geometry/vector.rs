// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    array,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

use crate::numeric::scalar::Scalar;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

/// Dimension-specific cross product: a scalar in 2D, a vector in 3D.
pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    type Cross;

    fn cross(&self, other: &Self) -> Self::Cross;
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Vector<T, N> {
        Vector {
            coords: array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline(always)]
    pub fn from_vals(coords: [T; N]) -> Self {
        Vector { coords }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Vector {
            coords: [T::zero(); N],
        }
    }

    #[inline(always)]
    pub fn nan() -> Self {
        Vector {
            coords: [T::nan(); N],
        }
    }

    #[inline(always)]
    pub fn is_nan(&self) -> bool {
        self.coords.iter().any(|c| c.is_nan())
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.coords[i] * other.coords[i];
        }
        sum
    }

    #[inline(always)]
    pub fn norm2(&self) -> T {
        self.dot(self)
    }

    #[inline(always)]
    pub fn norm(&self) -> T {
        self.norm2().sqrt()
    }

    /// Unit vector in the same direction. A zero vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n == T::zero() { *self } else { *self / n }
    }

    /// `None` when the length is tiny.
    pub fn try_normalized(&self) -> Option<Self> {
        let n = self.norm();
        if n.is_tiny() { None } else { Some(*self / n) }
    }

    pub fn abs(&self) -> Self {
        Vector {
            coords: array::from_fn(|i| self.coords[i].abs()),
        }
    }

    /// Index of the component with the largest magnitude.
    pub fn dominant_axis(&self) -> usize {
        let mut best = 0;
        for i in 1..N {
            if self.coords[i].abs() > self.coords[best].abs() {
                best = i;
            }
        }
        best
    }

    pub fn is_tiny(&self) -> bool {
        self.coords.iter().all(|c| c.is_tiny())
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Vector { coords: [x, y] }
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Rotated by +90°: `(-y, x)`.
    #[inline(always)]
    pub fn perp(&self) -> Self {
        Self::new(-self.coords[1], self.coords[0])
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline(always)]
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector { coords: [x, y, z] }
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    #[inline(always)]
    pub fn z(&self) -> T {
        self.coords[2]
    }

    /// Some unit vector orthogonal to `self`.
    pub fn any_perpendicular(&self) -> Self {
        let a = self.abs();
        let helper = if a.x() <= a.y() && a.x() <= a.z() {
            Self::new(T::one(), T::zero(), T::zero())
        } else if a.y() <= a.z() {
            Self::new(T::zero(), T::one(), T::zero())
        } else {
            Self::new(T::zero(), T::zero(), T::one())
        };
        self.cross(&helper).normalized()
    }
}

impl<T: Scalar> VectorOps<T, 2> for Vector<T, 2> {
    type Cross = T;

    #[inline(always)]
    fn cross(&self, other: &Self) -> T {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }
}

impl<T: Scalar> VectorOps<T, 3> for Vector<T, 3> {
    type Cross = Vector<T, 3>;

    #[inline(always)]
    fn cross(&self, other: &Self) -> Vector<T, 3> {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self {
        Vector { coords }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline(always)]
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Vector {
            coords: array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Vector {
            coords: array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline(always)]
    fn mul(self, s: T) -> Self {
        Vector {
            coords: array::from_fn(|i| self.coords[i] * s),
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline(always)]
    fn div(self, s: T) -> Self {
        Vector {
            coords: array::from_fn(|i| self.coords[i] / s),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline(always)]
    fn neg(self) -> Self {
        Vector {
            coords: array::from_fn(|i| -self.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
