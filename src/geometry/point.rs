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
    ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    #[inline(always)]
    pub fn from_vals(coords: [T; N]) -> Self {
        Point { coords }
    }

    #[inline(always)]
    pub fn origin() -> Self {
        Point {
            coords: [T::zero(); N],
        }
    }

    /// Sentinel for "no point": every coordinate is NaN.
    #[inline(always)]
    pub fn nan() -> Self {
        Point {
            coords: [T::nan(); N],
        }
    }

    #[inline(always)]
    pub fn is_nan(&self) -> bool {
        self.coords.iter().any(|c| c.is_nan())
    }

    #[inline(always)]
    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    #[inline(always)]
    pub fn as_vector(&self) -> Vector<T, N> {
        Vector::from_vals(self.coords)
    }

    #[inline(always)]
    pub fn vector_to(&self, other: &Self) -> Vector<T, N> {
        *other - *self
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        (*other - *self).norm2()
    }

    pub fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Point {
            coords: array::from_fn(|i| (self.coords[i] + other.coords[i]) * T::half()),
        }
    }

    /// `self + (other - self) * t`
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    pub fn component_min(&self, other: &Self) -> Self {
        Point {
            coords: array::from_fn(|i| self.coords[i].min(other.coords[i])),
        }
    }

    pub fn component_max(&self, other: &Self) -> Self {
        Point {
            coords: array::from_fn(|i| self.coords[i].max(other.coords[i])),
        }
    }

    /// Coordinate-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        (0..N).all(|i| (self.coords[i] - other.coords[i]).abs() <= eps)
    }
}

impl<T: Scalar> Point<T, 2> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Point { coords: [x, y] }
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.coords[1]
    }
}

impl<T: Scalar> Point<T, 3> {
    #[inline(always)]
    pub fn new(x: T, y: T, z: T) -> Self {
        Point { coords: [x, y, z] }
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

    /// Projects onto the plane orthogonal to `axis`, keeping cyclic coordinate
    /// order so the projected winding follows the sign of that axis.
    pub fn drop_axis(&self, axis: usize) -> Point2<T> {
        match axis {
            0 => Point2::new(self.coords[1], self.coords[2]),
            1 => Point2::new(self.coords[2], self.coords[0]),
            _ => Point2::new(self.coords[0], self.coords[1]),
        }
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    #[inline(always)]
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;
    #[inline(always)]
    fn sub(self, rhs: Point<T, N>) -> Vector<T, N> {
        Vector::from_vals(array::from_fn(|i| self.coords[i] - rhs.coords[i]))
    }
}

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Point<T, N>;
    #[inline(always)]
    fn add(self, rhs: Vector<T, N>) -> Point<T, N> {
        Point {
            coords: array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for Point<T, N> {
    type Output = Point<T, N>;
    #[inline(always)]
    fn sub(self, rhs: Vector<T, N>) -> Point<T, N> {
        Point {
            coords: array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> AddAssign<Vector<T, N>> for Point<T, N> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        for i in 0..N {
            self.coords[i] = self.coords[i] + rhs.coords[i];
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign<Vector<T, N>> for Point<T, N> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        for i in 0..N {
            self.coords[i] = self.coords[i] - rhs.coords[i];
        }
    }
}
