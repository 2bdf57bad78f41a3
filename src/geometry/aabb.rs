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

use std::array;

use smallvec::SmallVec;

use crate::{
    geometry::{point::Point, vector::Vector},
    numeric::scalar::Scalar,
};

/// An axis-aligned bounding box in N dimensions.
///
/// The box with `min = +inf` and `max = -inf` is the invalid sentinel that
/// stands for the empty set; extending it by a point yields that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar, const N: usize> {
    pub min: Point<T, N>,
    pub max: Point<T, N>,
}

pub type Aabb2<T> = Aabb<T, 2>;
pub type Aabb3<T> = Aabb<T, 3>;

impl<T: Scalar, const N: usize> Aabb<T, N> {
    /// Takes the corners as given; see [`Aabb::from_points`] for an ordering
    /// constructor.
    #[inline]
    pub fn new(min: Point<T, N>, max: Point<T, N>) -> Self {
        Aabb { min, max }
    }

    #[inline]
    pub fn invalid() -> Self {
        Aabb {
            min: Point::from_vals([T::infinity(); N]),
            max: Point::from_vals([T::neg_infinity(); N]),
        }
    }

    /// Smallest box containing every point; invalid for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point<T, N>>>(points: I) -> Self {
        let mut b = Aabb::invalid();
        for p in points {
            b.extend_by(&p);
        }
        b
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..N).all(|i| self.min[i] <= self.max[i])
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn extend_by(&mut self, p: &Point<T, N>) {
        self.min = self.min.component_min(p);
        self.max = self.max.component_max(p);
    }

    pub fn extended_by(&self, p: &Point<T, N>) -> Self {
        let mut b = *self;
        b.extend_by(p);
        b
    }

    pub fn union(&self, other: &Aabb<T, N>) -> Aabb<T, N> {
        Aabb {
            min: self.min.component_min(&other.min),
            max: self.max.component_max(&other.max),
        }
    }

    /// Closed containment: boundary points are inside.
    pub fn contains(&self, p: &Point<T, N>) -> bool {
        (0..N).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    pub fn contains_box(&self, other: &Aabb<T, N>) -> bool {
        other.is_valid() && self.contains(&other.min) && self.contains(&other.max)
    }

    /// Does this AABB intersect `other`? Touching boxes intersect.
    pub fn intersects(&self, other: &Aabb<T, N>) -> bool {
        if self.is_invalid() || other.is_invalid() {
            return false;
        }
        (0..N).all(|i| self.max[i] >= other.min[i] && other.max[i] >= self.min[i])
    }

    #[inline]
    pub fn size(&self) -> Vector<T, N> {
        self.max - self.min
    }

    pub fn center(&self) -> Point<T, N> {
        self.min.midpoint(&self.max)
    }

    /// Corner `index`: bit `i` set selects `max` along axis `i`.
    #[inline]
    pub fn corner(&self, index: usize) -> Point<T, N> {
        Point::from_vals(array::from_fn(|i| {
            if index & (1 << i) != 0 {
                self.max[i]
            } else {
                self.min[i]
            }
        }))
    }

    pub fn corners(&self) -> SmallVec<[Point<T, N>; 8]> {
        (0..1usize << N).map(|i| self.corner(i)).collect()
    }

    /// Corners with the smallest and largest projection onto `dir`.
    pub fn min_max_in_direction(&self, dir: &Vector<T, N>) -> (Point<T, N>, Point<T, N>) {
        let mut lo = self.min;
        let mut hi = self.max;
        for i in 0..N {
            if dir[i] < T::zero() {
                lo[i] = self.max[i];
                hi[i] = self.min[i];
            }
        }
        (lo, hi)
    }

    /// Grown on every side by `eps` times its extent along that axis.
    pub fn enlarged_by_relative_eps(&self, eps: T) -> Self {
        let delta = self.size() * eps;
        Aabb {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// Closest point of the box to `p`.
    pub fn closest_point(&self, p: &Point<T, N>) -> Point<T, N> {
        Point::from_vals(array::from_fn(|i| p[i].max(self.min[i]).min(self.max[i])))
    }

    /// Index of the axis with largest extent.
    pub fn longest_axis(&self) -> usize {
        self.size().dominant_axis()
    }
}
