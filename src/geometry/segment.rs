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

use crate::{
    geometry::{aabb::Aabb, point::Point, ray::Ray, vector::Vector},
    numeric::scalar::Scalar,
};

/// Closed segment between `a` and `b`. May be degenerate (`a == b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

impl<T: Scalar, const N: usize> Segment<T, N> {
    #[inline(always)]
    pub fn new(a: Point<T, N>, b: Point<T, N>) -> Self {
        Segment { a, b }
    }

    /// Unnormalised direction `b - a`.
    #[inline(always)]
    pub fn direction(&self) -> Vector<T, N> {
        self.b - self.a
    }

    pub fn length(&self) -> T {
        self.a.distance_to(&self.b)
    }

    pub fn midpoint(&self) -> Point<T, N> {
        self.a.midpoint(&self.b)
    }

    #[inline(always)]
    pub fn at(&self, t: T) -> Point<T, N> {
        self.a + self.direction() * t
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction().is_tiny()
    }

    pub fn inverse(&self) -> Self {
        Segment {
            a: self.b,
            b: self.a,
        }
    }

    /// Ray from `a` with direction `b - a`; `t ∈ [0, 1]` covers the segment.
    pub fn as_ray(&self) -> Ray<T, N> {
        Ray::new(self.a, self.direction())
    }

    pub fn bounding_box(&self) -> Aabb<T, N> {
        Aabb::from_points([self.a, self.b])
    }

    /// Parameter in `[0, 1]` of the point closest to `p`.
    pub fn closest_parameter(&self, p: &Point<T, N>) -> T {
        let d = self.direction();
        let l2 = d.norm2();
        if l2.is_tiny() {
            return T::zero();
        }
        ((*p - self.a).dot(&d) / l2).max(T::zero()).min(T::one())
    }

    pub fn closest_point(&self, p: &Point<T, N>) -> Point<T, N> {
        self.at(self.closest_parameter(p))
    }

    pub fn distance_to_point(&self, p: &Point<T, N>) -> T {
        self.closest_point(p).distance_to(p)
    }

    pub fn is_point_on(&self, p: &Point<T, N>, eps: T) -> bool {
        self.distance_to_point(p) <= eps
    }

    /// Parameters `(s, t)` of the closest pair of points between `self` and
    /// `other`, both clamped to `[0, 1]`.
    pub fn closest_parameters(&self, other: &Segment<T, N>) -> (T, T) {
        let zero = T::zero();
        let one = T::one();
        let d1 = self.direction();
        let d2 = other.direction();
        let r = self.a - other.a;
        let a = d1.norm2();
        let e = d2.norm2();
        let f = d2.dot(&r);

        if a.is_tiny() && e.is_tiny() {
            return (zero, zero);
        }
        if a.is_tiny() {
            return (zero, (f / e).max(zero).min(one));
        }
        let c = d1.dot(&r);
        if e.is_tiny() {
            return ((-c / a).max(zero).min(one), zero);
        }

        let b = d1.dot(&d2);
        let denom = a * e - b * b;
        let mut s = if denom.is_tiny() {
            zero
        } else {
            ((b * f - c * e) / denom).max(zero).min(one)
        };
        let mut t = (b * s + f) / e;
        if t < zero {
            t = zero;
            s = (-c / a).max(zero).min(one);
        } else if t > one {
            t = one;
            s = ((b - c) / a).max(zero).min(one);
        }
        (s, t)
    }

    /// Minimal distance between the two segments and the closest point on `self`.
    pub fn minimal_distance_to(&self, other: &Segment<T, N>) -> (T, Point<T, N>) {
        let (s, t) = self.closest_parameters(other);
        let p = self.at(s);
        (p.distance_to(&other.at(t)), p)
    }
}
