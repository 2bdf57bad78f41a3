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
    geometry::{point::Point, vector::Vector},
    numeric::scalar::Scalar,
};

/// Parametric line `origin + t * direction`. The direction need not be unit
/// length; predicates bound `t` explicitly where a half line is meant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T: Scalar, const N: usize> {
    pub origin: Point<T, N>,
    pub direction: Vector<T, N>,
}

pub type Ray2<T> = Ray<T, 2>;
pub type Ray3<T> = Ray<T, 3>;

impl<T: Scalar, const N: usize> Ray<T, N> {
    #[inline(always)]
    pub fn new(origin: Point<T, N>, direction: Vector<T, N>) -> Self {
        Ray { origin, direction }
    }

    pub fn from_points(from: Point<T, N>, to: Point<T, N>) -> Self {
        Ray::new(from, to - from)
    }

    /// The "no ray" sentinel: NaN origin and direction.
    pub fn invalid() -> Self {
        Ray::new(Point::nan(), Vector::nan())
    }

    pub fn is_invalid(&self) -> bool {
        self.origin.is_nan() || self.direction.is_nan()
    }

    #[inline(always)]
    pub fn at(&self, t: T) -> Point<T, N> {
        self.origin + self.direction * t
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction.is_tiny()
    }

    /// Unbounded parameter of the projection of `p` onto the line.
    pub fn closest_parameter(&self, p: &Point<T, N>) -> T {
        let l2 = self.direction.norm2();
        if l2.is_tiny() {
            return T::zero();
        }
        (*p - self.origin).dot(&self.direction) / l2
    }

    /// Parameters `(t0, t1)` of the closest points between the two infinite
    /// lines. Parallel lines keep `t0 = 0`.
    pub fn closest_parameters(&self, other: &Ray<T, N>) -> (T, T) {
        let r = self.origin - other.origin;
        let a = self.direction.norm2();
        let b = self.direction.dot(&other.direction);
        let e = other.direction.norm2();
        let c = self.direction.dot(&r);
        let f = other.direction.dot(&r);
        let denom = a * e - b * b;

        if denom.is_tiny() {
            let t1 = if e.is_tiny() { T::zero() } else { f / e };
            return (T::zero(), t1);
        }
        ((b * f - c * e) / denom, (a * f - b * c) / denom)
    }

    pub fn minimal_distance_to(&self, other: &Ray<T, N>) -> (T, T, T) {
        let (t0, t1) = self.closest_parameters(other);
        (self.at(t0).distance_to(&other.at(t1)), t0, t1)
    }
}
