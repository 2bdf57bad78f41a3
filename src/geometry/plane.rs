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
    geometry::{
        point::{Point, Point2, Point3},
        vector::{Vector, Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Hyperplane `{ p : normal · p = distance }`.
///
/// Heights are true signed distances only when `normal` has unit length;
/// every constructor except [`Plane::new`] normalises. `Plane<T, 2>` is the
/// infinite 2D line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<T: Scalar, const N: usize> {
    pub normal: Vector<T, N>,
    pub distance: T,
}

pub type Plane2<T> = Plane<T, 2>;
pub type Plane3<T> = Plane<T, 3>;

impl<T: Scalar, const N: usize> Plane<T, N> {
    /// Takes the normal as given, without normalising.
    #[inline(always)]
    pub fn new(normal: Vector<T, N>, distance: T) -> Self {
        Plane { normal, distance }
    }

    pub fn from_normal_point(normal: Vector<T, N>, point: &Point<T, N>) -> Self {
        let n = normal.normalized();
        Plane {
            normal: n,
            distance: n.dot(&point.as_vector()),
        }
    }

    /// Signed distance of `p`: positive on the side the normal points to.
    #[inline(always)]
    pub fn height(&self, p: &Point<T, N>) -> T {
        self.normal.dot(&p.as_vector()) - self.distance
    }

    pub fn normalized(&self) -> Self {
        let len = self.normal.norm();
        if len == T::zero() {
            return *self;
        }
        Plane {
            normal: self.normal / len,
            distance: self.distance / len,
        }
    }

    pub fn reversed(&self) -> Self {
        Plane {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// The plane point closest to the origin.
    pub fn point(&self) -> Point<T, N> {
        Point::origin() + self.normal * (self.distance / self.normal.norm2())
    }

    /// Orthogonal projection of `p` onto a unit-normal plane.
    pub fn project(&self, p: &Point<T, N>) -> Point<T, N> {
        *p - self.normal * self.height(p)
    }

    /// Sign of the height, `0` exactly on the plane.
    pub fn sign(&self, p: &Point<T, N>) -> i32 {
        let h = self.height(p);
        if h > T::zero() {
            1
        } else if h < T::zero() {
            -1
        } else {
            0
        }
    }
}

impl<T: Scalar> Plane<T, 2> {
    /// Line through `a` and `b`; points left of `a → b` have positive height.
    pub fn from_points(a: &Point2<T>, b: &Point2<T>) -> Self {
        Plane::from_normal_point((*b - *a).perp(), a)
    }

    /// Homogeneous coefficients `(nx, ny, -d)`.
    pub fn coefficients(&self) -> Vector3<T> {
        Vector3::new(self.normal.x(), self.normal.y(), -self.distance)
    }
}

impl<T: Scalar> Plane<T, 3> {
    /// Plane through three points, normal `(b - a) × (c - a)`.
    pub fn from_points(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Self {
        let n = (*b - *a).cross(&(*c - *a));
        Plane::from_normal_point(n, a)
    }

    /// Orthonormal in-plane basis `(u, v)` with `u × v = normal`.
    pub fn basis(&self) -> (Vector3<T>, Vector3<T>) {
        let n = self.normal.normalized();
        let u = n.any_perpendicular();
        let v = n.cross(&u);
        (u, v)
    }
}
