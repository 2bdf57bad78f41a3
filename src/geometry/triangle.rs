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
        aabb::Aabb,
        plane::Plane3,
        point::{Point, Point3},
        segment::Segment,
        vector::{Vector3, VectorOps},
    },
    kernel::orientation::orient2d,
    numeric::scalar::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<T: Scalar, const N: usize> {
    pub p0: Point<T, N>,
    pub p1: Point<T, N>,
    pub p2: Point<T, N>,
}

pub type Triangle2<T> = Triangle<T, 2>;
pub type Triangle3<T> = Triangle<T, 3>;

impl<T: Scalar, const N: usize> Triangle<T, N> {
    #[inline(always)]
    pub fn new(p0: Point<T, N>, p1: Point<T, N>, p2: Point<T, N>) -> Self {
        Triangle { p0, p1, p2 }
    }

    #[inline(always)]
    pub fn points(&self) -> [Point<T, N>; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Edges `p0p1`, `p1p2`, `p2p0`.
    pub fn edges(&self) -> [Segment<T, N>; 3] {
        [
            Segment::new(self.p0, self.p1),
            Segment::new(self.p1, self.p2),
            Segment::new(self.p2, self.p0),
        ]
    }

    pub fn centroid(&self) -> Point<T, N> {
        let third = T::one() / T::of(3.0);
        self.p0 + ((self.p1 - self.p0) + (self.p2 - self.p0)) * third
    }

    pub fn bounding_box(&self) -> Aabb<T, N> {
        Aabb::from_points(self.points())
    }
}

impl<T: Scalar> Triangle<T, 2> {
    /// Twice the signed area, positive for counter-clockwise winding.
    pub fn winding_order(&self) -> T {
        orient2d(&self.p0, &self.p1, &self.p2)
    }

    pub fn is_degenerate(&self) -> bool {
        self.winding_order().is_tiny()
    }

    pub fn area(&self) -> T {
        self.winding_order().abs() * T::half()
    }
}

impl<T: Scalar> Triangle<T, 3> {
    #[inline(always)]
    pub fn edge01(&self) -> Vector3<T> {
        self.p1 - self.p0
    }

    #[inline(always)]
    pub fn edge02(&self) -> Vector3<T> {
        self.p2 - self.p0
    }

    /// Unnormalised normal `edge01 × edge02`; its length is twice the area.
    pub fn normal(&self) -> Vector3<T> {
        self.edge01().cross(&self.edge02())
    }

    pub fn area(&self) -> T {
        self.normal().norm() * T::half()
    }

    pub fn is_degenerate(&self) -> bool {
        self.normal().norm().is_tiny()
    }

    pub fn plane(&self) -> Plane3<T> {
        Plane3::from_normal_point(self.normal(), &self.p0)
    }

    /// Closest point on the (filled) triangle to `p`.
    pub fn closest_point(&self, p: &Point3<T>) -> Point3<T> {
        if self.is_degenerate() {
            return self
                .edges()
                .iter()
                .map(|e| e.closest_point(p))
                .fold(self.p0, |best, q| {
                    if q.distance_squared_to(p) < best.distance_squared_to(p) {
                        q
                    } else {
                        best
                    }
                });
        }

        let zero = T::zero();
        let ab = self.p1 - self.p0;
        let ac = self.p2 - self.p0;
        let ap = *p - self.p0;
        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= zero && d2 <= zero {
            return self.p0;
        }

        let bp = *p - self.p1;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= zero && d4 <= d3 {
            return self.p1;
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= zero && d1 >= zero && d3 <= zero {
            return self.p0 + ab * (d1 / (d1 - d3));
        }

        let cp = *p - self.p2;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= zero && d5 <= d6 {
            return self.p2;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= zero && d2 >= zero && d6 <= zero {
            return self.p0 + ac * (d2 / (d2 - d6));
        }

        let va = d3 * d6 - d5 * d4;
        if va <= zero && (d4 - d3) >= zero && (d5 - d6) >= zero {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return self.p1 + (self.p2 - self.p1) * w;
        }

        let denom = T::one() / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        self.p0 + ab * v + ac * w
    }
}
