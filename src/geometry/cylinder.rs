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
        aabb::Aabb3,
        point::Point3,
        ray::Ray3,
        segment::Segment3,
        vector::Vector3,
    },
    numeric::scalar::Scalar,
};

/// Circular cylinder around the axis segment `p0 → p1`.
///
/// Plane intersection routines treat the cylinder as infinite along its axis;
/// the bounding box uses the finite extent between the two caps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder3<T: Scalar> {
    pub p0: Point3<T>,
    pub p1: Point3<T>,
    pub radius: T,
}

impl<T: Scalar> Cylinder3<T> {
    pub fn new(p0: Point3<T>, p1: Point3<T>, radius: T) -> Self {
        Cylinder3 { p0, p1, radius }
    }

    pub fn axis(&self) -> Segment3<T> {
        Segment3::new(self.p0, self.p1)
    }

    pub fn axis_ray(&self) -> Ray3<T> {
        Ray3::from_points(self.p0, self.p1)
    }

    /// Unit axis direction `p0 → p1`.
    pub fn axis_direction(&self) -> Vector3<T> {
        (self.p1 - self.p0).normalized()
    }

    pub fn center(&self) -> Point3<T> {
        self.p0.midpoint(&self.p1)
    }

    pub fn bounding_box(&self) -> Aabb3<T> {
        let d = self.axis_direction();
        // Cap discs reach r * sqrt(1 - d_i^2) along each axis.
        let e = Vector3::new(
            self.radius * (T::one() - d.x() * d.x()).max(T::zero()).sqrt(),
            self.radius * (T::one() - d.y() * d.y()).max(T::zero()).sqrt(),
            self.radius * (T::one() - d.z() * d.z()).max(T::zero()).sqrt(),
        );
        let mut b = Aabb3::invalid();
        for c in [self.p0, self.p1] {
            b.extend_by(&(c - e));
            b.extend_by(&(c + e));
        }
        b
    }
}
