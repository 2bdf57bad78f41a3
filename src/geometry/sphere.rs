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
    geometry::{aabb::Aabb3, point::Point3, vector::Vector3},
    numeric::scalar::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere3<T: Scalar> {
    pub center: Point3<T>,
    pub radius: T,
}

impl<T: Scalar> Sphere3<T> {
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Sphere3 { center, radius }
    }

    /// The empty sphere: NaN centre, radius `-1`.
    pub fn invalid() -> Self {
        Sphere3 {
            center: Point3::nan(),
            radius: -T::one(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.radius >= T::zero() && !self.center.is_nan()
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    #[inline]
    pub fn radius_squared(&self) -> T {
        self.radius * self.radius
    }

    pub fn contains(&self, p: &Point3<T>) -> bool {
        self.is_valid() && self.center.distance_squared_to(p) <= self.radius_squared()
    }

    pub fn bounding_box(&self) -> Aabb3<T> {
        if self.is_invalid() {
            return Aabb3::invalid();
        }
        let r = Vector3::new(self.radius, self.radius, self.radius);
        Aabb3::new(self.center - r, self.center + r)
    }
}
