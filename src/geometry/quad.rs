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
    geometry::{aabb::Aabb, point::Point, segment::Segment, triangle::Triangle},
    numeric::scalar::Scalar,
};

/// Four ordered, roughly coplanar points. Planarity is not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad<T: Scalar, const N: usize> {
    pub p0: Point<T, N>,
    pub p1: Point<T, N>,
    pub p2: Point<T, N>,
    pub p3: Point<T, N>,
}

pub type Quad2<T> = Quad<T, 2>;
pub type Quad3<T> = Quad<T, 3>;

impl<T: Scalar, const N: usize> Quad<T, N> {
    #[inline(always)]
    pub fn new(p0: Point<T, N>, p1: Point<T, N>, p2: Point<T, N>, p3: Point<T, N>) -> Self {
        Quad { p0, p1, p2, p3 }
    }

    #[inline(always)]
    pub fn points(&self) -> [Point<T, N>; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    pub fn edges(&self) -> [Segment<T, N>; 4] {
        [
            Segment::new(self.p0, self.p1),
            Segment::new(self.p1, self.p2),
            Segment::new(self.p2, self.p3),
            Segment::new(self.p3, self.p0),
        ]
    }

    /// The two triangles sharing the `p0p2` diagonal.
    pub fn triangles(&self) -> [Triangle<T, N>; 2] {
        [
            Triangle::new(self.p0, self.p1, self.p2),
            Triangle::new(self.p0, self.p2, self.p3),
        ]
    }

    pub fn bounding_box(&self) -> Aabb<T, N> {
        Aabb::from_points(self.points())
    }
}
