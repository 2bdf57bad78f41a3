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
    geometry::{point::Point3, vector::Vector3},
    numeric::scalar::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle3<T: Scalar> {
    pub center: Point3<T>,
    pub normal: Vector3<T>,
    pub radius: T,
}

impl<T: Scalar> Circle3<T> {
    pub fn new(center: Point3<T>, normal: Vector3<T>, radius: T) -> Self {
        Circle3 {
            center,
            normal,
            radius,
        }
    }
}

/// Ellipse in 3D: `major` and `minor` are the semi-axis vectors, orthogonal
/// to each other and to `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse3<T: Scalar> {
    pub center: Point3<T>,
    pub normal: Vector3<T>,
    pub major: Vector3<T>,
    pub minor: Vector3<T>,
}

impl<T: Scalar> Ellipse3<T> {
    pub fn new(center: Point3<T>, normal: Vector3<T>, major: Vector3<T>, minor: Vector3<T>) -> Self {
        Ellipse3 {
            center,
            normal,
            major,
            minor,
        }
    }

    /// Point at angle `alpha` (radians) along the perimeter.
    pub fn point_at(&self, alpha: T) -> Point3<T> {
        self.center + self.major * alpha.cos() + self.minor * alpha.sin()
    }
}
