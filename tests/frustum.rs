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

use isect::geometry::{Aabb3, Matrix4, Point3};
use isect::intersection::frustum::aabb3_intersects_frustum;

#[test]
fn test_box_against_identity_frustum() {
    // Identity projection clips to [-1, 1] x [-1, 1] x [0, 1].
    let projection = Matrix4::<f64>::identity();
    let inside = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.5, 0.5, 0.5));
    let straddling = Aabb3::new(Point3::new(0.5, 0.5, 0.5), Point3::new(2.0, 2.0, 2.0));
    let right = Aabb3::new(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0));
    let behind = Aabb3::new(Point3::new(0.0, 0.0, -2.0), Point3::new(1.0, 1.0, -1.0));

    assert!(aabb3_intersects_frustum(&inside, &projection));
    assert!(aabb3_intersects_frustum(&straddling, &projection));
    assert!(!aabb3_intersects_frustum(&right, &projection));
    assert!(!aabb3_intersects_frustum(&behind, &projection));
    assert!(!aabb3_intersects_frustum(&Aabb3::invalid(), &projection));
}

#[test]
fn test_box_against_perspective_frustum() {
    // Row-major perspective looking down +z with w = z, depth in [1, 2].
    let projection = Matrix4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 2.0, -2.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);
    let ahead = Aabb3::new(Point3::new(-0.1, -0.1, 1.4), Point3::new(0.1, 0.1, 1.6));
    let beside = Aabb3::new(Point3::new(3.0, -0.1, 1.4), Point3::new(3.5, 0.1, 1.6));
    let beyond = Aabb3::new(Point3::new(-0.1, -0.1, 5.0), Point3::new(0.1, 0.1, 6.0));

    assert!(aabb3_intersects_frustum(&ahead, &projection));
    assert!(!aabb3_intersects_frustum(&beside, &projection));
    assert!(!aabb3_intersects_frustum(&beyond, &projection));
}
