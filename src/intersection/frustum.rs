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
    geometry::{aabb::Aabb3, matrix::Matrix4, vector::{Vector, Vector3}},
    numeric::scalar::Scalar,
};

/// Does the box touch the view volume of `projection`?
///
/// Clip space follows the DirectX convention `-w < x < w`, `-w < y < w`,
/// `0 < z < w`. Each clip plane `a·v + w >= 0` is a row combination, so the
/// test only rejects boxes lying fully behind one of the six planes and may
/// accept boxes near frustum corners.
pub fn aabb3_intersects_frustum<T: Scalar>(b: &Aabb3<T>, projection: &Matrix4<T>) -> bool {
    if b.is_invalid() {
        return false;
    }
    let r0 = projection.row(0);
    let r1 = projection.row(1);
    let r2 = projection.row(2);
    let r3 = projection.row(3);
    let planes: [Vector<T, 4>; 6] = [r3 + r0, r3 - r0, r3 + r1, r3 - r1, r2, r3 - r2];

    !planes.iter().any(|plane| {
        let n = Vector3::new(plane[0], plane[1], plane[2]);
        let w = plane[3];
        let (min, max) = b.min_max_in_direction(&n);
        min.as_vector().dot(&n) + w < T::zero() && max.as_vector().dot(&n) + w < T::zero()
    })
}
