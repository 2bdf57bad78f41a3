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

//! Separating-axis test for convex 2D polygons.

use crate::{
    geometry::{point::Point2, polygon::Polygon2, range::Range1, vector::Vector2},
    numeric::scalar::Scalar,
};

fn project<T: Scalar>(points: &[Point2<T>], axis: &Vector2<T>) -> Range1<T> {
    Range1::from_values(points.iter().map(|p| p.as_vector().dot(axis)))
}

fn separated_along_edges<T: Scalar>(edges_of: &[Point2<T>], a: &[Point2<T>], b: &[Point2<T>]) -> bool {
    let n = edges_of.len();
    (0..n).any(|i| {
        let d = edges_of[(i + 1) % n] - edges_of[i];
        let axis = Vector2::new(-d.y(), d.x());
        !project(a, &axis).overlaps(&project(b, &axis))
    })
}

/// Convex polygons intersect unless some edge normal of either one separates
/// their projections. Touching projections count as overlapping.
pub fn convex_polygons_intersect_2<T: Scalar>(p0: &Polygon2<T>, p1: &Polygon2<T>) -> bool {
    let (a, b) = (p0.points(), p1.points());
    if a.is_empty() || b.is_empty() {
        return false;
    }
    !separated_along_edges(a, a, b) && !separated_along_edges(b, a, b)
}
