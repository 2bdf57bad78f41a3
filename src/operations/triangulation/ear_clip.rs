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

use log::trace;

use crate::{
    error::GeometryError,
    geometry::{
        point::Point2,
        polygon::{Polygon2, Polygon3},
    },
    kernel::orientation::orient2d,
    numeric::scalar::Scalar,
    operations::triangulation::Triangulate,
};

/// Ear clipping in the plane. 3D polygons are projected along the dominant
/// axis of their Newell normal first.
///
/// `eps` bounds the sine of the corner angle below which a vertex counts as
/// collinear with its neighbours; such vertices are dropped without
/// emitting a triangle.
#[derive(Clone, Copy, Debug, Default)]
pub struct EarClipping;

impl<T: Scalar> Triangulate<T, 2> for EarClipping {
    fn triangulate(&self, polygon: &Polygon2<T>, eps: T) -> Result<Vec<[usize; 3]>, GeometryError> {
        ear_clip(polygon.points(), eps)
    }
}

impl<T: Scalar> Triangulate<T, 3> for EarClipping {
    fn triangulate(&self, polygon: &Polygon3<T>, eps: T) -> Result<Vec<[usize; 3]>, GeometryError> {
        if polygon.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: polygon.len(),
            });
        }
        let normal = polygon.newell_normal();
        if normal.is_tiny() {
            return Err(GeometryError::DegeneratePolygon);
        }
        let axis = normal.dominant_axis();
        let projected: Vec<Point2<T>> = polygon.points().iter().map(|p| p.drop_axis(axis)).collect();
        ear_clip(&projected, eps)
    }
}

fn ear_clip<T: Scalar>(points: &[Point2<T>], eps: T) -> Result<Vec<[usize; 3]>, GeometryError> {
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::TooFewVertices { count: n });
    }

    let area = Polygon2::new(points.to_vec()).signed_area();
    if area.is_tiny() {
        return Err(GeometryError::DegeneratePolygon);
    }
    // Work on a counter-clockwise loop, emit triangles in the input winding.
    let reversed = area < T::zero();
    let mut ring: Vec<usize> = if reversed {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };
    let emit = |a: usize, b: usize, c: usize| if reversed { [c, b, a] } else { [a, b, c] };

    let mut triangles = Vec::with_capacity(n - 2);
    while ring.len() > 3 {
        let m = ring.len();
        let mut clipped = false;
        for i in 0..m {
            let ia = ring[(i + m - 1) % m];
            let ib = ring[i];
            let ic = ring[(i + 1) % m];
            let (a, b, c) = (points[ia], points[ib], points[ic]);

            let o = orient2d(&a, &b, &c);
            let scale = a.distance_to(&b) * b.distance_to(&c);
            if o.abs() <= eps * scale {
                trace!("ear clipping: dropping collinear vertex {}", ib);
                ring.remove(i);
                clipped = true;
                break;
            }
            if o < T::zero() {
                continue;
            }

            let blocked = ring.iter().any(|&j| {
                if j == ia || j == ib || j == ic {
                    return false;
                }
                let p = points[j];
                if p == a || p == b || p == c {
                    return false;
                }
                orient2d(&a, &b, &p) >= T::zero()
                    && orient2d(&b, &c, &p) >= T::zero()
                    && orient2d(&c, &a, &p) >= T::zero()
            });
            if !blocked {
                triangles.push(emit(ia, ib, ic));
                ring.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            return Err(GeometryError::DegeneratePolygon);
        }
    }

    let (a, b, c) = (points[ring[0]], points[ring[1]], points[ring[2]]);
    if !orient2d(&a, &b, &c).is_tiny() {
        triangles.push(emit(ring[0], ring[1], ring[2]));
    }
    Ok(triangles)
}
