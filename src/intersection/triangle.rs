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

//! Möller–Trumbore ray/triangle intersection and the 3D triangle, quad and
//! polygon predicates built on it.
//!
//! The ray parameter range is half-open, `[tmin, tmax)`: a segment test
//! with `tmax = 1` does not report a hit exactly at the far endpoint.

use log::debug;
use smallvec::SmallVec;

use crate::{
    geometry::{
        point::Point3,
        polygon::Polygon3,
        quad::Quad3,
        ray::Ray3,
        segment::Segment3,
        triangle::Triangle3,
        vector::{Vector3, VectorOps},
    },
    kernel::tolerance,
    numeric::scalar::Scalar,
    operations::triangulation::{EarClipping, Triangulate},
};

/// Barycentric hit data of a ray/triangle intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleHit<T: Scalar> {
    pub t: T,
    pub u: T,
    pub v: T,
}

/// Core Möller–Trumbore test against the triangle `p0, p0 + e01, p0 + e02`.
pub fn ray3_triangle_point_and_edges<T: Scalar>(
    ray: &Ray3<T>,
    p0: &Point3<T>,
    e01: &Vector3<T>,
    e02: &Vector3<T>,
    tmin: T,
    tmax: T,
) -> Option<TriangleHit<T>> {
    let plane = ray.direction.cross(e02);
    let det = e01.dot(&plane);
    if det.abs() < T::of(tolerance::global().parallel_det) {
        return None;
    }

    let inv_det = T::one() / det;
    let tv = ray.origin - *p0;
    let u = tv.dot(&plane) * inv_det;
    if u < T::zero() || u > T::one() {
        return None;
    }

    let qv = tv.cross(e01);
    let v = ray.direction.dot(&qv) * inv_det;
    if v < T::zero() || u + v > T::one() {
        return None;
    }

    let t = e02.dot(&qv) * inv_det;
    if t < tmin || t >= tmax {
        return None;
    }
    Some(TriangleHit { t, u, v })
}

pub fn ray3_triangle_hit<T: Scalar>(
    ray: &Ray3<T>,
    tri: &Triangle3<T>,
    tmin: T,
    tmax: T,
) -> Option<TriangleHit<T>> {
    ray3_triangle_point_and_edges(ray, &tri.p0, &tri.edge01(), &tri.edge02(), tmin, tmax)
}

/// Ray parameter of the hit within `[tmin, tmax)`.
#[inline]
pub fn ray3_triangle<T: Scalar>(ray: &Ray3<T>, tri: &Triangle3<T>, tmin: T, tmax: T) -> Option<T> {
    ray3_triangle_hit(ray, tri, tmin, tmax).map(|h| h.t)
}

/// Unbounded, two-sided ray test.
#[inline]
pub fn ray3_intersects_triangle<T: Scalar>(ray: &Ray3<T>, tri: &Triangle3<T>) -> bool {
    ray3_triangle(ray, tri, T::neg_infinity(), T::infinity()).is_some()
}

/// Hit point of the segment with the triangle, for `t ∈ [0, 1)`.
pub fn segment3_triangle<T: Scalar>(seg: &Segment3<T>, tri: &Triangle3<T>) -> Option<Point3<T>> {
    let ray = seg.as_ray();
    ray3_triangle(&ray, tri, T::zero(), T::one()).map(|t| ray.at(t))
}

#[inline]
pub fn segment3_intersects_triangle<T: Scalar>(seg: &Segment3<T>, tri: &Triangle3<T>) -> bool {
    segment3_triangle(seg, tri).is_some()
}

/// Quad as the two triangles `(p0, p1, p2)` and `(p0, p2, p3)`.
pub fn ray3_quad<T: Scalar>(ray: &Ray3<T>, quad: &Quad3<T>, tmin: T, tmax: T) -> Option<T> {
    let e02 = quad.p2 - quad.p0;
    ray3_triangle_point_and_edges(ray, &quad.p0, &(quad.p1 - quad.p0), &e02, tmin, tmax)
        .or_else(|| {
            ray3_triangle_point_and_edges(ray, &quad.p0, &e02, &(quad.p3 - quad.p0), tmin, tmax)
        })
        .map(|h| h.t)
}

#[inline]
pub fn ray3_intersects_quad<T: Scalar>(ray: &Ray3<T>, quad: &Quad3<T>) -> bool {
    ray3_quad(ray, quad, T::neg_infinity(), T::infinity()).is_some()
}

pub fn segment3_quad<T: Scalar>(seg: &Segment3<T>, quad: &Quad3<T>) -> Option<Point3<T>> {
    let ray = seg.as_ray();
    ray3_quad(&ray, quad, T::zero(), T::one()).map(|t| ray.at(t))
}

#[inline]
pub fn segment3_intersects_quad<T: Scalar>(seg: &Segment3<T>, quad: &Quad3<T>) -> bool {
    segment3_quad(seg, quad).is_some()
}

/// Ray against a polygon with a caller-supplied triangulation. Triples
/// with an index outside `points` are skipped.
pub fn ray3_polygon_indexed<T: Scalar>(
    ray: &Ray3<T>,
    points: &[Point3<T>],
    triangles: &[[usize; 3]],
    tmin: T,
    tmax: T,
) -> Option<T> {
    triangles.iter().find_map(|&[a, b, c]| {
        let (Some(&p0), Some(&p1), Some(&p2)) = (points.get(a), points.get(b), points.get(c)) else {
            debug!("skipping triangle [{}, {}, {}] of {} points", a, b, c, points.len());
            return None;
        };
        ray3_triangle(ray, &Triangle3::new(p0, p1, p2), tmin, tmax)
    })
}

/// Ray against a polygon triangulated by `triangulator`. A polygon that
/// cannot be triangulated is never hit.
pub fn ray3_polygon_with<T: Scalar, R: Triangulate<T, 3>>(
    ray: &Ray3<T>,
    polygon: &Polygon3<T>,
    triangulator: &R,
    tmin: T,
    tmax: T,
) -> Option<T> {
    let eps = T::of(tolerance::global().triangulation_eps);
    match triangulator.triangulate(polygon, eps) {
        Ok(triangles) => ray3_polygon_indexed(ray, polygon.points(), &triangles, tmin, tmax),
        Err(err) => {
            debug!("ray/polygon test skipped: {}", err);
            None
        }
    }
}

#[inline]
pub fn ray3_polygon<T: Scalar>(ray: &Ray3<T>, polygon: &Polygon3<T>, tmin: T, tmax: T) -> Option<T> {
    ray3_polygon_with(ray, polygon, &EarClipping, tmin, tmax)
}

/// Edge-crossing test in both directions. Coplanar overlapping triangles
/// whose edges never pierce the other triangle are not reported.
pub fn triangles_intersect_3<T: Scalar>(t0: &Triangle3<T>, t1: &Triangle3<T>) -> bool {
    t1.edges().iter().any(|e| segment3_intersects_triangle(e, t0))
        || t0.edges().iter().any(|e| segment3_intersects_triangle(e, t1))
}

/// The segment along which two triangles cut each other.
pub fn triangle3_triangle3_cut<T: Scalar>(t0: &Triangle3<T>, t1: &Triangle3<T>) -> Option<Segment3<T>> {
    let mut points: SmallVec<[Point3<T>; 2]> = SmallVec::new();
    for (tri, other) in [(t0, t1), (t1, t0)] {
        for e in other.edges() {
            if let Some(p) = segment3_triangle(&e, tri) {
                points.push(p);
                if points.len() == 2 {
                    return Some(Segment3::new(points[0], points[1]));
                }
            }
        }
    }
    None
}

pub fn quad3_intersects_triangle<T: Scalar>(quad: &Quad3<T>, tri: &Triangle3<T>) -> bool {
    tri.edges().iter().any(|e| segment3_intersects_quad(e, quad))
        || quad.edges().iter().any(|e| segment3_intersects_triangle(e, tri))
}

pub fn quads_intersect_3<T: Scalar>(q0: &Quad3<T>, q1: &Quad3<T>) -> bool {
    let [a, b] = q1.triangles();
    let [c, d] = q0.triangles();
    quad3_intersects_triangle(q0, &a)
        || quad3_intersects_triangle(q0, &b)
        || quad3_intersects_triangle(q1, &c)
        || quad3_intersects_triangle(q1, &d)
}
