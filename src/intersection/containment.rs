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

//! Containment tests. A contained object may touch the container's
//! boundary.

use crate::{
    geometry::{
        aabb::Aabb3,
        plane::Plane3,
        point::{Point2, Point3},
        polygon::{Polygon2, Polygon3},
        quad::{Quad2, Quad3},
        sphere::Sphere3,
        triangle::{Triangle2, Triangle3},
    },
    kernel::orientation::{Winding, orient2d},
    numeric::scalar::Scalar,
};

/// Inclusive point-in-triangle test for either winding. Degenerate triangles
/// contain nothing.
pub fn triangle2_contains_point<T: Scalar>(tri: &Triangle2<T>, p: &Point2<T>) -> bool {
    if tri.is_degenerate() {
        return false;
    }
    let d0 = orient2d(&tri.p0, &tri.p1, p);
    let d1 = orient2d(&tri.p1, &tri.p2, p);
    let d2 = orient2d(&tri.p2, &tri.p0, p);
    let zero = T::zero();
    (d0 >= zero && d1 >= zero && d2 >= zero) || (d0 <= zero && d1 <= zero && d2 <= zero)
}

/// Inclusive point-in-quad test for a convex quad of either winding.
pub fn quad2_contains_point<T: Scalar>(quad: &Quad2<T>, p: &Point2<T>) -> bool {
    let pts = quad.points();
    let mut non_negative = true;
    let mut non_positive = true;
    for i in 0..4 {
        let d = orient2d(&pts[i], &pts[(i + 1) % 4], p);
        non_negative &= d >= T::zero();
        non_positive &= d <= T::zero();
    }
    if non_negative && non_positive {
        // every edge value is zero: the quad has no area
        return false;
    }
    non_negative || non_positive
}

/// Signs of the three edge tests of the fan triangle `(p0, p1, p2)`, plus
/// the raw value of the closing edge `(p2, p0)` for the next triangle.
/// A point exactly on an edge takes the `inside` sign of the loop.
#[inline]
fn inside_triangle_flags<T: Scalar>(
    p0: &Point2<T>,
    p1: &Point2<T>,
    p2: &Point2<T>,
    point: &Point2<T>,
    d01: Option<T>,
    inside: i32,
) -> ([i32; 3], T) {
    let sign = |d: T| {
        if d < T::zero() {
            -1
        } else if d > T::zero() {
            1
        } else {
            inside
        }
    };
    let d01 = d01.unwrap_or_else(|| orient2d(p0, p1, point));
    let d20 = orient2d(p2, p0, point);
    ([sign(d01), sign(orient2d(p1, p2, point)), sign(d20)], d20)
}

/// Point-in-polygon test for simple, possibly non-convex polygons.
///
/// Walks the fan `(p0, p[i-1], p[i])` and accumulates the shared sign of
/// every fan triangle whose three edge tests agree. The counter equals the
/// winding number of the loop around `point`, so containment is
/// `counter > 0` for counter-clockwise and `counter < 0` for clockwise
/// loops. The shared fan diagonal is evaluated once and reused negated.
/// Boundary points are inside for both windings.
pub fn polygon2_contains_point<T: Scalar>(poly: &Polygon2<T>, point: &Point2<T>, winding: Winding) -> bool {
    let pts = poly.points();
    if pts.len() < 3 {
        return false;
    }

    let inside = match winding {
        Winding::Ccw => 1,
        Winding::Cw => -1,
    };
    let p0 = pts[0];
    let mut counter = 0i32;
    let mut diagonal = None;
    for i in 2..pts.len() {
        let (flags, d20) = inside_triangle_flags(&p0, &pts[i - 1], &pts[i], point, diagonal, inside);
        if flags[0] == flags[1] && flags[1] == flags[2] {
            counter += flags[0];
        }
        diagonal = Some(-d20);
    }

    match winding {
        Winding::Ccw => counter > 0,
        Winding::Cw => counter < 0,
    }
}

pub fn aabb3_contains_triangle<T: Scalar>(b: &Aabb3<T>, tri: &Triangle3<T>) -> bool {
    tri.points().iter().all(|p| b.contains(p))
}

pub fn aabb3_contains_quad<T: Scalar>(b: &Aabb3<T>, quad: &Quad3<T>) -> bool {
    quad.points().iter().all(|p| b.contains(p))
}

/// Centre inside and no face closer than the radius.
pub fn aabb3_contains_sphere<T: Scalar>(b: &Aabb3<T>, sphere: &Sphere3<T>) -> bool {
    if sphere.is_invalid() || !b.contains(&sphere.center) {
        return false;
    }
    (0..3).all(|i| {
        sphere.center[i] - b.min[i] >= sphere.radius && b.max[i] - sphere.center[i] >= sphere.radius
    })
}

/// Is `p` within the `±eps` slab around the plane?
pub fn plane3_contains_point<T: Scalar>(plane: &Plane3<T>, eps: T, p: &Point3<T>) -> bool {
    let d = plane.height(p);
    d >= -eps && d <= eps
}

pub fn plane3_contains_aabb<T: Scalar>(plane: &Plane3<T>, eps: T, b: &Aabb3<T>) -> bool {
    b.is_valid() && b.corners().iter().all(|c| plane3_contains_point(plane, eps, c))
}

/// Signed distance of `p` to the polygon's supporting plane when `p` lies
/// within `eps` of that plane and inside the polygon.
pub fn polygon3_contains_point<T: Scalar>(poly: &Polygon3<T>, eps: T, p: &Point3<T>) -> Option<T> {
    let plane = poly.plane()?;
    let distance = plane.height(p);
    if distance < -eps || distance > eps {
        return None;
    }
    // The Newell normal makes the projected loop counter-clockwise.
    let poly2d = poly.to_plane_coords(&plane);
    let q = plane_coords(&plane, p);
    polygon2_contains_point(&poly2d, &q, Winding::Ccw).then_some(distance)
}

fn plane_coords<T: Scalar>(plane: &Plane3<T>, p: &Point3<T>) -> Point2<T> {
    let (u, v) = plane.basis();
    let d = *p - plane.point();
    Point2::new(d.dot(&u), d.dot(&v))
}

/// Convenience for callers holding a polygon in an unknown winding.
pub fn polygon2_contains_point_any_winding<T: Scalar>(poly: &Polygon2<T>, point: &Point2<T>) -> bool {
    match poly.winding() {
        Some(w) => polygon2_contains_point(poly, point, w),
        None => false,
    }
}
