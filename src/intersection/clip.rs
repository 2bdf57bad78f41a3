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

//! Box clipping against segments, rays and planar primitives.
//!
//! Primitive/box tests escalate through three stages: outside-flag trivial
//! accept/reject, per-edge segment clipping, and finally a containment check
//! for the case where the primitive surrounds the box without any edge
//! entering it (box diagonals in 3D, `box.min` in 2D).

use log::debug;
use smallvec::SmallVec;

use crate::{
    geometry::{
        aabb::{Aabb, Aabb2, Aabb3},
        cylinder::Cylinder3,
        plane::Plane2,
        point::{Point, Point3},
        polygon::{Polygon2, Polygon3},
        quad::{Quad2, Quad3},
        ray::{Ray2, Ray3},
        segment::{Segment, Segment2},
        sphere::Sphere3,
        triangle::{Triangle2, Triangle3},
        vector::Vector3,
    },
    intersection::{
        containment::{polygon2_contains_point_any_winding, quad2_contains_point, triangle2_contains_point},
        outside::{OutsideFlags, aabb_intersects_segment, aabb_intersects_segment_with_flags, outside_flags},
        triangle::{ray3_polygon_indexed, ray3_quad, ray3_triangle},
    },
    kernel::tolerance,
    numeric::scalar::Scalar,
    operations::triangulation::{EarClipping, Triangulate},
};

/// Result of the flag and edge stages of a closed-loop/box test.
enum LoopTest {
    Hit,
    Miss,
    /// No vertex inside and no edge crossing: only full enclosure remains.
    Undecided,
}

fn loop_against_box<T: Scalar, const N: usize>(
    b: &Aabb<T, N>,
    points: &[Point<T, N>],
) -> LoopTest {
    let flags: SmallVec<[OutsideFlags; 8]> = points.iter().map(|p| outside_flags(b, p)).collect();
    if flags.iter().any(|f| f.is_empty()) {
        return LoopTest::Hit;
    }
    let common = flags.iter().fold(!OutsideFlags::NONE, |acc, f| acc & *f);
    if !common.is_empty() {
        return LoopTest::Miss;
    }
    let n = points.len();
    for i in 0..n {
        let j = (i + 1) % n;
        if aabb_intersects_segment_with_flags(b, &points[i], &points[j], flags[i], flags[j]) {
            return LoopTest::Hit;
        }
    }
    LoopTest::Undecided
}

/// The four space diagonals of the box as rays spanning `t ∈ [0, 1]`.
fn box_diagonals<T: Scalar>(b: &Aabb3<T>) -> [Ray3<T>; 4] {
    let s = b.size();
    [
        Ray3::new(b.min, s),
        Ray3::new(
            Point3::new(b.max.x(), b.min.y(), b.min.z()),
            Vector3::new(-s.x(), s.y(), s.z()),
        ),
        Ray3::new(
            Point3::new(b.min.x(), b.max.y(), b.min.z()),
            Vector3::new(s.x(), -s.y(), s.z()),
        ),
        Ray3::new(
            Point3::new(b.min.x(), b.min.y(), b.max.z()),
            Vector3::new(s.x(), s.y(), -s.z()),
        ),
    ]
}

#[inline]
pub fn aabb3_intersects_segment<T: Scalar>(b: &Aabb3<T>, seg: &Segment<T, 3>) -> bool {
    aabb_intersects_segment(b, &seg.a, &seg.b)
}

pub fn aabb3_intersects_triangle<T: Scalar>(b: &Aabb3<T>, tri: &Triangle3<T>) -> bool {
    match loop_against_box(b, &tri.points()) {
        LoopTest::Hit => true,
        LoopTest::Miss => false,
        LoopTest::Undecided => box_diagonals(b)
            .iter()
            .any(|d| ray3_triangle(d, tri, T::zero(), T::one()).is_some()),
    }
}

pub fn aabb3_intersects_quad<T: Scalar>(b: &Aabb3<T>, quad: &Quad3<T>) -> bool {
    match loop_against_box(b, &quad.points()) {
        LoopTest::Hit => true,
        LoopTest::Miss => false,
        LoopTest::Undecided => box_diagonals(b)
            .iter()
            .any(|d| ray3_quad(d, quad, T::zero(), T::one()).is_some()),
    }
}

pub fn aabb3_intersects_polygon<T: Scalar>(b: &Aabb3<T>, poly: &Polygon3<T>) -> bool {
    aabb3_intersects_polygon_with(b, poly, &EarClipping)
}

/// Box/polygon test with an explicit triangulator for the enclosure stage.
pub fn aabb3_intersects_polygon_with<T: Scalar, R: Triangulate<T, 3>>(
    b: &Aabb3<T>,
    poly: &Polygon3<T>,
    triangulator: &R,
) -> bool {
    if poly.is_empty() {
        return false;
    }
    match loop_against_box(b, poly.points()) {
        LoopTest::Hit => true,
        LoopTest::Miss => false,
        LoopTest::Undecided => {
            let eps = T::of(tolerance::global().triangulation_eps);
            match triangulator.triangulate(poly, eps) {
                Ok(triangles) => box_diagonals(b).iter().any(|d| {
                    ray3_polygon_indexed(d, poly.points(), &triangles, T::zero(), T::one()).is_some()
                }),
                Err(err) => {
                    debug!("box/polygon enclosure test skipped: {}", err);
                    false
                }
            }
        }
    }
}

/// Nearest slab entry parameter of the two-sided ray, `0` when the origin
/// is inside. Candidates are validated against a slightly enlarged box.
pub fn aabb3_ray<T: Scalar>(b: &Aabb3<T>, ray: &Ray3<T>) -> Option<T> {
    if b.is_invalid() {
        return None;
    }
    let out0 = outside_flags(b, &ray.origin);
    if out0.is_empty() {
        return Some(T::zero());
    }

    let large = b.enlarged_by_relative_eps(T::of(1e-5));
    let mut best = T::infinity();
    for axis in 0..3 {
        if ray.direction[axis].is_tiny() {
            continue;
        }
        let bound = if out0.intersects(OutsideFlags::min_bit(axis)) {
            b.min[axis]
        } else if out0.intersects(OutsideFlags::max_bit(axis)) {
            b.max[axis]
        } else {
            continue;
        };
        let t = (bound - ray.origin[axis]) / ray.direction[axis];
        if t.abs() < best.abs() && large.contains(&ray.at(t)) {
            best = t;
        }
    }
    best.is_finite().then_some(best)
}

#[inline]
pub fn aabb3_intersects_ray<T: Scalar>(b: &Aabb3<T>, ray: &Ray3<T>) -> bool {
    aabb3_ray(b, ray).is_some()
}

pub fn aabb3_intersects_sphere<T: Scalar>(b: &Aabb3<T>, sphere: &Sphere3<T>) -> bool {
    if b.is_invalid() || sphere.is_invalid() {
        return false;
    }
    b.closest_point(&sphere.center).distance_squared_to(&sphere.center) <= sphere.radius_squared()
}

/// Conservative: compares against the cylinder's bounding box.
pub fn aabb3_intersects_cylinder<T: Scalar>(b: &Aabb3<T>, cylinder: &Cylinder3<T>) -> bool {
    b.intersects(&cylinder.bounding_box())
}

#[inline]
pub fn aabb2_intersects_segment<T: Scalar>(b: &Aabb2<T>, seg: &Segment2<T>) -> bool {
    aabb_intersects_segment(b, &seg.a, &seg.b)
}

/// Infinite-line test: the corners' signed distances to the ray's line
/// straddle zero. A zero direction never hits.
pub fn aabb2_intersects_ray<T: Scalar>(b: &Aabb2<T>, ray: &Ray2<T>) -> bool {
    if b.is_invalid() || ray.direction.is_tiny() {
        return false;
    }
    let n = ray.direction.perp();
    let mut lo = T::infinity();
    let mut hi = T::neg_infinity();
    for c in b.corners() {
        let d = n.dot(&(c - ray.origin));
        lo = lo.min(d);
        hi = hi.max(d);
    }
    lo <= T::zero() && hi >= T::zero()
}

/// The part of the infinite line `plane` inside the box, by Liang–Barsky
/// clipping.
pub fn aabb2_plane2_clip<T: Scalar>(b: &Aabb2<T>, plane: &Plane2<T>) -> Option<Segment2<T>> {
    if b.is_invalid() || plane.normal.is_tiny() {
        return None;
    }
    let p = plane.point();
    let dir = plane.normal.perp();
    let mut t0 = T::neg_infinity();
    let mut t1 = T::infinity();
    for axis in 0..2 {
        if dir[axis].is_tiny() {
            if p[axis] < b.min[axis] || p[axis] > b.max[axis] {
                return None;
            }
            continue;
        }
        let ta = (b.min[axis] - p[axis]) / dir[axis];
        let tb = (b.max[axis] - p[axis]) / dir[axis];
        t0 = t0.max(ta.min(tb));
        t1 = t1.min(ta.max(tb));
        if t0 > t1 {
            return None;
        }
    }
    Some(Segment2::new(p + dir * t0, p + dir * t1))
}

pub fn aabb2_intersects_triangle<T: Scalar>(b: &Aabb2<T>, tri: &Triangle2<T>) -> bool {
    match loop_against_box(b, &tri.points()) {
        LoopTest::Hit => true,
        LoopTest::Miss => false,
        LoopTest::Undecided => triangle2_contains_point(tri, &b.min),
    }
}

pub fn aabb2_intersects_quad<T: Scalar>(b: &Aabb2<T>, quad: &Quad2<T>) -> bool {
    match loop_against_box(b, &quad.points()) {
        LoopTest::Hit => true,
        LoopTest::Miss => false,
        LoopTest::Undecided => quad2_contains_point(quad, &b.min),
    }
}

pub fn aabb2_intersects_polygon<T: Scalar>(b: &Aabb2<T>, poly: &Polygon2<T>) -> bool {
    if poly.is_empty() {
        return false;
    }
    match loop_against_box(b, poly.points()) {
        LoopTest::Hit => true,
        LoopTest::Miss => false,
        LoopTest::Undecided => polygon2_contains_point_any_winding(poly, &b.min),
    }
}
