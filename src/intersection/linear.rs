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

//! Segment, ray and infinite-line solvers.
//!
//! 2D queries solve the 2×2 system with cross products (Cramer's rule) and
//! fall back to a 1D interval overlap for parallel input. 3D queries use
//! closest-point parameters and an absolute distance threshold.

use crate::{
    geometry::{
        point::{Point2, Point3},
        range::Range1,
        ray::{Ray2, Ray3},
        segment::{Segment2, Segment3},
        vector::VectorOps,
    },
    numeric::scalar::Scalar,
};

/// Options for [`segment_intersection_2`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SegmentQuery<T: Scalar> {
    /// Absolute tolerance, converted to a parameter tolerance per segment.
    pub absolute_eps: Option<T>,
    /// Report collinear overlapping segments instead of treating all
    /// parallel pairs as disjoint.
    pub overlapping: bool,
}

impl<T: Scalar> SegmentQuery<T> {
    pub fn overlapping() -> Self {
        SegmentQuery {
            absolute_eps: None,
            overlapping: true,
        }
    }

    pub fn with_eps(mut self, eps: T) -> Self {
        self.absolute_eps = Some(eps);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection2<T: Scalar> {
    None,
    Point(Point2<T>),
    /// Collinear overlap. `range` is measured as distance along the first
    /// segment from its start; `point` is where the overlap begins.
    Overlapping { point: Point2<T>, range: Range1<T> },
}

impl<T: Scalar> SegmentIntersection2<T> {
    #[inline]
    pub fn is_hit(&self) -> bool {
        !matches!(self, SegmentIntersection2::None)
    }

    pub fn point(&self) -> Option<Point2<T>> {
        match *self {
            SegmentIntersection2::None => None,
            SegmentIntersection2::Point(p) => Some(p),
            SegmentIntersection2::Overlapping { point, .. } => Some(point),
        }
    }
}

pub fn segment_intersection_2<T: Scalar>(
    s0: &Segment2<T>,
    s1: &Segment2<T>,
    query: SegmentQuery<T>,
) -> SegmentIntersection2<T> {
    let eps = query.absolute_eps.unwrap_or(T::zero());
    let point_eps = eps.max(T::tiny());

    let a = s0.a - s1.a;
    if a.norm2().is_tiny() {
        return SegmentIntersection2::Point(s1.a);
    }

    let u = s0.direction();
    let v = s1.direction();
    let lu = u.norm();
    let lv = v.norm();

    // Zero-length input degrades to a point-on-segment check.
    if lu.is_tiny() || lv.is_tiny() {
        let (p, seg) = if lu.is_tiny() { (s0.a, s1) } else { (s1.a, s0) };
        return if seg.is_point_on(&p, point_eps) {
            SegmentIntersection2::Point(p)
        } else {
            SegmentIntersection2::None
        };
    }

    let cross = u.cross(&v);
    if !cross.is_tiny() {
        let t0 = (a.y() * v.x() - a.x() * v.y()) / cross;
        let e0 = eps / lu;
        if t0 < -e0 || t0 > T::one() + e0 {
            return SegmentIntersection2::None;
        }
        let t1 = (a.y() * u.x() - a.x() * u.y()) / cross;
        let e1 = eps / lv;
        if t1 < -e1 || t1 > T::one() + e1 {
            return SegmentIntersection2::None;
        }
        return SegmentIntersection2::Point(s0.a + u * t0);
    }

    if !query.overlapping {
        return SegmentIntersection2::None;
    }
    // Parallel: only collinear segments can overlap.
    let dir = u / lu;
    if dir.cross(&(s1.a - s0.a)).abs() > point_eps {
        return SegmentIntersection2::None;
    }
    let r0 = Range1::new(T::zero(), lu);
    let r1 = Range1::new(dir.dot(&(s1.a - s0.a)), dir.dot(&(s1.b - s0.a)));
    match r0.intersects(&r1, eps) {
        Some(range) => SegmentIntersection2::Overlapping {
            point: s0.a + dir * range.min,
            range,
        },
        None => SegmentIntersection2::None,
    }
}

/// Boolean segment test; collinear overlaps count as hits. This differs from
/// `SegmentQuery::default()`, which leaves `overlapping` off.
#[inline]
pub fn segments_intersect_2<T: Scalar>(s0: &Segment2<T>, s1: &Segment2<T>) -> bool {
    segment_intersection_2(s0, s1, SegmentQuery::overlapping()).is_hit()
}

/// Does the infinite line through `ray` cross the segment?
pub fn ray2_intersects_segment<T: Scalar>(ray: &Ray2<T>, seg: &Segment2<T>) -> bool {
    if ray.direction.is_tiny() {
        return false;
    }
    let n = ray.direction.perp();
    let d0 = n.dot(&(seg.a - ray.origin));
    let d1 = n.dot(&(seg.b - ray.origin));
    if d0.is_tiny() || d1.is_tiny() {
        return true;
    }
    (d0 < T::zero()) != (d1 < T::zero())
}

/// Parameter on the two-sided `ray` where it meets the segment; `t` may be
/// negative. A collinear segment is reported only with `overlapping`, as the
/// parameter nearest to the origin (`0` when the segment straddles it).
pub fn ray2_segment_intersection<T: Scalar>(
    ray: &Ray2<T>,
    seg: &Segment2<T>,
    overlapping: bool,
) -> Option<T> {
    let a = seg.a - ray.origin;
    let u = seg.direction();
    let v = ray.direction;

    let cross = u.cross(&v);
    let n = a.y() * u.x() - a.x() * u.y();

    if !cross.is_tiny() {
        let t0 = (a.y() * v.x() - a.x() * v.y()) / cross;
        if t0 >= T::zero() && t0 <= T::one() {
            return Some(n / cross);
        }
        return None;
    }

    if n.is_tiny() && overlapping {
        let lv2 = v.norm2();
        if lv2.is_tiny() {
            return None;
        }
        let ta = v.dot(&a) / lv2;
        let tb = v.dot(&(seg.b - ray.origin)) / lv2;
        if (ta < T::zero() && tb > T::zero()) || (ta > T::zero() && tb < T::zero()) {
            return Some(T::zero());
        }
        return Some(if ta >= T::zero() { ta.min(tb) } else { ta.max(tb) });
    }
    None
}

/// Relation of two infinite 2D lines given as rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineRelation2<T: Scalar> {
    /// Single crossing at `r0.at(t0) == r1.at(t1)`.
    Crossing { t0: T, t1: T },
    /// Parallel and coincident.
    Coincident,
    /// Parallel and apart.
    Disjoint,
}

pub fn ray2_ray2<T: Scalar>(r0: &Ray2<T>, r1: &Ray2<T>) -> LineRelation2<T> {
    let a = r0.origin - r1.origin;
    if a.abs().coords.iter().all(|c| *c < T::tiny()) {
        return LineRelation2::Crossing {
            t0: T::zero(),
            t1: T::zero(),
        };
    }

    let u = r0.direction;
    let v = r1.direction;
    let cross = u.cross(&v);
    if !cross.is_tiny() {
        return LineRelation2::Crossing {
            t0: (a.y() * v.x() - a.x() * v.y()) / cross,
            t1: (a.y() * u.x() - a.x() * u.y()) / cross,
        };
    }
    if (a.y() * u.x() - a.x() * u.y()).is_tiny() {
        LineRelation2::Coincident
    } else {
        LineRelation2::Disjoint
    }
}

/// Two-sided rays intersect unless they are parallel and apart.
#[inline]
pub fn rays_intersect_2<T: Scalar>(r0: &Ray2<T>, r1: &Ray2<T>) -> bool {
    !matches!(ray2_ray2(r0, r1), LineRelation2::Disjoint)
}

/// Crossing point of two infinite lines, `None` when parallel.
pub fn line_intersection_point_2<T: Scalar>(r0: &Ray2<T>, r1: &Ray2<T>) -> Option<Point2<T>> {
    match ray2_ray2(r0, r1) {
        LineRelation2::Crossing { t0, .. } => Some(r0.at(t0)),
        _ => None,
    }
}

/// Closest point on `s0` when the segments come within `eps` of each other.
pub fn segment3_segment3<T: Scalar>(
    s0: &Segment3<T>,
    s1: &Segment3<T>,
    eps: T,
) -> Option<Point3<T>> {
    let (d, p) = s0.minimal_distance_to(s1);
    (d < eps).then_some(p)
}

#[inline]
pub fn segments_intersect_3<T: Scalar>(s0: &Segment3<T>, s1: &Segment3<T>) -> bool {
    segment3_segment3(s0, s1, T::tiny()).is_some()
}

/// Ray parameter of the closest approach when the infinite line of `ray`
/// comes within `eps` of the segment.
pub fn ray3_segment3<T: Scalar>(ray: &Ray3<T>, seg: &Segment3<T>, eps: T) -> Option<T> {
    let (_, t1) = ray.closest_parameters(&seg.as_ray());
    let q = seg.at(t1.max(T::zero()).min(T::one()));
    let t = ray.closest_parameter(&q);
    (ray.at(t).distance_to(&q) < eps).then_some(t)
}

/// Closest-point parameters `(t0, t1)` of two infinite 3D lines that come
/// within `eps` of each other.
pub fn ray3_ray3<T: Scalar>(r0: &Ray3<T>, r1: &Ray3<T>, eps: T) -> Option<(T, T)> {
    let (d, t0, t1) = r0.minimal_distance_to(r1);
    (d < eps).then_some((t0, t1))
}

#[inline]
pub fn rays_intersect_3<T: Scalar>(r0: &Ray3<T>, r1: &Ray3<T>) -> bool {
    ray3_ray3(r0, r1, T::tiny()).is_some()
}
