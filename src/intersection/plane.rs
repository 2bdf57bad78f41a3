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

//! Signed-distance plane classification, box splitting, and plane
//! predicates against linear and planar primitives.

use log::trace;

use crate::{
    geometry::{
        aabb::{Aabb2, Aabb3},
        matrix::Matrix3,
        plane::{Plane2, Plane3},
        point::{Point2, Point3},
        polygon::Polygon3,
        ray::{Ray2, Ray3},
        segment::{Segment2, Segment3},
        sphere::Sphere3,
        triangle::Triangle3,
        vector::{Vector3, VectorOps},
    },
    kernel::predicates::{Sign, Signs, are_equal, signs},
    numeric::scalar::Scalar,
};

/// Corner pairs of the 12 box edges, using the `Aabb::corner` index
/// convention.
const CUBE_EDGE_VERTEX0: [usize; 12] = [0, 2, 4, 6, 0, 1, 4, 5, 0, 1, 2, 3];
const CUBE_EDGE_VERTEX1: [usize; 12] = [1, 3, 5, 7, 2, 3, 6, 7, 4, 5, 6, 7];

/// Heights of the eight corners, built from per-axis partial sums.
fn corner_heights<T: Scalar>(b: &Aabb3<T>, plane: &Plane3<T>) -> [T; 8] {
    let n = plane.normal;
    let np_min_x = n.x() * b.min.x();
    let np_max_x = n.x() * b.max.x();
    let np_min_y = n.y() * b.min.y();
    let np_max_y = n.y() * b.max.y();
    let h_min_z = n.z() * b.min.z() - plane.distance;
    let h_max_z = n.z() * b.max.z() - plane.distance;

    let h_min_y_min_z = np_min_y + h_min_z;
    let h_max_y_min_z = np_max_y + h_min_z;
    let h_min_y_max_z = np_min_y + h_max_z;
    let h_max_y_max_z = np_max_y + h_max_z;
    [
        np_min_x + h_min_y_min_z,
        np_max_x + h_min_y_min_z,
        np_min_x + h_max_y_min_z,
        np_max_x + h_max_y_min_z,
        np_min_x + h_min_y_max_z,
        np_max_x + h_min_y_max_z,
        np_min_x + h_max_y_max_z,
        np_max_x + h_max_y_max_z,
    ]
}

/// Union of the corner signs of the box against the plane.
pub fn aabb3_plane_signs<T: Scalar>(b: &Aabb3<T>, plane: &Plane3<T>, eps: T) -> Signs {
    corner_heights(b, plane)
        .iter()
        .fold(Signs::NONE, |acc, h| acc | signs(*h, eps))
}

/// The box intersects or touches the plane unless all corners are strictly
/// on one side.
pub fn aabb3_intersects_plane<T: Scalar>(b: &Aabb3<T>, plane: &Plane3<T>, eps: T) -> bool {
    if b.is_invalid() {
        return false;
    }
    let s = aabb3_plane_signs(b, plane, eps);
    s != Signs::NEGATIVE && s != Signs::POSITIVE
}

/// Bounding boxes of the parts of a box on each side of a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneSplit<T: Scalar> {
    pub signs: Signs,
    pub negative: Aabb3<T>,
    pub zero: Aabb3<T>,
    pub positive: Aabb3<T>,
}

/// Splits `b` by `plane`. Corners within `eps` of the plane extend all three
/// parts; edges with strictly opposite corner signs contribute their
/// interpolated crossing point to all three. Empty parts are invalid boxes.
pub fn aabb3_split<T: Scalar>(b: &Aabb3<T>, plane: &Plane3<T>, eps: T) -> PlaneSplit<T> {
    let heights = corner_heights(b, plane);
    let mut corner_signs = [Sign::Zero; 8];
    let mut all = Signs::NONE;
    for (i, h) in heights.iter().enumerate() {
        corner_signs[i] = Sign::of(*h, eps);
        all |= corner_signs[i].as_signs();
    }

    let mut split = PlaneSplit {
        signs: all,
        negative: Aabb3::invalid(),
        zero: Aabb3::invalid(),
        positive: Aabb3::invalid(),
    };
    if all == Signs::ZERO {
        split.zero = *b;
        return split;
    }
    if all == Signs::POSITIVE {
        split.positive = *b;
        return split;
    }
    if all == Signs::NEGATIVE {
        split.negative = *b;
        return split;
    }

    let corners = b.corners();
    for (i, c) in corners.iter().enumerate() {
        match corner_signs[i] {
            Sign::Negative => split.negative.extend_by(c),
            Sign::Positive => split.positive.extend_by(c),
            Sign::Zero => {
                split.negative.extend_by(c);
                split.zero.extend_by(c);
                split.positive.extend_by(c);
            }
        }
    }
    if all == Signs::NON_POSITIVE {
        split.positive = Aabb3::invalid();
        return split;
    }
    if all == Signs::NON_NEGATIVE {
        split.negative = Aabb3::invalid();
        return split;
    }

    for (&i0, &i1) in CUBE_EDGE_VERTEX0.iter().zip(CUBE_EDGE_VERTEX1.iter()) {
        let opposite = matches!(
            (corner_signs[i0], corner_signs[i1]),
            (Sign::Negative, Sign::Positive) | (Sign::Positive, Sign::Negative)
        );
        if opposite {
            let h0 = heights[i0];
            let t = h0 / (h0 - heights[i1]);
            let p = corners[i0].lerp(&corners[i1], t);
            split.negative.extend_by(&p);
            split.zero.extend_by(&p);
            split.positive.extend_by(&p);
        }
    }
    split
}

/// Corner heights all within the `±eps` band or of one strict sign.
pub fn plane3_intersects_segment<T: Scalar>(plane: &Plane3<T>, seg: &Segment3<T>, eps: T) -> bool {
    let s0 = Sign::of(plane.height(&seg.a), eps);
    if s0 == Sign::Zero {
        return true;
    }
    let s1 = Sign::of(plane.height(&seg.b), eps);
    s1 == Sign::Zero || s0 != s1
}

/// Crossing point of the segment with the plane. `eps` widens the accepted
/// range beyond both endpoints by an absolute distance.
pub fn plane3_segment_point<T: Scalar>(plane: &Plane3<T>, seg: &Segment3<T>, eps: T) -> Option<Point3<T>> {
    let len = seg.length();
    if len.is_tiny() {
        return None;
    }
    let dir = seg.direction() / len;
    let n_dot_d = plane.normal.dot(&dir);
    if n_dot_d.is_tiny() {
        return None;
    }
    let t = -plane.height(&seg.a) / n_dot_d;
    (t >= -eps && t <= len + eps).then(|| seg.a + dir * t)
}

/// Parameter of the line/plane crossing, `None` when parallel.
pub fn ray3_plane3<T: Scalar>(ray: &Ray3<T>, plane: &Plane3<T>) -> Option<T> {
    let dot = ray.direction.dot(&plane.normal);
    if dot.is_tiny() {
        return None;
    }
    Some(-plane.height(&ray.origin) / dot)
}

/// [`ray3_plane3`] with `+inf` standing for "parallel".
pub fn ray3_plane3_t<T: Scalar>(ray: &Ray3<T>, plane: &Plane3<T>) -> T {
    ray3_plane3(ray, plane).unwrap_or_else(T::infinity)
}

pub fn ray3_plane3_point<T: Scalar>(ray: &Ray3<T>, plane: &Plane3<T>) -> Option<Point3<T>> {
    ray3_plane3(ray, plane).map(|t| ray.at(t))
}

/// Segment parameter in `[0, 1]` where it crosses the plane.
pub fn segment3_plane3<T: Scalar>(seg: &Segment3<T>, plane: &Plane3<T>) -> Option<T> {
    ray3_plane3(&seg.as_ray(), plane).filter(|t| *t >= T::zero() && *t <= T::one())
}

/// Relation of two 3D planes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlanePlane3<T: Scalar> {
    /// Intersection line with unit direction `n0 × n1`.
    Line(Ray3<T>),
    Coincident,
    Parallel,
}

pub fn plane3_plane3<T: Scalar>(p0: &Plane3<T>, p1: &Plane3<T>) -> PlanePlane3<T> {
    let dir = p0.normal.cross(&p1.normal);
    let len = dir.norm();
    if len.is_tiny() {
        let same_side = p0.normal.dot(&p1.normal) >= T::zero();
        let d1 = if same_side { p1.distance } else { -p1.distance };
        return if (p0.distance - d1).is_tiny() {
            PlanePlane3::Coincident
        } else {
            PlanePlane3::Parallel
        };
    }

    let dir = dir / len;
    let m = Matrix3::from_rows([p0.normal, p1.normal, dir]);
    match m.solve(&Vector3::new(p0.distance, p1.distance, T::zero())) {
        Some(x) => PlanePlane3::Line(Ray3::new(Point3::from_vals(x.coords), dir)),
        None => {
            trace!("plane/plane system singular despite non-parallel normals");
            PlanePlane3::Parallel
        }
    }
}

#[inline]
pub fn planes_intersect_3<T: Scalar>(p0: &Plane3<T>, p1: &Plane3<T>) -> bool {
    !matches!(plane3_plane3(p0, p1), PlanePlane3::Parallel)
}

/// Common point of three planes, `None` when the normals are linearly
/// dependent.
pub fn plane3_plane3_plane3<T: Scalar>(p0: &Plane3<T>, p1: &Plane3<T>, p2: &Plane3<T>) -> Option<Point3<T>> {
    let m = Matrix3::from_rows([p0.normal, p1.normal, p2.normal]);
    let x = m.solve(&Vector3::new(p0.distance, p1.distance, p2.distance));
    if x.is_none() {
        trace!("three-plane system is singular");
    }
    x.map(|v| Point3::from_vals(v.coords))
}

pub fn plane3_intersects_triangle<T: Scalar>(plane: &Plane3<T>, tri: &Triangle3<T>) -> bool {
    let s = plane.sign(&tri.p0);
    s == 0 || s != plane.sign(&tri.p1) || s != plane.sign(&tri.p2)
}

pub fn plane3_intersects_sphere<T: Scalar>(plane: &Plane3<T>, sphere: &Sphere3<T>) -> bool {
    sphere.is_valid() && sphere.radius >= plane.height(&sphere.center).abs()
}

/// Any vertex within `±eps` or vertices on different sides.
pub fn plane3_intersects_polygon<T: Scalar>(plane: &Plane3<T>, poly: &Polygon3<T>, eps: T) -> bool {
    let mut pts = poly.points().iter();
    let Some(first) = pts.next() else {
        return false;
    };
    let s0 = Sign::of(plane.height(first), eps);
    if s0 == Sign::Zero {
        return true;
    }
    pts.any(|p| Sign::of(plane.height(p), eps) != s0)
}

/// Segment along which the plane cuts a convex polygon.
///
/// Polygons lying entirely within `±eps`, or entirely on one side, have no
/// cut line.
pub fn plane3_convex_polygon_cut<T: Scalar>(
    plane: &Plane3<T>,
    poly: &Polygon3<T>,
    eps: T,
) -> Option<Segment3<T>> {
    let pts = poly.points();
    let count = pts.len();
    if count < 2 {
        return None;
    }
    let corner_signs: Vec<Sign> = pts.iter().map(|p| Sign::of(plane.height(p), eps)).collect();
    let all = corner_signs
        .iter()
        .fold(Signs::NONE, |acc, s| acc | s.as_signs());
    if all == Signs::ZERO || all == Signs::NEGATIVE || all == Signs::POSITIVE {
        return None;
    }

    let mut first: Option<Point3<T>> = None;
    for i in 0..count {
        let j = (i + 1) % count;
        let (si, sj) = (corner_signs[i], corner_signs[j]);
        if si == sj && si != Sign::Zero {
            continue;
        }
        let Some(p) = plane3_segment_point(plane, &Segment3::new(pts[i], pts[j]), eps) else {
            continue;
        };
        match first {
            None => first = Some(p),
            // Both edges meeting at an on-plane vertex report that vertex.
            Some(f) if are_equal(&f, &p, eps) => {}
            Some(f) => return Some(Segment3::new(f, p)),
        }
    }
    None
}

/// Closed test: an endpoint on the line counts.
pub fn plane2_intersects_segment<T: Scalar>(plane: &Plane2<T>, seg: &Segment2<T>) -> bool {
    plane.height(&seg.a) * plane.height(&seg.b) <= T::zero()
}

/// Like [`plane2_intersects_segment`], also accepting segments that stay
/// within `±eps` of the line.
pub fn plane2_intersects_segment_eps<T: Scalar>(plane: &Plane2<T>, seg: &Segment2<T>, eps: T) -> bool {
    let d0 = plane.height(&seg.a);
    let d1 = plane.height(&seg.b);
    d0 * d1 < eps * eps * plane.normal.norm2()
}

/// Crossing point of the segment with the line: an endpoint within `±eps`
/// is returned as is, and a segment lying inside the band yields its
/// midpoint.
pub fn plane2_segment_point<T: Scalar>(plane: &Plane2<T>, seg: &Segment2<T>, eps: T) -> Option<Point2<T>> {
    let strict = |h: T| {
        if h > -eps {
            if h < eps { 0 } else { 1 }
        } else {
            -1
        }
    };
    let s0 = strict(plane.height(&seg.a));
    let s1 = strict(plane.height(&seg.b));

    if s0 == s1 {
        return (s0 == 0).then(|| seg.midpoint());
    }
    if s0 == 0 {
        return Some(seg.a);
    }
    if s1 == 0 {
        return Some(seg.b);
    }
    let dir = seg.direction();
    let t = (plane.distance - plane.normal.dot(&seg.a.as_vector())) / plane.normal.dot(&dir);
    Some(seg.a + dir * t)
}

/// Infinite lines intersect unless parallel.
pub fn plane2_intersects_ray<T: Scalar>(plane: &Plane2<T>, ray: &Ray2<T>) -> bool {
    !plane.normal.dot(&ray.direction).is_tiny()
}

pub fn plane2_ray_point<T: Scalar>(plane: &Plane2<T>, ray: &Ray2<T>) -> Option<Point2<T>> {
    let nd = plane.normal.dot(&ray.direction);
    if nd.is_tiny() {
        return None;
    }
    Some(ray.at(-plane.height(&ray.origin) / nd))
}

/// Crossing point of two lines via the cross product of their homogeneous
/// coefficients.
pub fn plane2_plane2<T: Scalar>(p0: &Plane2<T>, p1: &Plane2<T>) -> Option<Point2<T>> {
    let hit = p0.coefficients().cross(&p1.coefficients());
    if hit.z().is_tiny() {
        return None;
    }
    Some(Point2::new(hit.x() / hit.z(), hit.y() / hit.z()))
}

#[inline]
pub fn planes_intersect_2<T: Scalar>(p0: &Plane2<T>, p1: &Plane2<T>) -> bool {
    plane2_plane2(p0, p1).is_some()
}

/// Do the points lie on more than one side of (or on) the line?
pub fn plane2_divides<'a, T: Scalar, I>(plane: &Plane2<T>, points: I) -> bool
where
    I: IntoIterator<Item = &'a Point2<T>>,
{
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return false;
    };
    let s0 = plane.sign(first);
    iter.any(|p| plane.sign(p) != s0)
}

pub fn aabb2_intersects_plane2<T: Scalar>(b: &Aabb2<T>, plane: &Plane2<T>) -> bool {
    b.is_valid() && plane2_divides(plane, b.corners().iter())
}
