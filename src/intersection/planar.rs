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

//! Composite 2D predicates for triangles, quads and polygons.
//!
//! Each test first looks for crossing edges and then falls back to a single
//! containment check per side, which settles the "one encloses the other"
//! case. Edge tests report collinear overlaps as hits.

use crate::{
    geometry::{
        plane::Plane2,
        polygon::Polygon2,
        quad::Quad2,
        ray::Ray2,
        segment::Segment2,
        triangle::Triangle2,
    },
    intersection::{
        containment::{polygon2_contains_point_any_winding, quad2_contains_point, triangle2_contains_point},
        linear::{ray2_intersects_segment, segments_intersect_2},
        plane::{plane2_divides, plane2_intersects_segment},
        sat::convex_polygons_intersect_2,
    },
    numeric::scalar::Scalar,
};

fn any_edge_hits<T: Scalar>(edges: &[Segment2<T>], seg: &Segment2<T>) -> bool {
    edges.iter().any(|e| segments_intersect_2(e, seg))
}

/// Line through the ray as a 2D plane.
fn ray_line<T: Scalar>(ray: &Ray2<T>) -> Plane2<T> {
    Plane2::from_points(&ray.origin, &(ray.origin + ray.direction))
}

/// True if the segment crosses the triangle or lies inside it.
pub fn triangle2_intersects_segment<T: Scalar>(tri: &Triangle2<T>, seg: &Segment2<T>) -> bool {
    triangle2_contains_point(tri, &seg.a)
        || triangle2_contains_point(tri, &seg.b)
        || any_edge_hits(&tri.edges(), seg)
}

/// Rays are two-sided here. A zero direction never hits.
pub fn triangle2_intersects_ray<T: Scalar>(tri: &Triangle2<T>, ray: &Ray2<T>) -> bool {
    if ray.direction.is_tiny() {
        return false;
    }
    triangle2_contains_point(tri, &ray.origin) || tri.edges().iter().any(|e| ray2_intersects_segment(ray, e))
}

pub fn triangle2_intersects_plane<T: Scalar>(tri: &Triangle2<T>, plane: &Plane2<T>) -> bool {
    tri.edges().iter().any(|e| plane2_intersects_segment(plane, e))
}

/// Symmetric in its arguments: crossing edges, or either triangle holding
/// a vertex of the other.
pub fn triangles_intersect_2<T: Scalar>(t0: &Triangle2<T>, t1: &Triangle2<T>) -> bool {
    let e1 = t1.edges();
    t0.edges().iter().any(|e| any_edge_hits(&e1, e))
        || triangle2_contains_point(t0, &t1.p0)
        || triangle2_contains_point(t1, &t0.p0)
}

pub fn quad2_intersects_segment<T: Scalar>(quad: &Quad2<T>, seg: &Segment2<T>) -> bool {
    quad2_contains_point(quad, &seg.a)
        || quad2_contains_point(quad, &seg.b)
        || any_edge_hits(&quad.edges(), seg)
}

pub fn quad2_intersects_ray<T: Scalar>(quad: &Quad2<T>, ray: &Ray2<T>) -> bool {
    plane2_divides(&ray_line(ray), quad.points().iter())
}

pub fn quad2_intersects_plane<T: Scalar>(quad: &Quad2<T>, plane: &Plane2<T>) -> bool {
    plane2_divides(plane, quad.points().iter())
}

pub fn quad2_intersects_triangle<T: Scalar>(quad: &Quad2<T>, tri: &Triangle2<T>) -> bool {
    tri.edges().iter().any(|e| quad2_intersects_segment(quad, e))
        || quad2_contains_point(quad, &tri.p0)
        || triangle2_contains_point(tri, &quad.p0)
}

pub fn quads_intersect_2<T: Scalar>(q0: &Quad2<T>, q1: &Quad2<T>) -> bool {
    q1.edges().iter().any(|e| quad2_intersects_segment(q0, e))
        || quad2_contains_point(q0, &q1.p0)
        || quad2_contains_point(q1, &q0.p0)
}

/// Polygons of either winding; a polygon with no usable winding only
/// intersects through its edges.
pub fn polygon2_intersects_segment<T: Scalar>(poly: &Polygon2<T>, seg: &Segment2<T>) -> bool {
    poly.edges().any(|e| segments_intersect_2(&e, seg)) || polygon2_contains_point_any_winding(poly, &seg.a)
}

pub fn polygon2_intersects_ray<T: Scalar>(poly: &Polygon2<T>, ray: &Ray2<T>) -> bool {
    plane2_divides(&ray_line(ray), poly.points().iter())
}

pub fn polygon2_intersects_plane<T: Scalar>(poly: &Polygon2<T>, plane: &Plane2<T>) -> bool {
    plane2_divides(plane, poly.points().iter())
}

pub fn polygon2_intersects_triangle<T: Scalar>(poly: &Polygon2<T>, tri: &Triangle2<T>) -> bool {
    let Some(first) = poly.points().first() else {
        return false;
    };
    poly.edges().any(|e| triangle2_intersects_segment(tri, &e))
        || triangle2_contains_point(tri, first)
        || polygon2_contains_point_any_winding(poly, &tri.p0)
}

pub fn polygon2_intersects_quad<T: Scalar>(poly: &Polygon2<T>, quad: &Quad2<T>) -> bool {
    let Some(first) = poly.points().first() else {
        return false;
    };
    poly.edges().any(|e| quad2_intersects_segment(quad, &e))
        || quad2_contains_point(quad, first)
        || polygon2_contains_point_any_winding(poly, &quad.p0)
}

/// Both polygons must be convex.
#[inline]
pub fn polygons_intersect_2<T: Scalar>(p0: &Polygon2<T>, p1: &Polygon2<T>) -> bool {
    convex_polygons_intersect_2(p0, p1)
}

