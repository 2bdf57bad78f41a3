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

use approx::assert_relative_eq;

use isect::GeometryError;
use isect::geometry::{Point3, Polygon3, Quad3, Ray3, Segment3, Triangle3, Vector3};
use isect::intersection::triangle::{
    quad3_intersects_triangle, quads_intersect_3, ray3_intersects_quad, ray3_intersects_triangle,
    ray3_polygon, ray3_polygon_indexed, ray3_quad, ray3_triangle, ray3_triangle_hit,
    segment3_intersects_quad, segment3_intersects_triangle, segment3_triangle, triangle3_triangle3_cut,
    triangles_intersect_3,
};
use isect::operations::{EarClipping, Triangulate};

fn unit_triangle() -> Triangle3<f64> {
    Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    )
}

fn down_ray(x: f64, y: f64) -> Ray3<f64> {
    Ray3::new(Point3::new(x, y, 1.0), Vector3::new(0.0, 0.0, -1.0))
}

#[test]
fn test_ray_hits_triangle_with_barycentrics() {
    let hit = ray3_triangle_hit(&down_ray(0.25, 0.5), &unit_triangle(), 0.0, f64::INFINITY).unwrap();
    assert_relative_eq!(hit.t, 1.0);
    assert_relative_eq!(hit.u, 0.25);
    assert_relative_eq!(hit.v, 0.5);
}

#[test]
fn test_ray_misses_triangle() {
    assert!(!ray3_intersects_triangle(&down_ray(0.75, 0.75), &unit_triangle()));
    assert!(!ray3_intersects_triangle(&down_ray(-0.1, 0.5), &unit_triangle()));
}

#[test]
fn test_parallel_ray_never_hits() {
    let ray = Ray3::new(Point3::new(-1.0, 0.2, 0.0), Vector3::new(1.0, 0.0, 0.0));
    assert!(!ray3_intersects_triangle(&ray, &unit_triangle()));
}

#[test]
fn test_parameter_range_is_half_open() {
    let ray = down_ray(0.25, 0.25);
    let tri = unit_triangle();
    assert_eq!(ray3_triangle(&ray, &tri, 1.0, 2.0), Some(1.0));
    assert_eq!(ray3_triangle(&ray, &tri, 0.0, 1.0), None);
    // The line is two-sided when the range allows negative parameters.
    let up = Ray3::new(Point3::new(0.25, 0.25, 1.0), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(ray3_triangle(&up, &tri, f64::NEG_INFINITY, f64::INFINITY), Some(-1.0));
}

#[test]
fn test_segment_triangle() {
    let tri = unit_triangle();
    let through = Segment3::new(Point3::new(0.2, 0.2, -1.0), Point3::new(0.2, 0.2, 1.0));
    let p = segment3_triangle(&through, &tri).unwrap();
    assert_relative_eq!(p.z(), 0.0, epsilon = 1e-12);

    let short = Segment3::new(Point3::new(0.2, 0.2, 1.0), Point3::new(0.2, 0.2, 0.5));
    assert!(!segment3_intersects_triangle(&short, &tri));

    // Ending exactly on the triangle is outside [0, 1).
    let ending = Segment3::new(Point3::new(0.2, 0.2, 1.0), Point3::new(0.2, 0.2, 0.0));
    assert!(!segment3_intersects_triangle(&ending, &tri));
}

#[test]
fn test_ray_and_segment_quad() {
    let quad = Quad3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(2.0, 2.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    );
    // One hit in each triangle of the split.
    assert_relative_eq!(ray3_quad(&down_ray(1.5, 0.5), &quad, 0.0, 10.0).unwrap(), 1.0);
    assert_relative_eq!(ray3_quad(&down_ray(0.5, 1.5), &quad, 0.0, 10.0).unwrap(), 1.0);
    assert!(!ray3_intersects_quad(&down_ray(2.5, 0.5), &quad));

    let seg = Segment3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, 1.0, -1.0));
    assert!(segment3_intersects_quad(&seg, &quad));
}

#[test]
fn test_triangles_3d_edge_crossing() {
    let t0 = unit_triangle();
    let piercing = Triangle3::new(
        Point3::new(0.2, 0.2, -1.0),
        Point3::new(0.2, 0.2, 1.0),
        Point3::new(2.0, 2.0, 0.5),
    );
    assert!(triangles_intersect_3(&t0, &piercing));
    assert!(triangles_intersect_3(&piercing, &t0));

    let far = Triangle3::new(
        Point3::new(5.0, 5.0, -1.0),
        Point3::new(5.0, 5.0, 1.0),
        Point3::new(6.0, 5.0, 0.0),
    );
    assert!(!triangles_intersect_3(&t0, &far));
}

#[test]
fn test_triangle_cut_line() {
    let t0 = Triangle3::new(
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(3.0, -1.0, 0.0),
        Point3::new(-1.0, 3.0, 0.0),
    );
    let t1 = Triangle3::new(
        Point3::new(0.0, 0.0, -1.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 0.0),
    );
    let cut = triangle3_triangle3_cut(&t0, &t1).unwrap();
    for p in [cut.a, cut.b] {
        assert_relative_eq!(p.y(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z(), 0.0, epsilon = 1e-12);
    }
    assert!(cut.a.x() == 0.0 || cut.b.x() == 0.0);
}

#[test]
fn test_quad_triangle_and_quad_quad() {
    let floor = Quad3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    let wall = Quad3::new(
        Point3::new(0.5, -1.0, -1.0),
        Point3::new(0.5, 2.0, -1.0),
        Point3::new(0.5, 2.0, 1.0),
        Point3::new(0.5, -1.0, 1.0),
    );
    assert!(quads_intersect_3(&floor, &wall));

    let tri = Triangle3::new(
        Point3::new(0.5, 0.5, -1.0),
        Point3::new(0.5, 0.5, 1.0),
        Point3::new(0.6, 0.5, 1.0),
    );
    assert!(quad3_intersects_triangle(&floor, &tri));

    let lifted = Quad3::new(
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    );
    assert!(!quads_intersect_3(&floor, &lifted));
}

fn l_shape_3d() -> Polygon3<f64> {
    Polygon3::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(2.0, 1.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(1.0, 2.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    ])
}

#[test]
fn test_ray_polygon_concave() {
    let poly = l_shape_3d();
    assert_relative_eq!(ray3_polygon(&down_ray(0.5, 1.5), &poly, 0.0, 10.0).unwrap(), 1.0);
    assert_relative_eq!(ray3_polygon(&down_ray(1.5, 0.5), &poly, 0.0, 10.0).unwrap(), 1.0);
    // Inside the notch.
    assert!(ray3_polygon(&down_ray(1.5, 1.5), &poly, 0.0, 10.0).is_none());
}

#[test]
fn test_ray_polygon_with_index_list() {
    let poly = l_shape_3d();
    let triangles = EarClipping.triangulate(&poly, 1e-5).unwrap();
    assert_eq!(triangles.len(), 4);
    let t = ray3_polygon_indexed(&down_ray(0.5, 0.5), poly.points(), &triangles, 0.0, 10.0);
    assert_relative_eq!(t.unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_ray_polygon_index_list_out_of_range() {
    let poly = l_shape_3d();
    let n = poly.points().len();
    let bad = [[0, 1, n], [n + 3, 0, 1]];
    assert!(ray3_polygon_indexed(&down_ray(0.5, 0.5), poly.points(), &bad, 0.0, 10.0).is_none());

    let mut mixed = bad.to_vec();
    mixed.extend(EarClipping.triangulate(&poly, 1e-5).unwrap());
    let t = ray3_polygon_indexed(&down_ray(0.5, 0.5), poly.points(), &mixed, 0.0, 10.0);
    assert_relative_eq!(t.unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_degenerate_polygon_is_never_hit() {
    let collinear = Polygon3::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ]);
    assert_eq!(
        EarClipping.triangulate(&collinear, 1e-5),
        Err(GeometryError::DegeneratePolygon)
    );
    assert!(ray3_polygon(&down_ray(1.0, 0.0), &collinear, -10.0, 10.0).is_none());

    let two = Polygon3::new(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)]);
    assert_eq!(
        EarClipping.triangulate(&two, 1e-5),
        Err(GeometryError::TooFewVertices { count: 2 })
    );
}
