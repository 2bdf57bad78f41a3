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

use isect::geometry::{
    Aabb2, Aabb3, Cylinder3, Plane2, Point2, Point3, Polygon2, Polygon3, Quad2, Quad3, Ray2, Ray3,
    Segment2, Segment3, Sphere3, Triangle2, Triangle3, Vector2, Vector3,
};
use isect::intersection::clip::{
    aabb2_intersects_polygon, aabb2_intersects_quad, aabb2_intersects_ray, aabb2_intersects_segment,
    aabb2_intersects_triangle, aabb2_plane2_clip, aabb3_intersects_cylinder, aabb3_intersects_polygon,
    aabb3_intersects_quad, aabb3_intersects_ray, aabb3_intersects_segment, aabb3_intersects_sphere,
    aabb3_intersects_triangle, aabb3_ray,
};
use isect::intersection::outside::{OutsideFlags, outside_flags};

fn unit_box() -> Aabb3<f64> {
    Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
}

fn unit_box_2() -> Aabb2<f64> {
    Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0))
}

#[test]
fn test_outside_flags_layout() {
    let b = unit_box();
    assert!(outside_flags(&b, &Point3::new(0.5, 0.5, 0.5)).is_empty());
    assert!(outside_flags(&b, &Point3::new(1.0, 0.0, 1.0)).is_empty());
    assert_eq!(outside_flags(&b, &Point3::new(-1.0, 0.5, 0.5)), OutsideFlags::min_bit(0));
    assert_eq!(outside_flags(&b, &Point3::new(0.5, 2.0, 0.5)), OutsideFlags::max_bit(1));
    assert_eq!(
        outside_flags(&b, &Point3::new(-1.0, 0.5, 2.0)).bits(),
        (1 << 0) | (1 << 5)
    );
}

#[test]
fn test_segment_box_3d() {
    let b = unit_box();
    let inside = Segment3::new(Point3::new(0.2, 0.2, 0.2), Point3::new(5.0, 5.0, 5.0));
    let through = Segment3::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(2.0, 0.5, 0.5));
    let same_side = Segment3::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(-0.5, 3.0, 3.0));
    let corner_miss = Segment3::new(Point3::new(-0.5, 1.0, 0.5), Point3::new(1.0, 2.5, 0.5));
    let corner_graze = Segment3::new(Point3::new(-1.0, 0.0, 0.5), Point3::new(1.0, 2.0, 0.5));

    assert!(aabb3_intersects_segment(&b, &inside));
    assert!(aabb3_intersects_segment(&b, &through));
    assert!(!aabb3_intersects_segment(&b, &same_side));
    assert!(!aabb3_intersects_segment(&b, &corner_miss));
    assert!(aabb3_intersects_segment(&b, &corner_graze));
}

#[test]
fn test_triangle_through_box_edges() {
    let tri = Triangle3::new(
        Point3::new(0.5, 0.5, -1.0),
        Point3::new(0.5, 0.5, 2.0),
        Point3::new(2.0, 0.5, 0.5),
    );
    assert!(aabb3_intersects_triangle(&unit_box(), &tri));
}

#[test]
fn test_triangle_beyond_box() {
    let tri = Triangle3::new(
        Point3::new(2.0, 2.0, 2.0),
        Point3::new(3.0, 2.0, 2.0),
        Point3::new(2.0, 3.0, 2.0),
    );
    assert!(!aabb3_intersects_triangle(&unit_box(), &tri));
}

#[test]
fn test_large_triangle_cuts_box_without_edge_hits() {
    // Every edge passes outside the box; only the diagonal test finds it.
    let tri = Triangle3::new(
        Point3::new(-10.0, -10.0, 0.5),
        Point3::new(10.0, -10.0, 0.5),
        Point3::new(0.0, 10.0, 0.5),
    );
    assert!(aabb3_intersects_triangle(&unit_box(), &tri));

    let quad = Quad3::new(
        Point3::new(-5.0, -5.0, 0.3),
        Point3::new(5.0, -5.0, 0.3),
        Point3::new(5.0, 5.0, 0.3),
        Point3::new(-5.0, 5.0, 0.3),
    );
    assert!(aabb3_intersects_quad(&unit_box(), &quad));

    let above = Quad3::new(
        Point3::new(-5.0, -5.0, 1.5),
        Point3::new(5.0, -5.0, 1.5),
        Point3::new(5.0, 5.0, 1.5),
        Point3::new(-5.0, 5.0, 1.5),
    );
    assert!(!aabb3_intersects_quad(&unit_box(), &above));
}

#[test]
fn test_polygon_enclosing_box_section() {
    let ring = Polygon3::new(vec![
        Point3::new(-4.0, -4.0, 0.5),
        Point3::new(4.0, -4.0, 0.5),
        Point3::new(4.0, 4.0, 0.5),
        Point3::new(0.0, 6.0, 0.5),
        Point3::new(-4.0, 4.0, 0.5),
    ]);
    assert!(aabb3_intersects_polygon(&unit_box(), &ring));

    // Concave polygon whose notch contains the box.
    let notched = Polygon3::new(vec![
        Point3::new(-4.0, -4.0, 0.5),
        Point3::new(4.0, -4.0, 0.5),
        Point3::new(4.0, 4.0, 0.5),
        Point3::new(0.5, -2.0, 0.5),
        Point3::new(-4.0, 4.0, 0.5),
    ]);
    assert!(!aabb3_intersects_polygon(&unit_box(), &notched));
}

#[test]
fn test_ray_box_nearest_entry() {
    let b = unit_box();
    let ray = Ray3::new(Point3::new(-2.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(aabb3_ray(&b, &ray).unwrap(), 2.0);

    let inside = Ray3::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(aabb3_ray(&b, &inside), Some(0.0));

    let oblique = Ray3::new(Point3::new(-1.0, -3.0, 0.5), Vector3::new(1.0, 2.0, 0.0));
    assert_relative_eq!(aabb3_ray(&b, &oblique).unwrap(), 1.5);

    let miss = Ray3::new(Point3::new(-1.0, 2.0, 0.5), Vector3::new(1.0, 0.0, 0.0));
    assert!(!aabb3_intersects_ray(&b, &miss));
    assert!(!aabb3_intersects_ray(&Aabb3::invalid(), &ray));
}

#[test]
fn test_sphere_and_cylinder_against_box() {
    let b = unit_box();
    assert!(aabb3_intersects_sphere(&b, &Sphere3::new(Point3::new(1.5, 0.5, 0.5), 0.6)));
    assert!(!aabb3_intersects_sphere(&b, &Sphere3::new(Point3::new(1.5, 1.5, 1.5), 0.8)));
    assert!(!aabb3_intersects_sphere(&b, &Sphere3::invalid()));

    let cyl = Cylinder3::new(Point3::new(1.5, 0.5, -1.0), Point3::new(1.5, 0.5, 2.0), 0.6);
    assert!(aabb3_intersects_cylinder(&b, &cyl));
    let far = Cylinder3::new(Point3::new(3.0, 0.5, -1.0), Point3::new(3.0, 0.5, 2.0), 0.6);
    assert!(!aabb3_intersects_cylinder(&b, &far));
}

#[test]
fn test_segment_and_ray_box_2d() {
    let b = unit_box_2();
    let crossing = Segment2::new(Point2::new(-1.0, 0.5), Point2::new(2.0, 0.5));
    let miss = Segment2::new(Point2::new(-1.0, 0.5), Point2::new(0.5, 3.0));
    assert!(aabb2_intersects_segment(&b, &crossing));
    assert!(!aabb2_intersects_segment(&b, &miss));

    let ray = Ray2::new(Point2::new(-5.0, -5.0), Vector2::new(1.0, 1.0));
    assert!(aabb2_intersects_ray(&b, &ray));
    let above = Ray2::new(Point2::new(-5.0, 2.0), Vector2::new(1.0, 0.0));
    assert!(!aabb2_intersects_ray(&b, &above));
}

#[test]
fn test_plane2_clip() {
    let b = unit_box_2();
    let diagonal = Plane2::from_points(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0));
    let clip = aabb2_plane2_clip(&b, &diagonal).unwrap();
    let (lo, hi) = if clip.a.x() < clip.b.x() { (clip.a, clip.b) } else { (clip.b, clip.a) };
    assert_relative_eq!(lo.x(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(lo.y(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(hi.x(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(hi.y(), 1.0, epsilon = 1e-12);

    let outside = Plane2::from_points(&Point2::new(0.0, 3.0), &Point2::new(1.0, 3.0));
    assert!(aabb2_plane2_clip(&b, &outside).is_none());
}

#[test]
fn test_planar_primitives_against_box_2d() {
    let b = unit_box_2();
    let around = Triangle2::new(Point2::new(-5.0, -5.0), Point2::new(10.0, -5.0), Point2::new(-5.0, 10.0));
    let away = Triangle2::new(Point2::new(2.0, 2.0), Point2::new(3.0, 2.0), Point2::new(2.0, 3.0));
    let corner = Triangle2::new(Point2::new(0.5, 1.5), Point2::new(1.5, 0.5), Point2::new(1.5, 1.5));
    assert!(aabb2_intersects_triangle(&b, &around));
    assert!(!aabb2_intersects_triangle(&b, &away));
    assert!(aabb2_intersects_triangle(&b, &corner));

    let quad = Quad2::new(
        Point2::new(-1.0, -1.0),
        Point2::new(2.0, -1.0),
        Point2::new(2.0, 2.0),
        Point2::new(-1.0, 2.0),
    );
    assert!(aabb2_intersects_quad(&b, &quad));

    let cw_square = Polygon2::new(vec![
        Point2::new(-1.0, -1.0),
        Point2::new(-1.0, 2.0),
        Point2::new(2.0, 2.0),
        Point2::new(2.0, -1.0),
    ]);
    assert!(aabb2_intersects_polygon(&b, &cw_square));
    assert!(!aabb2_intersects_polygon(&b, &Polygon2::new(Vec::new())));
}
