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

use isect::geometry::{Cylinder3, Plane3, Point3, Vector3};
use isect::intersection::cylinder::{
    CylinderSection, plane3_cylinder_circle, plane3_cylinder_ellipse, plane3_cylinder_rays,
    plane3_cylinder_section, plane3_intersects_cylinder, plane3_is_orthogonal_to_axis,
    plane3_is_parallel_to_axis,
};

fn z_cylinder() -> Cylinder3<f64> {
    Cylinder3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 2.0), 1.0)
}

fn x_plane(d: f64) -> Plane3<f64> {
    Plane3::new(Vector3::new(1.0, 0.0, 0.0), d)
}

fn radial_distance(p: &Point3<f64>) -> f64 {
    (p.x() * p.x() + p.y() * p.y()).sqrt()
}

#[test]
fn test_axis_relations() {
    let cyl = z_cylinder();
    assert!(plane3_is_parallel_to_axis(&x_plane(0.5), &cyl));
    assert!(!plane3_is_orthogonal_to_axis(&x_plane(0.5), &cyl));

    let cap = Plane3::new(Vector3::new(0.0, 0.0, 1.0), 1.0);
    assert!(plane3_is_orthogonal_to_axis(&cap, &cyl));
    assert!(!plane3_is_parallel_to_axis(&cap, &cyl));
}

#[test]
fn test_parallel_plane_cuts_two_lines() {
    let cyl = z_cylinder();
    assert!(plane3_intersects_cylinder(&x_plane(0.5), &cyl));

    let CylinderSection::Lines([a, b]) = plane3_cylinder_rays(&x_plane(0.5), &cyl) else {
        panic!("expected two lines");
    };
    for line in [a, b] {
        assert_relative_eq!(line.origin.x(), 0.5);
        assert_relative_eq!(radial_distance(&line.origin), 1.0, epsilon = 1e-12);
        assert_relative_eq!(line.direction.z().abs(), 1.0);
    }
    assert_relative_eq!(a.origin.y(), -b.origin.y(), epsilon = 1e-12);
    assert_relative_eq!(a.origin.y().abs(), 0.75_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_parallel_plane_on_the_negative_side() {
    let cyl = z_cylinder();
    let CylinderSection::Lines([a, b]) = plane3_cylinder_rays(&x_plane(-0.5), &cyl) else {
        panic!("expected two lines");
    };
    assert_relative_eq!(a.origin.x(), -0.5);
    assert_relative_eq!(b.origin.x(), -0.5);
}

#[test]
fn test_tangent_and_missing_planes() {
    let cyl = z_cylinder();
    match plane3_cylinder_section(&x_plane(1.0), &cyl) {
        CylinderSection::Tangent(line) => {
            assert_relative_eq!(line.origin.x(), 1.0);
            assert_relative_eq!(line.origin.y(), 0.0);
        }
        other => panic!("expected a tangent line, got {:?}", other),
    }

    assert!(!plane3_intersects_cylinder(&x_plane(2.0), &cyl));
    assert!(plane3_cylinder_section(&x_plane(2.0), &cyl).is_empty());
}

#[test]
fn test_orthogonal_plane_gives_circle() {
    let cyl = z_cylinder();
    let cap = Plane3::new(Vector3::new(0.0, 0.0, 1.0), 1.0);
    let circle = plane3_cylinder_circle(&cap, &cyl).unwrap();
    assert_relative_eq!(circle.center.z(), 1.0);
    assert_relative_eq!(circle.center.x(), 0.0);
    assert_relative_eq!(circle.radius, 1.0);
    assert!(matches!(plane3_cylinder_section(&cap, &cyl), CylinderSection::Circle(_)));

    // A plane that is not orthogonal has no circular section.
    assert!(plane3_cylinder_circle(&x_plane(0.5), &cyl).is_none());
}

#[test]
fn test_oblique_plane_gives_ellipse() {
    let cyl = z_cylinder();
    let plane = Plane3::from_normal_point(Vector3::new(0.0, 1.0, 1.0), &Point3::new(0.0, 0.0, 1.0));
    assert!(plane3_intersects_cylinder(&plane, &cyl));

    let ellipse = plane3_cylinder_ellipse(&plane, &cyl).unwrap();
    assert_relative_eq!(ellipse.center.z(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(ellipse.major.norm(), 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(ellipse.minor.norm(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(ellipse.major.dot(&ellipse.minor), 0.0, epsilon = 1e-12);

    // Perimeter points lie on both the plane and the cylinder wall.
    for alpha in [0.0, 0.7, 2.0, 4.5] {
        let p = ellipse.point_at(alpha);
        assert_relative_eq!(plane.height(&p), 0.0, epsilon = 1e-12);
        assert_relative_eq!(radial_distance(&p), 1.0, epsilon = 1e-12);
    }

    assert!(plane3_cylinder_ellipse(&x_plane(0.5), &cyl).is_none());
    assert!(matches!(plane3_cylinder_section(&plane, &cyl), CylinderSection::Ellipse(_)));
}
