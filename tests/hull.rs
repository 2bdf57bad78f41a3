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
use isect::geometry::{Aabb3, FastHull3, Hull3, Plane3, Point3, Ray3, Segment3, Sphere3, Vector3};
use isect::intersection::hull::{
    Containment, fast_hull3_classify_aabb, fast_hull3_intersects_aabb, hull3_classify_aabb,
    hull3_classify_sphere, hull3_contains_point, hull3_intersects_aabb, hull3_intersects_plane,
    hull3_intersects_ray, hull3_intersects_segment, hull3_intersects_sphere, hull3_ray,
};

/// The unit cube `[0, 1]^3` with outward normals, `-x` face first.
fn unit_cube() -> Hull3<f64> {
    Hull3::new(vec![
        Plane3::new(Vector3::new(-1.0, 0.0, 0.0), 0.0),
        Plane3::new(Vector3::new(1.0, 0.0, 0.0), 1.0),
        Plane3::new(Vector3::new(0.0, -1.0, 0.0), 0.0),
        Plane3::new(Vector3::new(0.0, 1.0, 0.0), 1.0),
        Plane3::new(Vector3::new(0.0, 0.0, -1.0), 0.0),
        Plane3::new(Vector3::new(0.0, 0.0, 1.0), 1.0),
    ])
    .unwrap()
}

/// `|x| + |y| + |z| <= 1`.
fn octahedron() -> Hull3<f64> {
    let s = 1.0 / 3.0_f64.sqrt();
    let mut planes = Vec::new();
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                planes.push(Plane3::new(Vector3::new(x * s, y * s, z * s), s));
            }
        }
    }
    Hull3::new(planes).unwrap()
}

fn cube(min: f64, max: f64) -> Aabb3<f64> {
    Aabb3::new(Point3::new(min, min, min), Point3::new(max, max, max))
}

#[test]
fn test_empty_hull_is_rejected() {
    assert_eq!(Hull3::<f64>::new(Vec::new()), Err(GeometryError::EmptyHull));
}

#[test]
fn test_hull_contains_point() {
    let hull = unit_cube();
    assert_eq!(hull.len(), 6);
    assert!(hull3_contains_point(&hull, &Point3::new(0.5, 0.5, 0.5)));
    assert!(hull3_contains_point(&hull, &Point3::new(1.0, 0.5, 0.5)));
    assert!(!hull3_contains_point(&hull, &Point3::new(1.5, 0.5, 0.5)));
    assert!(!hull3_contains_point(&hull, &Point3::new(0.5, -0.1, 0.5)));
}

#[test]
fn test_hull_ray_parameter() {
    let hull = unit_cube();
    let ray = Ray3::new(Point3::new(-1.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
    let t = hull3_ray(&hull, &ray, 0.0, 10.0).unwrap();
    assert_relative_eq!(t, 1.0);

    // Starting inside reports the range start.
    let inside = Ray3::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(hull3_ray(&hull, &inside, 0.0, 10.0), Some(0.0));

    // Range ends before the cube.
    assert_eq!(hull3_ray(&hull, &ray, 0.0, 0.5), None);
}

#[test]
fn test_hull_ray_hits_on_boundary() {
    let hull = unit_cube();
    let ray = Ray3::new(Point3::new(3.0, 0.25, 0.75), Vector3::new(-1.0, 0.0, 0.0));
    let t = hull3_ray(&hull, &ray, 0.0, f64::INFINITY).unwrap();
    let p = ray.at(t);
    assert!(hull3_contains_point(&hull, &p));
    assert!((2.0..=3.0).contains(&t));
}

#[test]
fn test_hull_intersects_ray() {
    let hull = unit_cube();
    let through = Ray3::new(Point3::new(-1.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
    assert!(hull3_intersects_ray(&hull, &through));

    let above = Ray3::new(Point3::new(-1.0, 2.0, 0.5), Vector3::new(1.0, 0.0, 0.0));
    assert!(!hull3_intersects_ray(&hull, &above));

    let diagonal = Ray3::new(Point3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
    assert!(hull3_intersects_ray(&hull, &diagonal));
}

#[test]
fn test_hull_intersects_segment() {
    let hull = unit_cube();
    let inner = Segment3::new(Point3::new(0.2, 0.2, 0.2), Point3::new(0.4, 0.4, 0.4));
    assert!(hull3_intersects_segment(&hull, &inner));

    let crossing = Segment3::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(2.0, 0.5, 0.5));
    assert!(hull3_intersects_segment(&hull, &crossing));

    let short = Segment3::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(-0.5, 0.5, 0.5));
    assert!(!hull3_intersects_segment(&hull, &short));

    let apart = Segment3::new(Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0));
    assert!(!hull3_intersects_segment(&hull, &apart));
}

#[test]
fn test_hull_intersects_plane() {
    let hull = unit_cube();
    let cutting = Plane3::new(Vector3::new(0.0, 0.0, 1.0), 0.5);
    assert!(hull3_intersects_plane(&hull, &cutting));

    let oblique = Plane3::from_normal_point(Vector3::new(1.0, 1.0, 1.0), &Point3::new(0.5, 0.5, 0.5));
    assert!(hull3_intersects_plane(&hull, &oblique));

    let far = Plane3::new(Vector3::new(0.0, 0.0, 1.0), 5.0);
    assert!(!hull3_intersects_plane(&hull, &far));
}

#[test]
fn test_hull_classify_aabb() {
    let hull = unit_cube();
    assert_eq!(hull3_classify_aabb(&hull, &cube(0.25, 0.75)), Containment::Inside);
    assert_eq!(hull3_classify_aabb(&hull, &cube(0.5, 1.5)), Containment::Intersecting);
    assert_eq!(hull3_classify_aabb(&hull, &cube(2.0, 3.0)), Containment::Outside);
    assert_eq!(hull3_classify_aabb(&hull, &Aabb3::invalid()), Containment::Outside);

    let touching = Aabb3::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
    assert_eq!(hull3_classify_aabb(&hull, &touching), Containment::Intersecting);

    assert!(hull3_intersects_aabb(&hull, &cube(0.5, 1.5)));
    assert!(!hull3_intersects_aabb(&hull, &cube(2.0, 3.0)));
}

#[test]
fn test_fast_hull_matches_plain_hull() {
    for hull in [unit_cube(), octahedron()] {
        let fast = FastHull3::new(hull.clone());
        for b in [
            cube(-0.2, 0.2),
            cube(0.25, 0.75),
            cube(0.3, 0.6),
            cube(0.5, 1.5),
            cube(2.0, 3.0),
            cube(-3.0, -2.0),
            Aabb3::new(Point3::new(-0.1, -0.1, 0.95), Point3::new(0.1, 0.1, 1.5)),
        ] {
            assert_eq!(
                fast_hull3_classify_aabb(&fast, &b),
                hull3_classify_aabb(&hull, &b),
                "box {:?}",
                b
            );
        }
    }
}

#[test]
fn test_fast_hull_octahedron() {
    let fast = FastHull3::new(octahedron());
    // (+,+,+) normal selects the min corner 0, (-,-,-) selects 7.
    assert_eq!(fast.min_corner_indices[7], 0);
    assert_eq!(fast.min_corner_indices[0], 7);

    assert_eq!(fast_hull3_classify_aabb(&fast, &cube(-0.2, 0.2)), Containment::Inside);
    assert_eq!(fast_hull3_classify_aabb(&fast, &cube(0.3, 0.6)), Containment::Intersecting);
    assert_eq!(fast_hull3_classify_aabb(&fast, &cube(0.5, 1.0)), Containment::Outside);
    assert!(!fast_hull3_intersects_aabb(&fast, &Aabb3::invalid()));
}

#[test]
fn test_hull_classify_sphere() {
    let hull = unit_cube();
    let inside = Sphere3::new(Point3::new(0.5, 0.5, 0.5), 0.25);
    let straddling = Sphere3::new(Point3::new(1.0, 0.5, 0.5), 0.25);
    let outside = Sphere3::new(Point3::new(2.0, 0.5, 0.5), 0.5);

    assert_eq!(hull3_classify_sphere(&hull, &inside), Containment::Inside);
    assert_eq!(hull3_classify_sphere(&hull, &straddling), Containment::Intersecting);
    assert_eq!(hull3_classify_sphere(&hull, &outside), Containment::Outside);
    assert_eq!(hull3_classify_sphere(&hull, &Sphere3::invalid()), Containment::Outside);

    assert!(hull3_intersects_sphere(&hull, &straddling));
    assert!(!hull3_intersects_sphere(&hull, &outside));
}
