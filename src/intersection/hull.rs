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

//! Half-space tests against convex hulls with outward-facing normals.

use crate::{
    geometry::{
        aabb::Aabb3,
        hull::{FastHull3, Hull3},
        plane::Plane3,
        point::Point3,
        ray::Ray3,
        segment::Segment3,
        sphere::Sphere3,
    },
    intersection::plane::{PlanePlane3, plane3_plane3, ray3_plane3},
    numeric::scalar::Scalar,
};

/// Classification of a volume against a hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Outside,
    Intersecting,
    Inside,
}

impl Containment {
    #[inline]
    pub fn intersects(self) -> bool {
        self != Containment::Outside
    }
}

pub fn hull3_contains_point<T: Scalar>(hull: &Hull3<T>, p: &Point3<T>) -> bool {
    hull.planes().iter().rev().all(|plane| plane.height(p) <= T::zero())
}

/// Ray parameter in `[tmin, tmax]` where the ray is inside the hull.
///
/// Finite range ends are tried first. Otherwise the planes are visited in
/// order and the first crossing that lies within every other half-space is
/// returned, which is not necessarily the nearest one.
pub fn hull3_ray<T: Scalar>(hull: &Hull3<T>, ray: &Ray3<T>, tmin: T, tmax: T) -> Option<T> {
    if tmin.is_finite() && hull3_contains_point(hull, &ray.at(tmin)) {
        return Some(tmin);
    }
    if tmax.is_finite() && hull3_contains_point(hull, &ray.at(tmax)) {
        return Some(tmax);
    }

    let planes = hull.planes();
    for (i, plane) in planes.iter().enumerate() {
        let Some(t) = ray3_plane3(ray, plane) else {
            continue;
        };
        if t < tmin || t > tmax {
            continue;
        }
        let candidate = ray.at(t);
        let contained = planes
            .iter()
            .enumerate()
            .all(|(u, other)| u == i || other.height(&candidate) <= T::tiny());
        if contained {
            return Some(t);
        }
    }
    None
}

pub fn hull3_intersects_ray<T: Scalar>(hull: &Hull3<T>, ray: &Ray3<T>) -> bool {
    hull3_ray(hull, ray, T::neg_infinity(), T::infinity()).is_some()
}

pub fn hull3_intersects_segment<T: Scalar>(hull: &Hull3<T>, seg: &Segment3<T>) -> bool {
    hull3_contains_point(hull, &seg.a)
        || hull3_contains_point(hull, &seg.b)
        || hull3_ray(hull, &seg.as_ray(), T::zero(), T::one()).is_some()
}

/// Walks the intersection lines of `plane` with every non-parallel hull plane.
pub fn hull3_intersects_plane<T: Scalar>(hull: &Hull3<T>, plane: &Plane3<T>) -> bool {
    hull.planes().iter().any(|p| match plane3_plane3(p, plane) {
        PlanePlane3::Line(line) => hull3_intersects_ray(hull, &line),
        _ => false,
    })
}

pub fn hull3_classify_aabb<T: Scalar>(hull: &Hull3<T>, b: &Aabb3<T>) -> Containment {
    if b.is_invalid() {
        return Containment::Outside;
    }
    let mut intersecting = false;
    for plane in hull.planes() {
        let (min, max) = b.min_max_in_direction(&plane.normal);
        if plane.height(&min) > T::zero() {
            return Containment::Outside;
        }
        if plane.height(&max) >= T::zero() {
            intersecting = true;
        }
    }
    if intersecting {
        Containment::Intersecting
    } else {
        Containment::Inside
    }
}

#[inline]
pub fn hull3_intersects_aabb<T: Scalar>(hull: &Hull3<T>, b: &Aabb3<T>) -> bool {
    hull3_classify_aabb(hull, b).intersects()
}

/// Conservative near the hull's silhouette edges, where it may report a hit
/// for a box the hull misses.
pub fn fast_hull3_classify_aabb<T: Scalar>(fast: &FastHull3<T>, b: &Aabb3<T>) -> Containment {
    if b.is_invalid() {
        return Containment::Outside;
    }
    let mut intersecting = false;
    for (plane, &min_index) in fast.hull.planes().iter().zip(&fast.min_corner_indices) {
        if plane.height(&b.corner(min_index)) > T::zero() {
            return Containment::Outside;
        }
        if plane.height(&b.corner(min_index ^ 7)) >= T::zero() {
            intersecting = true;
        }
    }
    if intersecting {
        Containment::Intersecting
    } else {
        Containment::Inside
    }
}

#[inline]
pub fn fast_hull3_intersects_aabb<T: Scalar>(fast: &FastHull3<T>, b: &Aabb3<T>) -> bool {
    fast_hull3_classify_aabb(fast, b).intersects()
}

pub fn hull3_classify_sphere<T: Scalar>(hull: &Hull3<T>, sphere: &Sphere3<T>) -> Containment {
    if sphere.is_invalid() {
        return Containment::Outside;
    }
    let mut intersecting = false;
    for plane in hull.planes() {
        let h = plane.height(&sphere.center);
        if h > sphere.radius {
            return Containment::Outside;
        }
        if h.abs() < sphere.radius {
            intersecting = true;
        }
    }
    if intersecting {
        Containment::Intersecting
    } else {
        Containment::Inside
    }
}

#[inline]
pub fn hull3_intersects_sphere<T: Scalar>(hull: &Hull3<T>, sphere: &Sphere3<T>) -> bool {
    hull3_classify_sphere(hull, sphere).intersects()
}
