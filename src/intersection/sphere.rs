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

use crate::{
    geometry::{ray::Ray3, sphere::Sphere3, triangle::Triangle3},
    numeric::scalar::Scalar,
};

/// Does the ray come within the radius somewhere in `[max(0, tmin), tmax]`?
///
/// The closest approach is clamped into the range, so the ray is one-sided
/// even when `tmin` is negative.
pub fn ray3_intersects_sphere<T: Scalar>(ray: &Ray3<T>, sphere: &Sphere3<T>, tmin: T, tmax: T) -> bool {
    if sphere.is_invalid() {
        return false;
    }
    let l2 = ray.direction.norm2();
    let mut t = if l2.is_tiny() {
        T::zero()
    } else {
        ray.direction.dot(&(sphere.center - ray.origin)) / l2
    };
    t = t.max(T::zero()).max(tmin).min(tmax);
    ray.at(t).distance_squared_to(&sphere.center) <= sphere.radius_squared()
}

/// Both line parameters where the infinite line crosses the sphere surface,
/// in ascending order for a positive-length direction.
pub fn ray3_sphere<T: Scalar>(ray: &Ray3<T>, sphere: &Sphere3<T>) -> Option<(T, T)> {
    if sphere.is_invalid() {
        return None;
    }
    let o = ray.origin - sphere.center;
    let a = ray.direction.norm2();
    if a.is_tiny() {
        return None;
    }
    let b = o.dot(&ray.direction);
    let c = o.norm2() - sphere.radius_squared();
    let disc = b * b - a * c;
    if disc < T::zero() {
        return None;
    }
    // Pairs the root that avoids cancellation with its Vieta partner.
    let q = if b < T::zero() { -b + disc.sqrt() } else { -b - disc.sqrt() };
    if q == T::zero() {
        return Some((T::zero(), T::zero()));
    }
    let (t0, t1) = (q / a, c / q);
    Some(if t0 <= t1 { (t0, t1) } else { (t1, t0) })
}

pub fn sphere3_intersects_triangle<T: Scalar>(sphere: &Sphere3<T>, tri: &Triangle3<T>) -> bool {
    sphere.is_valid() && tri.closest_point(&sphere.center).distance_squared_to(&sphere.center) <= sphere.radius_squared()
}

pub fn spheres_intersect_3<T: Scalar>(s0: &Sphere3<T>, s1: &Sphere3<T>) -> bool {
    if s0.is_invalid() || s1.is_invalid() {
        return false;
    }
    let r = s0.radius + s1.radius;
    s0.center.distance_squared_to(&s1.center) <= r * r
}
