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

//! Plane sections of a cylinder taken as infinite along its axis.
//!
//! Planes are expected to carry unit normals.

use log::trace;

use crate::{
    geometry::{
        conic::{Circle3, Ellipse3},
        cylinder::Cylinder3,
        plane::Plane3,
        ray::Ray3,
        vector::VectorOps,
    },
    intersection::plane::ray3_plane3,
    numeric::scalar::Scalar,
};

/// The plane normal is orthogonal to the axis: the section is a pair of
/// lines, a tangent line, or empty.
pub fn plane3_is_parallel_to_axis<T: Scalar>(plane: &Plane3<T>, cyl: &Cylinder3<T>) -> bool {
    plane.normal.dot(&cyl.axis_direction()).is_tiny()
}

/// The plane normal is parallel to the axis: the section is a circle.
pub fn plane3_is_orthogonal_to_axis<T: Scalar>(plane: &Plane3<T>, cyl: &Cylinder3<T>) -> bool {
    plane.normal.cross(&cyl.axis_direction()).norm().is_tiny()
}

/// Shape of a plane/cylinder section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CylinderSection<T: Scalar> {
    None,
    Tangent(Ray3<T>),
    Lines([Ray3<T>; 2]),
    Circle(Circle3<T>),
    Ellipse(Ellipse3<T>),
}

impl<T: Scalar> CylinderSection<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CylinderSection::None)
    }
}

/// Every plane that is not parallel to the axis cuts the infinite cylinder.
pub fn plane3_intersects_cylinder<T: Scalar>(plane: &Plane3<T>, cyl: &Cylinder3<T>) -> bool {
    if plane3_is_parallel_to_axis(plane, cyl) {
        return plane.height(&cyl.p0).abs() < cyl.radius;
    }
    true
}

/// Lines along the axis where a parallel plane meets the surface.
pub fn plane3_cylinder_rays<T: Scalar>(plane: &Plane3<T>, cyl: &Cylinder3<T>) -> CylinderSection<T> {
    if !plane3_is_parallel_to_axis(plane, cyl) {
        return CylinderSection::None;
    }
    let h = plane.height(&cyl.p0);
    let distance = h.abs();
    let center = cyl.p0 - plane.normal * h;
    let axis = cyl.axis_direction();

    if (distance - cyl.radius).abs() <= T::tiny() {
        return CylinderSection::Tangent(Ray3::new(center, axis));
    }
    if distance > cyl.radius {
        trace!("plane parallel to cylinder axis lies outside the radius");
        return CylinderSection::None;
    }
    let offset = axis.cross(&plane.normal);
    let extent = (cyl.radius * cyl.radius - distance * distance).sqrt();
    CylinderSection::Lines([
        Ray3::new(center - offset * extent, axis),
        Ray3::new(center + offset * extent, axis),
    ])
}

pub fn plane3_cylinder_circle<T: Scalar>(plane: &Plane3<T>, cyl: &Cylinder3<T>) -> Option<Circle3<T>> {
    if !plane3_is_orthogonal_to_axis(plane, cyl) {
        return None;
    }
    let axis = cyl.axis_ray();
    let t = ray3_plane3(&axis, plane)?;
    Some(Circle3::new(axis.at(t), cyl.axis_direction(), cyl.radius))
}

/// Ellipse for oblique planes. The major axis vector is scaled to
/// `r / |cos θ|`, the minor axis to `r`.
pub fn plane3_cylinder_ellipse<T: Scalar>(plane: &Plane3<T>, cyl: &Cylinder3<T>) -> Option<Ellipse3<T>> {
    if plane3_is_parallel_to_axis(plane, cyl) || plane3_is_orthogonal_to_axis(plane, cyl) {
        trace!("plane/cylinder section is not an ellipse");
        return None;
    }
    let dir = cyl.axis_direction();
    let axis = cyl.axis_ray();
    let center = axis.at(ray3_plane3(&axis, plane)?);
    let cos_theta = dir.dot(&plane.normal);

    let normal = plane.normal;
    let major = (dir - normal * cos_theta).normalized();
    let minor = normal.cross(&major).normalized();
    // Re-derived from the minor axis so the frame stays orthogonal for
    // near-circular sections.
    let major = normal.cross(&minor).normalized();
    Some(Ellipse3::new(
        center,
        normal,
        major * (cyl.radius / cos_theta.abs()),
        minor * cyl.radius,
    ))
}

/// Dispatches on the plane orientation relative to the axis.
pub fn plane3_cylinder_section<T: Scalar>(plane: &Plane3<T>, cyl: &Cylinder3<T>) -> CylinderSection<T> {
    if plane3_is_parallel_to_axis(plane, cyl) {
        return plane3_cylinder_rays(plane, cyl);
    }
    if plane3_is_orthogonal_to_axis(plane, cyl) {
        return plane3_cylinder_circle(plane, cyl).map_or(CylinderSection::None, CylinderSection::Circle);
    }
    plane3_cylinder_ellipse(plane, cyl).map_or(CylinderSection::None, CylinderSection::Ellipse)
}
