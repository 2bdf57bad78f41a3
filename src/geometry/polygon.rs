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

use std::ops::Index;

use crate::{
    geometry::{
        aabb::Aabb,
        plane::Plane3,
        point::{Point, Point2},
        segment::Segment,
        vector::{Vector, Vector3},
    },
    kernel::orientation::Winding,
    numeric::scalar::Scalar,
};

/// Closed polygon given by its vertex loop; the last vertex connects back to
/// the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T: Scalar, const N: usize> {
    pub points: Vec<Point<T, N>>,
}

pub type Polygon2<T> = Polygon<T, 2>;
pub type Polygon3<T> = Polygon<T, 3>;

impl<T: Scalar, const N: usize> Polygon<T, N> {
    pub fn new(points: Vec<Point<T, N>>) -> Self {
        Polygon { points }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline(always)]
    pub fn points(&self) -> &[Point<T, N>] {
        &self.points
    }

    /// Edge segments, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment<T, N>> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Edge direction vectors, including the closing edge.
    pub fn edge_vectors(&self) -> impl Iterator<Item = Vector<T, N>> + '_ {
        self.edges().map(|e| e.direction())
    }

    pub fn bounding_box(&self) -> Aabb<T, N> {
        Aabb::from_points(self.points.iter().copied())
    }

    /// Vertex average.
    pub fn centroid(&self) -> Point<T, N> {
        if self.points.is_empty() {
            return Point::nan();
        }
        let mut sum = Vector::zero();
        for p in &self.points {
            sum += p.as_vector();
        }
        Point::origin() + sum / T::of(self.points.len() as f64)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Polygon<T, N> {
    type Output = Point<T, N>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.points[i]
    }
}

impl<T: Scalar> Polygon<T, 2> {
    /// Shoelace area, positive for counter-clockwise loops.
    pub fn signed_area(&self) -> T {
        let n = self.points.len();
        let mut sum = T::zero();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum = sum + (a.x() * b.y() - b.x() * a.y());
        }
        sum * T::half()
    }

    pub fn winding(&self) -> Option<Winding> {
        let area = self.signed_area();
        if area.is_tiny() {
            None
        } else if area > T::zero() {
            Some(Winding::Ccw)
        } else {
            Some(Winding::Cw)
        }
    }
}

impl<T: Scalar> Polygon<T, 3> {
    /// Newell normal; its length is twice the projected area.
    pub fn newell_normal(&self) -> Vector3<T> {
        let n = self.points.len();
        let mut normal = Vector3::zero();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            normal[0] = normal[0] + (a.y() - b.y()) * (a.z() + b.z());
            normal[1] = normal[1] + (a.z() - b.z()) * (a.x() + b.x());
            normal[2] = normal[2] + (a.x() - b.x()) * (a.y() + b.y());
        }
        normal
    }

    /// Supporting plane through the vertex average, `None` when the polygon
    /// has no area.
    pub fn plane(&self) -> Option<Plane3<T>> {
        let normal = self.newell_normal().try_normalized()?;
        Some(Plane3::from_normal_point(normal, &self.centroid()))
    }

    /// Vertices expressed in the in-plane basis of `plane`.
    pub fn to_plane_coords(&self, plane: &Plane3<T>) -> Polygon2<T> {
        let (u, v) = plane.basis();
        let origin = plane.point();
        Polygon::new(
            self.points
                .iter()
                .map(|p| {
                    let d = *p - origin;
                    Point2::new(d.dot(&u), d.dot(&v))
                })
                .collect(),
        )
    }
}
