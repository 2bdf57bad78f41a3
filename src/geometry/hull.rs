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
    error::GeometryError,
    geometry::{plane::Plane3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Convex solid given as the intersection of half-spaces. Every plane normal
/// points away from the solid, so inside means non-positive height.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull3<T: Scalar> {
    planes: Vec<Plane3<T>>,
}

impl<T: Scalar> Hull3<T> {
    pub fn new(planes: Vec<Plane3<T>>) -> Result<Self, GeometryError> {
        if planes.is_empty() {
            return Err(GeometryError::EmptyHull);
        }
        Ok(Hull3 { planes })
    }

    #[inline]
    pub fn planes(&self) -> &[Plane3<T>] {
        &self.planes
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

/// A [`Hull3`] with the per-plane index of the box corner that minimises the
/// plane height, precomputed from the normal's sign pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct FastHull3<T: Scalar> {
    pub hull: Hull3<T>,
    pub min_corner_indices: Vec<usize>,
}

impl<T: Scalar> FastHull3<T> {
    pub fn new(hull: Hull3<T>) -> Self {
        let min_corner_indices = hull
            .planes()
            .iter()
            .map(|p| min_corner_index(&p.normal))
            .collect();
        FastHull3 {
            hull,
            min_corner_indices,
        }
    }
}

/// Corner index (bit `i` = max along axis `i`) minimising `n · corner`.
#[inline]
pub fn min_corner_index<T: Scalar>(n: &Vector3<T>) -> usize {
    let zero = T::zero();
    (if n.x() < zero { 1 } else { 0 })
        | (if n.y() < zero { 2 } else { 0 })
        | (if n.z() < zero { 4 } else { 0 })
}
