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

//! Pairwise intersection and containment predicates.
//!
//! Functions are named `<a>_intersects_<b>` for boolean tests and
//! `<a>_<b>` when they also return the hit (a parameter, point, or result
//! enum). The dimension suffix is part of the primitive name
//! (`aabb3`, `plane2`, ...).

pub mod clip;
pub mod containment;
pub mod cylinder;
pub mod frustum;
pub mod hull;
pub mod linear;
pub mod outside;
pub mod planar;
pub mod plane;
pub mod sat;
pub mod sphere;
pub mod triangle;

pub use clip::*;
pub use containment::*;
pub use cylinder::*;
pub use frustum::*;
pub use hull::*;
pub use linear::*;
pub use outside::*;
pub use planar::*;
pub use plane::*;
pub use sat::*;
pub use sphere::*;
pub use triangle::*;
