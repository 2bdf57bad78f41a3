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

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::{
    geometry::{aabb::Aabb, point::Point},
    numeric::scalar::Scalar,
};

/// Per-axis outside bits of a point against a box: bit `2i` is "below min"
/// and bit `2i + 1` is "above max" along axis `i`. Zero means inside or on
/// the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutsideFlags(u32);

impl OutsideFlags {
    pub const NONE: OutsideFlags = OutsideFlags(0);

    #[inline(always)]
    pub const fn min_bit(axis: usize) -> OutsideFlags {
        OutsideFlags(1 << (2 * axis))
    }

    #[inline(always)]
    pub const fn max_bit(axis: usize) -> OutsideFlags {
        OutsideFlags(1 << (2 * axis + 1))
    }

    /// Both bits of `axis`.
    #[inline(always)]
    pub const fn axis(axis: usize) -> OutsideFlags {
        OutsideFlags(3 << (2 * axis))
    }

    #[inline(always)]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn intersects(self, other: OutsideFlags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for OutsideFlags {
    type Output = OutsideFlags;
    #[inline(always)]
    fn bitor(self, rhs: OutsideFlags) -> OutsideFlags {
        OutsideFlags(self.0 | rhs.0)
    }
}

impl BitAnd for OutsideFlags {
    type Output = OutsideFlags;
    #[inline(always)]
    fn bitand(self, rhs: OutsideFlags) -> OutsideFlags {
        OutsideFlags(self.0 & rhs.0)
    }
}

impl BitOrAssign for OutsideFlags {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: OutsideFlags) {
        self.0 |= rhs.0;
    }
}

impl Not for OutsideFlags {
    type Output = OutsideFlags;
    #[inline(always)]
    fn not(self) -> OutsideFlags {
        OutsideFlags(!self.0)
    }
}

#[inline]
pub fn outside_flags<T: Scalar, const N: usize>(b: &Aabb<T, N>, p: &Point<T, N>) -> OutsideFlags {
    let mut flags = OutsideFlags::NONE;
    for i in 0..N {
        if p[i] < b.min[i] {
            flags |= OutsideFlags::min_bit(i);
        }
        if p[i] > b.max[i] {
            flags |= OutsideFlags::max_bit(i);
        }
    }
    flags
}

/// Exact box/segment test given the endpoints' precomputed outside flags.
///
/// Each violated boundary plane is clipped at most once: the segment point on
/// that plane is reclassified without the bit just solved for, and an empty
/// remainder means the segment touches the box there.
pub fn aabb_intersects_segment_with_flags<T: Scalar, const N: usize>(
    b: &Aabb<T, N>,
    p0: &Point<T, N>,
    p1: &Point<T, N>,
    out0: OutsideFlags,
    out1: OutsideFlags,
) -> bool {
    if out0.intersects(out1) {
        return false;
    }
    if out0.is_empty() || out1.is_empty() {
        return true;
    }

    let d = *p1 - *p0;
    let crossed = out0 | out1;
    for axis in 0..N {
        for (bit, bound) in [
            (OutsideFlags::min_bit(axis), b.min[axis]),
            (OutsideFlags::max_bit(axis), b.max[axis]),
        ] {
            if !crossed.intersects(bit) {
                continue;
            }
            if d[axis] == T::zero() {
                continue;
            }
            let t = (bound - p0[axis]) / d[axis];
            let mut p = *p0 + d * t;
            p[axis] = bound;
            if (outside_flags(b, &p) & !bit).is_empty() {
                return true;
            }
        }
    }
    false
}

pub fn aabb_intersects_segment<T: Scalar, const N: usize>(
    b: &Aabb<T, N>,
    p0: &Point<T, N>,
    p1: &Point<T, N>,
) -> bool {
    aabb_intersects_segment_with_flags(b, p0, p1, outside_flags(b, p0), outside_flags(b, p1))
}
