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

use crate::numeric::scalar::Scalar;

/// Closed 1D interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range1<T: Scalar> {
    pub min: T,
    pub max: T,
}

impl<T: Scalar> Range1<T> {
    /// Builds `[a, b]`, swapping the bounds if they are reversed.
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Range1 { min: a, max: b }
        } else {
            Range1 { min: b, max: a }
        }
    }

    /// The empty interval, `[+inf, -inf]`.
    #[inline]
    pub fn invalid() -> Self {
        Range1 {
            min: T::infinity(),
            max: T::neg_infinity(),
        }
    }

    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut r = Range1::invalid();
        for v in values {
            r.extend_by(v);
        }
        r
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    #[inline]
    pub fn extend_by(&mut self, v: T) {
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }

    #[inline]
    pub fn contains(&self, v: T) -> bool {
        v >= self.min && v <= self.max
    }

    #[inline]
    pub fn size(&self) -> T {
        self.max - self.min
    }

    /// Overlap of two intervals that touch or overlap within `eps`.
    /// Touching intervals produce a degenerate range.
    pub fn intersects(&self, other: &Range1<T>, eps: T) -> Option<Range1<T>> {
        if !self.is_valid() || !other.is_valid() {
            return None;
        }
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        if lo > hi + eps {
            return None;
        }
        Some(Range1 {
            min: lo,
            max: hi.max(lo),
        })
    }

    /// Closed-interval overlap test without tolerance.
    #[inline]
    pub fn overlaps(&self, other: &Range1<T>) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}
