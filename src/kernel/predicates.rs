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

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::geometry::point::Point;
use crate::numeric::scalar::Scalar;

/// Three-valued classification of a signed distance against `±eps`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// `Zero` iff `|h| <= eps`.
    #[inline(always)]
    pub fn of<T: Scalar>(h: T, eps: T) -> Sign {
        if h < -eps {
            Sign::Negative
        } else if h > eps {
            Sign::Positive
        } else {
            Sign::Zero
        }
    }

    #[inline(always)]
    pub fn as_signs(self) -> Signs {
        match self {
            Sign::Negative => Signs::NEGATIVE,
            Sign::Zero => Signs::ZERO,
            Sign::Positive => Signs::POSITIVE,
        }
    }

    #[inline(always)]
    pub fn as_i32(self) -> i32 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

/// Union of [`Sign`] buckets, used to fold many samples into one summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signs(u8);

impl Signs {
    pub const NONE: Signs = Signs(0);
    pub const NEGATIVE: Signs = Signs(1);
    pub const ZERO: Signs = Signs(2);
    pub const POSITIVE: Signs = Signs(4);
    pub const NON_POSITIVE: Signs = Signs(3);
    pub const NON_ZERO: Signs = Signs(5);
    pub const NON_NEGATIVE: Signs = Signs(6);
    pub const ALL: Signs = Signs(7);

    #[inline(always)]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bucket of `other` is present in `self`.
    #[inline(always)]
    pub fn contains(self, other: Signs) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when at least one bucket is shared.
    #[inline(always)]
    pub fn intersects(self, other: Signs) -> bool {
        self.0 & other.0 != 0
    }

    /// Both strictly negative and strictly positive samples are present.
    #[inline(always)]
    pub fn is_mixed(self) -> bool {
        self.contains(Signs::NON_ZERO)
    }
}

impl BitOr for Signs {
    type Output = Signs;
    #[inline(always)]
    fn bitor(self, rhs: Signs) -> Signs {
        Signs(self.0 | rhs.0)
    }
}

impl BitAnd for Signs {
    type Output = Signs;
    #[inline(always)]
    fn bitand(self, rhs: Signs) -> Signs {
        Signs(self.0 & rhs.0)
    }
}

impl BitOrAssign for Signs {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Signs) {
        self.0 |= rhs.0;
    }
}

impl BitAndAssign for Signs {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Signs) {
        self.0 &= rhs.0;
    }
}

impl From<Sign> for Signs {
    fn from(sign: Sign) -> Self {
        sign.as_signs()
    }
}

#[inline(always)]
pub fn signs<T: Scalar>(h: T, eps: T) -> Signs {
    Sign::of(h, eps).as_signs()
}

pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>, eps: T) -> bool {
    (0..N).all(|i| (p1[i] - p2[i]).abs() < eps)
}

/// Coordinate-proportionality collinearity check.
pub fn are_collinear<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
    eps: T,
) -> bool {
    for i in 0..N {
        let ui = b[i] - a[i];
        let vi = c[i] - a[i];

        if ui.abs() > eps {
            let r = vi / ui;
            for j in (i + 1)..N {
                let uj = b[j] - a[j];
                let vj = c[j] - a[j];
                if (vj - uj * r).abs() > eps {
                    return false;
                }
            }
            return true;
        } else if vi.abs() > eps {
            return false;
        }
    }
    // a == b: collinear iff c coincides too
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3;

    #[test]
    fn sign_classification() {
        assert_eq!(Sign::of(-1.0, 0.1), Sign::Negative);
        assert_eq!(Sign::of(0.1, 0.1), Sign::Zero);
        assert_eq!(Sign::of(-0.1, 0.1), Sign::Zero);
        assert_eq!(Sign::of(0.2, 0.1), Sign::Positive);
        assert_eq!(Sign::of(0.0, 0.0), Sign::Zero);
    }

    #[test]
    fn sign_unions() {
        let mut s = Signs::NONE;
        s |= signs(-2.0, 1e-9);
        s |= signs(0.0, 1e-9);
        assert_eq!(s, Signs::NON_POSITIVE);
        assert!(!s.is_mixed());
        s |= signs(3.0, 1e-9);
        assert_eq!(s, Signs::ALL);
        assert!(s.is_mixed());
        assert!(Signs::NON_NEGATIVE.contains(Signs::ZERO));
        assert!(!Signs::NON_NEGATIVE.contains(Signs::NEGATIVE));
        assert_eq!(Signs::NON_ZERO & Signs::NON_NEGATIVE, Signs::POSITIVE);
    }

    #[test]
    fn collinearity() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 1.0);
        assert!(are_collinear(&a, &b, &Point3::new(3.0, 3.0, 3.0), 1e-9));
        assert!(!are_collinear(&a, &b, &Point3::new(3.0, 3.0, 2.0), 1e-9));
        assert!(are_equal(&a, &Point3::new(0.0, 1e-12, 0.0), 1e-9));
    }
}
